use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::ui::components::utils::centered_rect;
use crate::ui::styles::{secondary_line, warning_style};
use crate::ui::{Section, TerminalGuard};

/// Single fallback notice shown when a section's backing table is empty.
/// No chart or table is rendered; any key returns to the menu.
pub fn run_no_data_notice(section: Section, warnings: &[String]) -> Result<()> {
    let mut guard = TerminalGuard::new()?;

    loop {
        guard.terminal_mut().draw(|f| {
            let area = centered_rect(70, 60, f.size());

            let mut lines = vec![
                Line::from(Span::styled(
                    "No data available for the selected section or failed to load datasets.",
                    warning_style(),
                )),
                Line::raw(""),
                Line::from(format!("Section: {}", section.title())),
            ];
            if !warnings.is_empty() {
                lines.push(Line::raw(""));
                for warning in warnings.iter().take(6) {
                    lines.push(Line::from(Span::styled(format!("⚠ {warning}"), warning_style())));
                }
            }
            lines.push(Line::raw(""));
            lines.push(secondary_line("Press any key to return"));

            f.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .block(Block::default().borders(Borders::ALL).title("No data")),
                area,
            );
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Err(AppError::Cancelled);
                    }
                    _ => return Ok(()),
                }
            }
        }
    }
}
