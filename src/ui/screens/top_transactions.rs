use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::analytics;
use crate::app::AppContext;
use crate::error::{AppError, Result};
use crate::ui::components::utils::split_vertical;
use crate::ui::components::{build_table, numeric_cell, ranked_bar_chart};
use crate::ui::styles::secondary_line;
use crate::ui::TerminalGuard;
use crate::utils::{format_amount, format_count};

/// Top 10 entities by summed transaction amount: ranked table on top, bar
/// chart underneath. No selector; the ranking is computed once per visit.
pub fn run_top_transactions(ctx: &AppContext) -> Result<()> {
    let ranked = analytics::top_entities(ctx.top_transactions());

    let chart_entries: Vec<(String, f64)> = ranked
        .iter()
        .map(|entry| (entry.entity_name.clone(), entry.amount))
        .collect();

    let mut guard = TerminalGuard::new()?;

    loop {
        guard.terminal_mut().draw(|f| {
            let size = f.size();
            let table_height = ranked.len() as u16 + 3;
            let panels = split_vertical(
                size,
                &[
                    Constraint::Length(table_height),
                    Constraint::Min(8),
                    Constraint::Length(1),
                ],
            );

            let table_rows: Vec<Row> = ranked
                .iter()
                .enumerate()
                .map(|(idx, entry)| {
                    Row::new(vec![
                        Cell::from(format!("{}", idx + 1)),
                        Cell::from(entry.entity_name.clone()),
                        numeric_cell(format_count(entry.count)),
                        numeric_cell(format_amount(entry.amount)),
                    ])
                })
                .collect();

            f.render_widget(
                build_table(
                    table_rows,
                    Row::new(vec!["#", "Entity", "Count", "Amount"]),
                    vec![
                        Constraint::Length(3),
                        Constraint::Min(20),
                        Constraint::Length(14),
                        Constraint::Length(12),
                    ],
                    "Top Entities by Transaction Volume",
                ),
                panels[0],
            );

            f.render_widget(
                ranked_bar_chart(
                    "Top 10 by Total Amount".to_string(),
                    &chart_entries,
                    Color::LightGreen,
                ),
                panels[1],
            );

            f.render_widget(
                Paragraph::new(secondary_line("Esc back • Ctrl+C exit")),
                panels[2],
            );
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Err(AppError::Cancelled);
                    }
                    _ => {}
                }
            }
        }
    }
}
