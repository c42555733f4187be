use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::analytics;
use crate::app::AppContext;
use crate::error::{AppError, Result};
use crate::ui::components::utils::{split_horizontal, split_vertical};
use crate::ui::components::{grouped_bar_chart, select_list, BarGroupData};
use crate::ui::styles::{secondary_line, series_color};
use crate::ui::TerminalGuard;

/// Quarterly transaction amounts for one year, grouped by payment type.
/// Changing the year re-runs the filter and rebuilds the chart from scratch.
pub fn run_aggregated_transactions(ctx: &AppContext) -> Result<()> {
    let rows = ctx.aggregated_transactions();
    let years = analytics::transaction_years(rows);
    if years.is_empty() {
        return Ok(());
    }

    let mut guard = TerminalGuard::new()?;
    let mut year_idx = 0usize;

    loop {
        let year = years[year_idx];
        let filtered = analytics::transactions_for_year(rows, year);
        let types = analytics::transaction_types(&filtered);

        let mut quarters: Vec<u8> = filtered.iter().map(|row| row.quarter).collect();
        quarters.sort_unstable();
        quarters.dedup();

        let groups: Vec<BarGroupData> = quarters
            .iter()
            .map(|quarter| BarGroupData {
                label: format!("Q{quarter}"),
                bars: types
                    .iter()
                    .enumerate()
                    .map(|(idx, kind)| {
                        let amount = filtered
                            .iter()
                            .find(|row| row.quarter == *quarter && &row.transaction_type == kind)
                            .map(|row| row.transaction_amount)
                            .unwrap_or(0.0);
                        (amount, series_color(idx))
                    })
                    .collect(),
            })
            .collect();

        let year_labels: Vec<String> = years.iter().map(|y| y.to_string()).collect();
        let legend: Vec<Line> = types
            .iter()
            .enumerate()
            .map(|(idx, kind)| {
                Line::from(vec![
                    Span::styled("■ ", Style::default().fg(series_color(idx))),
                    Span::raw(kind.clone()),
                ])
            })
            .collect();
        let legend_height = (legend.len() as u16).max(1);

        guard.terminal_mut().draw(|f| {
            let size = f.size();
            let columns = split_horizontal(size, &[Constraint::Length(14), Constraint::Min(30)]);
            f.render_widget(
                select_list("Year", &year_labels, year_idx, true),
                columns[0],
            );

            let panels = split_vertical(
                columns[1],
                &[
                    Constraint::Min(8),
                    Constraint::Length(legend_height),
                    Constraint::Length(1),
                ],
            );

            f.render_widget(
                grouped_bar_chart(format!("Transaction Amount by Type — {year}"), &groups),
                panels[0],
            );
            f.render_widget(Paragraph::new(legend.clone()), panels[1]);
            f.render_widget(
                Paragraph::new(secondary_line("↑/↓ change year • Esc back • Ctrl+C exit")),
                panels[2],
            );
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        year_idx = if year_idx == 0 {
                            years.len() - 1
                        } else {
                            year_idx - 1
                        };
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        year_idx = (year_idx + 1) % years.len();
                    }
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Err(AppError::Cancelled);
                    }
                    _ => {}
                }
            }
        }
    }
}
