use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::analytics;
use crate::app::AppContext;
use crate::error::{AppError, Result};
use crate::ui::components::utils::{split_horizontal, split_vertical};
use crate::ui::components::{quarterly_line_chart, select_list, LineSeries};
use crate::ui::styles::{secondary_line, series_color};
use crate::ui::TerminalGuard;

/// Registered-user growth over the quarters of one year, one line per brand.
pub fn run_user_insights(ctx: &AppContext) -> Result<()> {
    let rows = ctx.aggregated_users();
    let years = analytics::user_years(rows);
    if years.is_empty() {
        return Ok(());
    }

    let mut guard = TerminalGuard::new()?;
    let mut year_idx = 0usize;

    loop {
        let year = years[year_idx];
        let filtered = analytics::users_for_year(rows, year);
        let brands = analytics::brands(&filtered);

        let series: Vec<LineSeries> = brands
            .iter()
            .enumerate()
            .map(|(idx, brand)| {
                let mut points: Vec<(f64, f64)> = filtered
                    .iter()
                    .filter(|row| &row.brand == brand)
                    .map(|row| (f64::from(row.quarter), row.registered_users as f64))
                    .collect();
                points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
                LineSeries {
                    name: brand.clone(),
                    color: series_color(idx),
                    points,
                }
            })
            .collect();

        let year_labels: Vec<String> = years.iter().map(|y| y.to_string()).collect();

        guard.terminal_mut().draw(|f| {
            let size = f.size();
            let columns = split_horizontal(size, &[Constraint::Length(14), Constraint::Min(30)]);
            f.render_widget(
                select_list("Year", &year_labels, year_idx, true),
                columns[0],
            );

            let panels = split_vertical(columns[1], &[Constraint::Min(8), Constraint::Length(1)]);
            f.render_widget(
                quarterly_line_chart(format!("User Growth by Brand — {year}"), &series),
                panels[0],
            );
            f.render_widget(
                Paragraph::new(secondary_line("↑/↓ change year • Esc back • Ctrl+C exit")),
                panels[1],
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
