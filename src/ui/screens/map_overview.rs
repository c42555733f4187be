use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::analytics;
use crate::app::AppContext;
use crate::error::{AppError, Result};
use crate::ui::components::utils::{split_horizontal, split_vertical};
use crate::ui::components::{build_table, numeric_cell, select_list};
use crate::ui::styles::secondary_line;
use crate::ui::TerminalGuard;
use crate::utils::{format_amount, format_count};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Year,
    Quarter,
}

/// Per-state totals for one (year, quarter) pair. The two pickers are
/// independent: the quarter list is not narrowed by the chosen year, so a
/// pair with no rows simply yields an empty table.
pub fn run_map_overview(ctx: &AppContext) -> Result<()> {
    let rows = ctx.map_transaction_hover();
    let years = analytics::map_years(rows);
    let quarters = analytics::map_quarters(rows);
    if years.is_empty() || quarters.is_empty() {
        return Ok(());
    }

    let mut guard = TerminalGuard::new()?;
    let mut year_idx = 0usize;
    let mut quarter_idx = 0usize;
    let mut focus = Focus::Year;

    loop {
        let year = years[year_idx];
        let quarter = quarters[quarter_idx];
        let regions = analytics::top_regions(rows, year, quarter);

        let year_labels: Vec<String> = years.iter().map(|y| y.to_string()).collect();
        let quarter_labels: Vec<String> = quarters.iter().map(|q| format!("Q{q}")).collect();

        guard.terminal_mut().draw(|f| {
            let size = f.size();
            let columns = split_horizontal(size, &[Constraint::Length(14), Constraint::Min(30)]);

            let pickers = split_vertical(
                columns[0],
                &[
                    Constraint::Length(year_labels.len() as u16 + 2),
                    Constraint::Min(3),
                ],
            );
            f.render_widget(
                select_list("Year", &year_labels, year_idx, focus == Focus::Year),
                pickers[0],
            );
            f.render_widget(
                select_list("Quarter", &quarter_labels, quarter_idx, focus == Focus::Quarter),
                pickers[1],
            );

            let panels = split_vertical(columns[1], &[Constraint::Min(5), Constraint::Length(1)]);

            if regions.is_empty() {
                f.render_widget(
                    Paragraph::new("No rows for this year/quarter combination.")
                        .alignment(Alignment::Center)
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .title(format!("State Totals — {year} Q{quarter}")),
                        ),
                    panels[0],
                );
            } else {
                let table_rows: Vec<Row> = regions
                    .iter()
                    .map(|region| {
                        Row::new(vec![
                            Cell::from(region.state_name.clone()),
                            numeric_cell(format_amount(region.amount)),
                            numeric_cell(format_count(region.count)),
                        ])
                    })
                    .collect();
                f.render_widget(
                    build_table(
                        table_rows,
                        Row::new(vec!["State", "Amount", "Count"]),
                        vec![
                            Constraint::Min(20),
                            Constraint::Length(12),
                            Constraint::Length(14),
                        ],
                        format!("State Totals — {year} Q{quarter} (top 10 by amount)"),
                    ),
                    panels[0],
                );
            }

            f.render_widget(
                Paragraph::new(secondary_line(
                    "Tab switch picker • ↑/↓ change value • Esc back • Ctrl+C exit",
                )),
                panels[1],
            );
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Tab => {
                        focus = match focus {
                            Focus::Year => Focus::Quarter,
                            Focus::Quarter => Focus::Year,
                        };
                    }
                    KeyCode::Up | KeyCode::Char('k') => match focus {
                        Focus::Year => {
                            year_idx = if year_idx == 0 {
                                years.len() - 1
                            } else {
                                year_idx - 1
                            };
                        }
                        Focus::Quarter => {
                            quarter_idx = if quarter_idx == 0 {
                                quarters.len() - 1
                            } else {
                                quarter_idx - 1
                            };
                        }
                    },
                    KeyCode::Down | KeyCode::Char('j') => match focus {
                        Focus::Year => year_idx = (year_idx + 1) % years.len(),
                        Focus::Quarter => quarter_idx = (quarter_idx + 1) % quarters.len(),
                    },
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
