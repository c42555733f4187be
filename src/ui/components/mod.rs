pub mod chart;
pub mod select;
pub mod table;
pub mod terminal;
pub mod utils;

pub use chart::{grouped_bar_chart, quarterly_line_chart, ranked_bar_chart, BarGroupData, LineSeries};
pub use select::select_list;
pub use table::{build_table, numeric_cell};
pub use terminal::{ensure_interactive_terminal, TerminalGuard};
