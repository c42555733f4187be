pub mod components;
pub mod navigation;
pub mod screens;
pub mod styles;

pub use components::terminal::{ensure_interactive_terminal, TerminalGuard};
pub use navigation::Section;
pub use screens::{
    run_aggregated_transactions, run_map_overview, run_no_data_notice, run_section_menu,
    run_top_transactions, run_user_insights,
};
