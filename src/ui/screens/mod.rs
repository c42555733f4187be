pub mod aggregated_transactions;
pub mod fallback;
pub mod map_overview;
pub mod section_menu;
pub mod top_transactions;
pub mod user_insights;

pub use aggregated_transactions::run_aggregated_transactions;
pub use fallback::run_no_data_notice;
pub use map_overview::run_map_overview;
pub use section_menu::run_section_menu;
pub use top_transactions::run_top_transactions;
pub use user_insights::run_user_insights;
