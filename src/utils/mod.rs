pub mod text;

pub use text::{format_amount, format_count, truncate_label};
