pub mod bootstrap;
pub mod context;
pub mod controller;

pub use context::AppContext;
pub use controller::AppController;
