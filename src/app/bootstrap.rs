use std::path::Path;

use crate::app::{AppContext, AppController};
use crate::error::Result;
use crate::ui::ensure_interactive_terminal;

/// Entry point used by `main`: terminal preflight, then load, then the
/// session loop. The preflight runs first so a non-interactive invocation
/// fails fast without touching any data file.
pub fn run(data_dir: &Path) -> Result<()> {
    ensure_interactive_terminal()?;

    let ctx = AppContext::load(data_dir);
    let controller = AppController::new(ctx);
    controller.run()
}
