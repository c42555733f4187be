use crate::app::context::AppContext;
use crate::error::{AppError, Result};
use crate::ui::{
    run_aggregated_transactions, run_map_overview, run_no_data_notice, run_section_menu,
    run_top_transactions, run_user_insights, Section,
};

/// Drives the section menu and dispatches into the four display screens.
pub struct AppController {
    ctx: AppContext,
}

impl AppController {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    /// Main session loop. Each pass re-runs the selected section's whole
    /// filter/render pipeline from scratch; a failure inside one section
    /// ends that interaction only, not the session.
    pub fn run(self) -> Result<()> {
        loop {
            let section = match run_section_menu(&self.ctx)? {
                Some(section) => section,
                None => return Ok(()),
            };

            let outcome = if self.ctx.section_has_data(section) {
                self.show_section(section)
            } else {
                run_no_data_notice(section, self.ctx.warnings())
            };

            match outcome {
                Ok(()) => {}
                Err(AppError::Cancelled) => return Ok(()),
                Err(err) => {
                    log::error!("section {} failed: {err}", section.title());
                }
            }
        }
    }

    fn show_section(&self, section: Section) -> Result<()> {
        match section {
            Section::AggregatedTransactions => run_aggregated_transactions(&self.ctx),
            Section::TopTransactions => run_top_transactions(&self.ctx),
            Section::MapOverview => run_map_overview(&self.ctx),
            Section::UserInsights => run_user_insights(&self.ctx),
        }
    }
}
