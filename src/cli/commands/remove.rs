//! Remove command - delete labels

use crate::cli::args::LabelArgs;
use crate::config::Config;
use crate::engine;
use crate::error::SizeResult;
use crate::ui::{self, UiContext};

/// Execute the remove command
pub async fn execute(args: LabelArgs, config: &Config) -> SizeResult<()> {
    let removed = engine::remove(&config.compare.cache, &args.labels).await?;

    let ctx = UiContext::detect();
    if removed.is_empty() {
        ui::remark(&ctx, "No matching labels");
        return Ok(());
    }

    for label in removed {
        ui::step_ok(&ctx, &format!("Removed: {}", label));
    }

    Ok(())
}
