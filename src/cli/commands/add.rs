//! Add command - save the last run under labels

use crate::cli::args::LabelArgs;
use crate::config::Config;
use crate::engine;
use crate::error::SizeResult;
use crate::ui::{self, UiContext};

/// Execute the add command
pub async fn execute(args: LabelArgs, config: &Config) -> SizeResult<()> {
    let added = engine::add(&config.compare.cache, &args.labels).await?;

    let ctx = UiContext::detect();
    for entry in added {
        let prefix = if entry.removed_tip {
            "(removed branch data) "
        } else {
            ""
        };
        ui::step_ok(&ctx, &format!("{}Last run saved as: {}", prefix, entry.label));
    }

    Ok(())
}
