//! Prune command - keep only the given labels

use crate::cli::args::PruneArgs;
use crate::config::Config;
use crate::engine::{self, Pruned};
use crate::error::SizeResult;
use crate::ui::{self, UiContext};

/// Execute the prune command
pub async fn execute(args: PruneArgs, config: &Config) -> SizeResult<()> {
    let cache = &config.compare.cache;
    let ctx = UiContext::detect();

    match engine::prune(cache, &args.keep).await? {
        Pruned::Emptied => {
            ui::step_ok(&ctx, &format!("Size cache deleted: {}", cache.display()));
        }
        Pruned::Removed(labels) if labels.is_empty() => {
            ui::remark(&ctx, "Nothing to prune");
        }
        Pruned::Removed(labels) => {
            for label in labels {
                ui::step_ok(&ctx, &format!("Removed: {}", label));
            }
        }
    }

    Ok(())
}
