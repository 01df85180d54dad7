//! Empty command - delete the size cache

use crate::config::Config;
use crate::engine;
use crate::error::SizeResult;
use crate::ui::{self, UiContext};

/// Execute the empty command
pub async fn execute(config: &Config) -> SizeResult<()> {
    let cache = &config.compare.cache;
    engine::empty(cache).await?;

    let ctx = UiContext::detect();
    ui::step_ok(&ctx, &format!("Size cache deleted: {}", cache.display()));
    Ok(())
}
