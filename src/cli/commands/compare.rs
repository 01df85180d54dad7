//! Compare command - measure artifacts and compare with recorded sizes

use crate::cli::args::CompareArgs;
use crate::config::{CompareConfig, Config};
use crate::engine::ReconciliationEngine;
use crate::error::{SizeError, SizeResult};
use crate::ui::{self, UiContext};
use tracing::debug;

/// Execute the compare command
pub async fn execute(args: CompareArgs, config: &Config) -> SizeResult<()> {
    let settings = resolve(args, &config.compare);
    if settings.files.is_empty() {
        return Err(SizeError::NoFiles);
    }

    debug!(
        "Comparing {} file(s) against {}",
        settings.files.len(),
        settings.cache.display()
    );

    let engine = ReconciliationEngine::from_config(&settings)?;
    let comparison = engine.compare(&settings.cache, &settings.files).await?;

    let ctx = UiContext::detect();
    ui::render_comparison(&ctx, &comparison);

    Ok(())
}

/// Command-line files and compressors take precedence over the config
fn resolve(args: CompareArgs, config: &CompareConfig) -> CompareConfig {
    let mut settings = config.clone();

    if !args.files.is_empty() {
        settings.files = args.files;
    }

    if args.no_compress {
        settings.compressors.clear();
    } else if !args.compress.is_empty() {
        settings.compressors = args.compress;
    }

    settings
}
