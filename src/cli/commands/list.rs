//! List command - show recorded labels

use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::engine::{self, ListedLabel};
use crate::error::SizeResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> SizeResult<()> {
    let labels = engine::list(&config.compare.cache).await;

    if labels.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, "No labels recorded");
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&labels),
        OutputFormat::Json => print_json(&labels)?,
        OutputFormat::Plain => print_plain(&labels),
    }

    Ok(())
}

fn print_table(labels: &[ListedLabel]) {
    println!(
        "{:<24} {:<40}",
        style("LABEL").bold(),
        style("TIP").bold()
    );
    println!("{}", "-".repeat(65));

    for entry in labels {
        let tip = match &entry.tip {
            Some(head) => style(head.as_str()).cyan(),
            None => style("-").dim(),
        };
        println!("{:<24} {:<40}", entry.label, tip);
    }

    println!();
    println!("{} label(s)", labels.len());
}

fn print_json(labels: &[ListedLabel]) -> SizeResult<()> {
    let json = serde_json::to_string_pretty(labels)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(labels: &[ListedLabel]) {
    for entry in labels {
        match &entry.tip {
            Some(head) => println!("{} @ {}", entry.label, head),
            None => println!("{}", entry.label),
        }
    }
}
