//! Output functions for size tables and notices

use super::context::UiContext;
use crate::cache::is_reserved;
use crate::engine::{Comparison, Delta, LabelBlock};
use console::style;

/// Width of each numeric column
const COLUMN_WIDTH: usize = 8;

/// Header of the uncompressed column
const RAW_COLUMN: &str = "raw";

fn cell(text: impl std::fmt::Display) -> String {
    format!("{:>width$} ", text, width = COLUMN_WIDTH)
}

fn header(compressors: &[String], title: &str) -> String {
    let columns: String = std::iter::once(RAW_COLUMN)
        .chain(compressors.iter().map(String::as_str))
        .map(cell)
        .collect();
    format!("{}{}", style(columns).dim(), style(title).bold())
}

fn delta_cell(delta: &Delta) -> String {
    let text = cell(delta);
    match delta {
        Delta::Shrunk(_) => style(text).green().to_string(),
        Delta::Grown(_) => style(text).red().to_string(),
        Delta::Unchanged | Delta::NoBaseline => style(text).dim().to_string(),
    }
}

/// Title of a label block: `Compared to <label>[ @ <tip>]`
fn block_title(block: &LabelBlock) -> String {
    let name = if is_reserved(&block.label) {
        block.label.trim_start()
    } else {
        block.label.as_str()
    };

    match &block.tip {
        Some(tip) => format!("Compared to {} @ {}", name, tip),
        None => format!("Compared to {}", name),
    }
}

/// Format a comparison as console lines: the fresh sizes, then one block
/// per label separated by blank lines
pub fn format_comparison(comparison: &Comparison) -> Vec<String> {
    let mut lines = vec![header(&comparison.compressors, "Sizes")];
    for row in &comparison.sizes {
        let sizes: String = row.sizes.iter().map(cell).collect();
        lines.push(format!("{}{}", sizes, row.path));
    }

    for block in &comparison.blocks {
        lines.push(String::new());
        lines.push(header(&comparison.compressors, &block_title(block)));
        for row in &block.rows {
            let deltas: String = row.deltas.iter().map(delta_cell).collect();
            lines.push(format!("{}{}", deltas, row.path));
        }
    }

    lines
}

/// Print a comparison and where it was saved
pub fn render_comparison(ctx: &UiContext, comparison: &Comparison) {
    for line in format_comparison(comparison) {
        println!("{}", line);
    }

    if let Some(branch) = &comparison.saved_as {
        println!();
        step_ok(ctx, &format!("Saved as: {}", branch));
    }
}

/// Display a success step
pub fn step_ok(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::success(message).ok();
    } else {
        println!("{}", message);
    }
}

/// Display an info step
pub fn step_info(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::info(message).ok();
    } else {
        println!("{}", message);
    }
}

/// Display a remark/hint
pub fn remark(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::remark(message).ok();
    } else {
        println!("{}", style(message).dim());
    }
}
