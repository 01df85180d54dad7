//! Console rendering
//!
//! Size tables are plain aligned text colored with `console`; notices use
//! `cliclack` log markers in an interactive terminal and plain lines
//! otherwise, so piped output stays greppable.

mod context;
mod output;

pub use context::UiContext;
pub use output::{format_comparison, remark, render_comparison, step_info, step_ok};
