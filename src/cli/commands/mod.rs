//! CLI command implementations

pub mod add;
pub mod compare;
pub mod empty;
pub mod list;
pub mod prune;
pub mod remove;

pub use add::execute as add;
pub use compare::execute as compare;
pub use empty::execute as empty;
pub use list::execute as list;
pub use prune::execute as prune;
pub use remove::execute as remove;
