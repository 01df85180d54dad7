//! Size cache persistence
//!
//! The cache is a single JSON file holding labeled size snapshots:
//!
//! ```json
//! {
//!   "": { "version": 0.4, "tips": { "main": "<commit>" } },
//!   "main": { "dist/app.js": { "": 1024, "gz": 380 } },
//!   " last run": { "dist/app.js": { "": 1030, "gz": 382 } }
//! }
//! ```
//!
//! Older layouts are upgraded on load (see [`legacy`]); writes always use
//! the current layout.

pub mod codec;
mod legacy;
pub mod model;
pub mod order;

pub use codec::decode;
pub use model::{
    is_reserved, CacheMeta, SizeCache, SizeRecord, SizeRecordSet, CACHE_VERSION, LAST_RUN, RAW,
};
pub use order::ordered_labels;
