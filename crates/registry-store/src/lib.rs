//! Member registry data model and file-backed persistence.
//!
//! The registry document holds two ordered collections - pending
//! submissions and the approved roster - plus a monotonic id counter.
//! `FileStore` persists the whole document as pretty-printed JSON,
//! written atomically via a temp file and rename.

mod error;
mod store;
mod types;

pub use error::{StoreError, SubmissionError};
pub use store::{FileStore, MemoryStore, Store};
pub use types::*;
