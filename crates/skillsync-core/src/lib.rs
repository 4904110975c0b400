pub mod error;
pub mod io;
pub mod report;
pub mod source;
pub mod sync;
pub mod target;

pub use error::{Result, SyncError};
pub use report::{SyncFailure, TargetReport, WrittenFile};
pub use source::{ContentRoot, SourceFile};
pub use sync::sync;
pub use target::{default_targets, Target};
