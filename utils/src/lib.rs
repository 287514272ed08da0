//! Shared infrastructure utilities for BuildCost.
//!
//! - **`atomic_write`**: Crash-safe creation of new files (temp + link)

pub mod atomic_write;

pub use atomic_write::{AtomicWriteOptions, FileSyncPolicy, ParentDirSyncPolicy, atomic_write_new};
