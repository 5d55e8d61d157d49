//! Application services

mod sync;

pub use sync::SyncService;
