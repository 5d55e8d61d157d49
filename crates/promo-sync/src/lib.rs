//! # promo-sync
//!
//! Loads the promo retroplanning sheet and rebuilds the workflow tables
//! (`promos`, `etapes`, `sous_etapes`) from it.
//!
//! - [`source`]: where the sheet comes from (rclone remote or a local file)
//! - [`sheet`]: decoding the workbook (or its JSON export) into promos
//! - [`services`]: the end-to-end sync

pub mod services;
pub mod sheet;
pub mod source;

pub use services::SyncService;
pub use sheet::{build_promos, decode_sheet, PromoBatch, SheetFormat, SheetRow};
pub use source::{source_for, LocalSheet, RcloneSource, SheetSource};
