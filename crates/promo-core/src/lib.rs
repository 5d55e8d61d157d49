//! # promo-core
//!
//! Domain layer containing the promo entity, the fixed workflow step plan,
//! the repository trait, and domain errors.
//! This crate has zero dependencies on infrastructure (database, process spawning, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Promo, PromoStatus, StepStatus, StepTemplate, SubStepTemplate, SyncReport, STEP_PLAN,
};
pub use error::DomainError;
pub use traits::{PromoRepository, RepoResult};
