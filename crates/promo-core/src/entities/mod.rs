//! Domain entities - core business objects

mod promo;
mod step;

pub use promo::{Promo, PromoStatus, SyncReport};
pub use step::{StepStatus, StepTemplate, SubStepTemplate, STEP_PLAN};
