//! Tuttle Core - domain models and shared facilities for the tuttle data core
//!
//! This crate provides the foundational types for the freelancer time/money
//! management application:
//! - Client, Contract, Contact, and UserProfile domain models
//! - Date-derived contract predicates (active/upcoming) against an injected clock
//! - Canonical structured error facility with a stable kind taxonomy
//! - IntentResult envelope consumed by presentation code
//! - Logging facility with a single initialization point
//!
//! Persistence lives in `tuttle-store`; the screen-facing facade in
//! `tuttle-intent`. This crate has no database dependency.

pub mod clock;
pub mod errors;
pub mod intent_result;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Result, TuttleError, TuttleErrorKind};
pub use intent_result::IntentResult;
pub use model::{Client, Contact, Contract, Cycle, TimeUnit, UserProfile};
