//! Core library for `shellplan`: the schema variants requested from the
//! structured-generation API, the fixed system prompts, and validation of
//! whatever the model sends back.
//!
//! Nothing in this crate does I/O. The state machines described by
//! [`types::ActionStateMachine`] are a requested data shape — they are
//! validated here but never interpreted or executed.

pub mod error;
pub mod prompt;
pub mod schema;
pub mod types;
pub mod validate;

pub use error::{PlanError, Result};
pub use schema::SchemaVariant;
pub use types::Plan;
