//! Domain module
//!
//! Aggregates, value objects, the session context and the access policy.

pub mod aggregates;
pub mod services;
pub mod session;
pub mod value_objects;

pub use aggregates::*;
pub use services::{AccessDenied, AccessGuard};
pub use session::{Role, Session};
pub use value_objects::*;
