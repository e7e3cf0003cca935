//! Ports module (Hexagonal Architecture)
//!
//! Interfaces between the domain core and its collaborators.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
