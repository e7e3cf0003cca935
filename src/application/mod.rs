//! Application layer
//!
//! Orchestrates use cases and coordinates domain objects.

pub mod commands;
pub mod dto;

pub use commands::{
    AppointmentService, DoctorService, MedicalRecordService, NotificationService, PatientService,
};
pub use dto::*;
