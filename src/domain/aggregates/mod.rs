//! Aggregates module

pub mod appointment;
pub mod doctor;
pub mod medical_record;
pub mod notification;
pub mod patient;
pub mod user;

pub use appointment::{Appointment, AppointmentError, AppointmentStatus};
pub use doctor::{Doctor, DoctorPatch};
pub use medical_record::MedicalRecord;
pub use notification::{Notification, RecipientType};
pub use patient::{Patient, PatientPatch};
pub use user::User;
