//! Clinic Core
//!
//! Authorization-aware domain service layer for a clinical scheduling
//! backend mediating between patients, doctors and administrators.
//!
//! ## Architecture
//!
//! - **Domain Layer**: aggregates, value objects, session context, access policy
//! - **Application Layer**: use case orchestration, commands and views
//! - **Ports Layer**: hexagonal architecture interfaces
//! - **Infrastructure Layer**: in-memory gateway implementations
//!
//! ## Key aggregates
//!
//! - **Doctor**: directory entry with two unique pairs, (email, contact
//!   number) and (name, specialization)
//! - **Patient**: profile visible only to its owner or an admin
//! - **Appointment**: requested by a patient, decided by the assigned doctor
//! - **MedicalRecord**: written once per appointment; its doctor and patient
//!   must match the appointment's
//! - **Notification**: side effect of appointment transitions; unread to
//!   read, one way
//!
//! Authentication, wire formats, HTTP routing and storage engines live
//! outside this crate. Callers hand every operation an explicit [`Session`]
//! and receive a domain object or a tagged [`DomainError`].

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports for convenience
pub use application::commands::{
    AppointmentService, DoctorService, MedicalRecordService, NotificationService, PatientService,
};
pub use domain::aggregates::{
    Appointment, AppointmentStatus, Doctor, MedicalRecord, Notification, Patient, RecipientType,
    User,
};
pub use domain::services::AccessGuard;
pub use domain::session::{Role, Session};
pub use domain::value_objects::{ContactNumber, Email, EntityId};
pub use ports::inbound::{
    AppointmentUseCases, DoctorUseCases, DomainError, MedicalRecordUseCases, NotificationUseCases,
    PatientUseCases,
};
pub use ports::outbound::{
    AppointmentRepository, DoctorRepository, MedicalRecordRepository, NotificationRepository,
    PatientRepository, RepositoryError, UserRepository,
};
