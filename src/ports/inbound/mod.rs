//! Inbound ports (use-case traits)
//!
//! The contracts the transport layer calls into. Every operation returns a
//! domain object or a tagged `DomainError`; nothing throws across the
//! boundary.

use async_trait::async_trait;

use crate::application::dto::*;
use crate::domain::aggregates::{Appointment, Doctor, MedicalRecord, Notification, Patient};
use crate::domain::session::Session;
use crate::domain::value_objects::EntityId;
use crate::ports::outbound::RepositoryError;

/// Doctor directory use cases
#[async_trait]
pub trait DoctorUseCases: Send + Sync {
    /// Register a new doctor and its backing user account. Fails with
    /// `Conflict` when the (email, contact number) or (name, specialization)
    /// pair is already taken.
    async fn create_doctor(&self, cmd: CreateDoctorCommand) -> Result<Doctor, DomainError>;

    /// The doctor linked to the calling session's username.
    async fn get_own_profile(&self, session: &Session) -> Result<Doctor, DomainError>;

    /// Every doctor in the directory. An empty directory is reported as
    /// `NotFound`, not as an empty list; other listing operations tolerate
    /// empty results, this one deliberately does not.
    async fn list_all(&self) -> Result<Vec<Doctor>, DomainError>;

    async fn search_by_name(&self, name: &str) -> Result<Vec<Doctor>, DomainError>;

    async fn search_by_specialization(
        &self,
        specialization: &str,
    ) -> Result<Vec<Doctor>, DomainError>;

    async fn update_doctor(
        &self,
        id: &EntityId,
        cmd: UpdateDoctorCommand,
    ) -> Result<Doctor, DomainError>;

    /// Remove a doctor and return the deleted snapshot.
    async fn delete_doctor(&self, id: &EntityId) -> Result<Doctor, DomainError>;
}

/// Patient profile use cases
#[async_trait]
pub trait PatientUseCases: Send + Sync {
    async fn register_patient(&self, cmd: RegisterPatientCommand) -> Result<Patient, DomainError>;

    /// Self-or-admin: a patient session may only fetch its own profile.
    async fn get_by_id(&self, session: &Session, id: &EntityId) -> Result<Patient, DomainError>;

    async fn update_patient(
        &self,
        session: &Session,
        id: &EntityId,
        cmd: UpdatePatientCommand,
    ) -> Result<Patient, DomainError>;

    /// Same ownership policy as `get_by_id`; returns the removed snapshot.
    async fn delete_patient(&self, session: &Session, id: &EntityId)
        -> Result<Patient, DomainError>;
}

/// Appointment lifecycle use cases
#[async_trait]
pub trait AppointmentUseCases: Send + Sync {
    /// A patient requests an appointment with a doctor; the doctor is
    /// notified as a side effect.
    async fn request_appointment(
        &self,
        session: &Session,
        cmd: RequestAppointmentCommand,
    ) -> Result<Appointment, DomainError>;

    /// The assigned doctor confirms or rejects a requested appointment; the
    /// patient is notified as a side effect.
    async fn decide_appointment(
        &self,
        session: &Session,
        appointment_id: &EntityId,
        confirmed: bool,
        reason: Option<String>,
    ) -> Result<Appointment, DomainError>;
}

/// Medical record use cases
#[async_trait]
pub trait MedicalRecordUseCases: Send + Sync {
    /// Create the clinical note for an appointment. The submitted doctor and
    /// patient must match the appointment's stored doctor and patient;
    /// a mismatch fails with `Conflict` and persists nothing.
    async fn create_record(
        &self,
        cmd: CreateMedicalRecordCommand,
    ) -> Result<MedicalRecord, DomainError>;

    /// All records of the calling patient, newest first. Implicitly
    /// self-scoped; there is no cross-patient path here.
    async fn get_records_for_patient(
        &self,
        session: &Session,
    ) -> Result<Vec<MedicalRecord>, DomainError>;
}

/// Notification use cases
#[async_trait]
pub trait NotificationUseCases: Send + Sync {
    async fn notify_doctor_on_appointment_request(
        &self,
        appointment: &Appointment,
    ) -> Result<Notification, DomainError>;

    async fn notify_patient_on_appointment_decision(
        &self,
        appointment: &Appointment,
        confirmed: bool,
        reason: Option<&str>,
    ) -> Result<Notification, DomainError>;

    async fn get_notifications_for_doctor(
        &self,
        session: &Session,
    ) -> Result<Vec<Notification>, DomainError>;

    async fn get_notifications_for_patient(
        &self,
        session: &Session,
    ) -> Result<Vec<Notification>, DomainError>;

    /// Idempotent: marking an already-read notification is a no-op success.
    async fn mark_as_read(&self, id: &EntityId) -> Result<(), DomainError>;
}

/// Error taxonomy surfaced to callers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A referenced id is absent.
    #[error("not found: {0}")]
    NotFound(String),
    /// A uniqueness rule or cross-entity invariant was violated.
    #[error("conflict: {0}")]
    Conflict(String),
    /// The authorization policy rejected the action.
    #[error("access denied: {0}")]
    AccessDenied(String),
    /// Persistence or infrastructure failure; not retried at this layer.
    #[error("storage failure: {0}")]
    Fatal(String),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // Constraint violations from the gateway are re-tagged; nothing
            // else is downgraded.
            RepositoryError::DuplicateKey(key) => Self::Conflict(format!("duplicate key: {key}")),
            other => Self::Fatal(other.to_string()),
        }
    }
}
