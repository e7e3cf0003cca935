//! Outbound ports (Persistence Gateway traits)
//!
//! Hexagonal architecture: interfaces the infrastructure must implement.
//! The domain services depend on these, never on a concrete store.

use async_trait::async_trait;

use crate::domain::aggregates::{
    Appointment, Doctor, MedicalRecord, Notification, Patient, RecipientType, User,
};
use crate::domain::value_objects::{ContactNumber, Email, EntityId};

/// User account gateway
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Persist a new account. The username is the primary key; inserting a
    /// taken username fails with `DuplicateKey`.
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}

/// Doctor directory gateway
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Doctor>, RepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Doctor>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Doctor>, RepositoryError>;

    /// Case-insensitive substring match on the doctor name.
    async fn search_by_name(&self, name: &str) -> Result<Vec<Doctor>, RepositoryError>;

    /// Case-insensitive substring match on the specialization.
    async fn search_by_specialization(
        &self,
        specialization: &str,
    ) -> Result<Vec<Doctor>, RepositoryError>;

    async fn exists_by_email_or_contact_number(
        &self,
        email: &Email,
        contact_number: &ContactNumber,
    ) -> Result<bool, RepositoryError>;

    async fn exists_by_name_and_specialization(
        &self,
        name: &str,
        specialization: &str,
    ) -> Result<bool, RepositoryError>;

    /// Insert or update. Implementations enforce the (email, contact_number)
    /// and (name, specialization) unique pairs and fail with `DuplicateKey`
    /// when another doctor already holds either pair.
    async fn save(&self, doctor: &Doctor) -> Result<(), RepositoryError>;

    /// Remove the doctor; dependent rows cascade per the store's contract.
    async fn delete_by_id(&self, id: &EntityId) -> Result<(), RepositoryError>;
}

/// Patient profile gateway
#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Patient>, RepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Patient>, RepositoryError>;

    async fn save(&self, patient: &Patient) -> Result<(), RepositoryError>;

    async fn delete_by_id(&self, id: &EntityId) -> Result<(), RepositoryError>;
}

/// Appointment gateway
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Appointment>, RepositoryError>;

    async fn save(&self, appointment: &Appointment) -> Result<(), RepositoryError>;
}

/// Medical record gateway
#[async_trait]
pub trait MedicalRecordRepository: Send + Sync {
    /// All records for a patient, most recently created first.
    async fn find_by_patient_id_newest_first(
        &self,
        patient_id: &EntityId,
    ) -> Result<Vec<MedicalRecord>, RepositoryError>;

    async fn save(&self, record: &MedicalRecord) -> Result<(), RepositoryError>;
}

/// Notification gateway
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Notification>, RepositoryError>;

    async fn find_by_recipient(
        &self,
        recipient_type: RecipientType,
        recipient_id: &EntityId,
    ) -> Result<Vec<Notification>, RepositoryError>;

    async fn save(&self, notification: &Notification) -> Result<(), RepositoryError>;
}

/// Gateway error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    #[error("entity not found")]
    NotFound,
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("connection error: {0}")]
    ConnectionError(String),
    #[error("query error: {0}")]
    QueryError(String),
}
