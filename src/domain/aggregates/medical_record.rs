//! Medical Record Aggregate
//!
//! Clinical note written once per appointment by the assigned doctor, never
//! transitioned afterwards. The doctor/patient references must match the
//! referenced appointment; the medical record use cases enforce that before
//! construction.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::EntityId;

#[derive(Clone, Debug)]
pub struct MedicalRecord {
    id: EntityId,
    appointment_id: EntityId,
    patient_id: EntityId,
    doctor_id: EntityId,
    diagnosis: String,
    notes: String,
    recommendation: String,
    created_at: DateTime<Utc>,
}

impl MedicalRecord {
    pub fn create(
        appointment_id: EntityId,
        patient_id: EntityId,
        doctor_id: EntityId,
        diagnosis: impl Into<String>,
        notes: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(),
            appointment_id,
            patient_id,
            doctor_id,
            diagnosis: diagnosis.into(),
            notes: notes.into(),
            recommendation: recommendation.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &EntityId { &self.id }
    pub fn appointment_id(&self) -> &EntityId { &self.appointment_id }
    pub fn patient_id(&self) -> &EntityId { &self.patient_id }
    pub fn doctor_id(&self) -> &EntityId { &self.doctor_id }
    pub fn diagnosis(&self) -> &str { &self.diagnosis }
    pub fn notes(&self) -> &str { &self.notes }
    pub fn recommendation(&self) -> &str { &self.recommendation }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
}
