//! Appointment Aggregate
//!
//! Requested by a patient, decided by the assigned doctor. The patient and
//! doctor references are fixed at creation; only the status transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EntityId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Requested,
    Confirmed,
    Rejected,
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Requested => write!(f, "REQUESTED"),
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Appointment {
    id: EntityId,
    patient_id: EntityId,
    doctor_id: EntityId,
    status: AppointmentStatus,
    schedule_time: DateTime<Utc>,
    reason_for_visit: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn create(
        patient_id: EntityId,
        doctor_id: EntityId,
        schedule_time: DateTime<Utc>,
        reason_for_visit: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            patient_id,
            doctor_id,
            status: AppointmentStatus::Requested,
            schedule_time,
            reason_for_visit,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &EntityId { &self.id }
    pub fn patient_id(&self) -> &EntityId { &self.patient_id }
    pub fn doctor_id(&self) -> &EntityId { &self.doctor_id }
    pub fn status(&self) -> AppointmentStatus { self.status }
    pub fn schedule_time(&self) -> DateTime<Utc> { self.schedule_time }
    pub fn reason_for_visit(&self) -> Option<&str> { self.reason_for_visit.as_deref() }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    pub fn is_decided(&self) -> bool {
        self.status != AppointmentStatus::Requested
    }

    /// Confirm a requested appointment.
    pub fn confirm(&mut self) -> Result<(), AppointmentError> {
        if self.is_decided() {
            return Err(AppointmentError::AlreadyDecided(self.status));
        }
        self.status = AppointmentStatus::Confirmed;
        self.touch();
        Ok(())
    }

    /// Reject a requested appointment.
    pub fn reject(&mut self) -> Result<(), AppointmentError> {
        if self.is_decided() {
            return Err(AppointmentError::AlreadyDecided(self.status));
        }
        self.status = AppointmentStatus::Rejected;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    #[error("appointment has already been decided ({0})")]
    AlreadyDecided(AppointmentStatus),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_appointment() -> Appointment {
        Appointment::create(EntityId::new(), EntityId::new(), Utc::now(), None)
    }

    #[test]
    fn test_starts_requested() {
        let appointment = create_test_appointment();
        assert_eq!(appointment.status(), AppointmentStatus::Requested);
        assert!(!appointment.is_decided());
    }

    #[test]
    fn test_confirm() {
        let mut appointment = create_test_appointment();
        appointment.confirm().unwrap();
        assert_eq!(appointment.status(), AppointmentStatus::Confirmed);
    }

    #[test]
    fn test_cannot_decide_twice() {
        let mut appointment = create_test_appointment();
        appointment.reject().unwrap();
        assert!(matches!(
            appointment.confirm(),
            Err(AppointmentError::AlreadyDecided(AppointmentStatus::Rejected))
        ));
    }
}
