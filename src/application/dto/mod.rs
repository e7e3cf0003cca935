//! Data Transfer Objects
//!
//! Commands (inputs crossing into the core) and views (read models handed
//! back to the transport layer). Conversions between views and aggregates
//! are explicit `From` impls so every field copy is checked at compile time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::aggregates::{
    Appointment, Doctor, MedicalRecord, Notification, Patient, RecipientType,
};
use crate::domain::aggregates::{AppointmentStatus, DoctorPatch, PatientPatch};
use crate::domain::value_objects::{ContactNumber, Email};

// =============================================================================
// Commands
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateDoctorCommand {
    pub name: String,
    pub qualification: String,
    pub specialization: String,
    pub clinic_address: String,
    pub years_of_experience: u8,
    pub contact_number: ContactNumber,
    pub email: Email,
    pub username: String,
    pub password_hash: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateDoctorCommand {
    pub name: Option<String>,
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    pub clinic_address: Option<String>,
    pub years_of_experience: Option<u8>,
    pub contact_number: Option<ContactNumber>,
    pub email: Option<Email>,
}

impl From<UpdateDoctorCommand> for DoctorPatch {
    fn from(cmd: UpdateDoctorCommand) -> Self {
        Self {
            name: cmd.name,
            specialization: cmd.specialization,
            qualification: cmd.qualification,
            clinic_address: cmd.clinic_address,
            years_of_experience: cmd.years_of_experience,
            email: cmd.email,
            contact_number: cmd.contact_number,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterPatientCommand {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub contact_number: ContactNumber,
    pub email: Email,
    pub address: String,
    pub blood_group: String,
    pub username: String,
    pub password_hash: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdatePatientCommand {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub contact_number: Option<ContactNumber>,
    pub email: Option<Email>,
    pub address: Option<String>,
    pub blood_group: Option<String>,
}

impl From<UpdatePatientCommand> for PatientPatch {
    fn from(cmd: UpdatePatientCommand) -> Self {
        Self {
            name: cmd.name,
            gender: cmd.gender,
            contact_number: cmd.contact_number,
            email: cmd.email,
            address: cmd.address,
            blood_group: cmd.blood_group,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestAppointmentCommand {
    pub doctor_id: String,
    pub schedule_time: DateTime<Utc>,
    pub reason_for_visit: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateMedicalRecordCommand {
    pub appointment_id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub diagnosis: String,
    pub notes: String,
    pub recommendation: String,
}

// =============================================================================
// Views (read models)
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DoctorView {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub qualification: String,
    pub clinic_address: String,
    pub years_of_experience: u8,
    pub email: String,
    pub contact_number: String,
}

impl From<&Doctor> for DoctorView {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id().to_string(),
            name: doctor.name().to_string(),
            specialization: doctor.specialization().to_string(),
            qualification: doctor.qualification().to_string(),
            clinic_address: doctor.clinic_address().to_string(),
            years_of_experience: doctor.years_of_experience(),
            email: doctor.email().to_string(),
            contact_number: doctor.contact_number().to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatientView {
    pub id: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub blood_group: String,
}

impl From<&Patient> for PatientView {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id().to_string(),
            name: patient.name().to_string(),
            date_of_birth: patient.date_of_birth(),
            gender: patient.gender().to_string(),
            contact_number: patient.contact_number().to_string(),
            email: patient.email().to_string(),
            address: patient.address().to_string(),
            blood_group: patient.blood_group().to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppointmentView {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub status: AppointmentStatus,
    pub schedule_time: DateTime<Utc>,
    pub reason_for_visit: Option<String>,
}

impl From<&Appointment> for AppointmentView {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id().to_string(),
            patient_id: appointment.patient_id().to_string(),
            doctor_id: appointment.doctor_id().to_string(),
            status: appointment.status(),
            schedule_time: appointment.schedule_time(),
            reason_for_visit: appointment.reason_for_visit().map(str::to_string),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MedicalRecordView {
    pub id: String,
    pub appointment_id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub diagnosis: String,
    pub notes: String,
    pub recommendation: String,
    pub created_at: DateTime<Utc>,
}

impl From<&MedicalRecord> for MedicalRecordView {
    fn from(record: &MedicalRecord) -> Self {
        Self {
            id: record.id().to_string(),
            appointment_id: record.appointment_id().to_string(),
            patient_id: record.patient_id().to_string(),
            doctor_id: record.doctor_id().to_string(),
            diagnosis: record.diagnosis().to_string(),
            notes: record.notes().to_string(),
            recommendation: record.recommendation().to_string(),
            created_at: record.created_at(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotificationView {
    pub id: String,
    pub recipient_type: RecipientType,
    pub recipient_id: String,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Notification> for NotificationView {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id().to_string(),
            recipient_type: notification.recipient_type(),
            recipient_id: notification.recipient_id().to_string(),
            title: notification.title().to_string(),
            message: notification.message().to_string(),
            read: notification.is_read(),
            created_at: notification.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::EntityId;

    #[test]
    fn test_doctor_view_conversion() {
        let doctor = Doctor::create(
            "Dr. Smith",
            "Cardiology",
            "MD",
            "123 Clinic St",
            10,
            Email::new("smith@clinic.com").unwrap(),
            ContactNumber::new("1234567890").unwrap(),
            "drsmith",
        );
        let view = DoctorView::from(&doctor);
        assert_eq!(view.id, doctor.id().to_string());
        assert_eq!(view.email, "smith@clinic.com");
    }

    #[test]
    fn test_notification_view_serializes() {
        let notification = Notification::create(
            RecipientType::Patient,
            EntityId::new(),
            "Appointment confirmed",
            "Your appointment has been confirmed.",
        );
        let view = NotificationView::from(&notification);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["title"], "Appointment confirmed");
        assert_eq!(json["read"], false);
    }

    #[test]
    fn test_update_command_into_patch() {
        let cmd = UpdateDoctorCommand {
            clinic_address: Some("456 Hospital Ave".into()),
            ..Default::default()
        };
        let patch: DoctorPatch = cmd.into();
        assert_eq!(patch.clinic_address.as_deref(), Some("456 Hospital Ave"));
        assert!(patch.name.is_none());
    }
}
