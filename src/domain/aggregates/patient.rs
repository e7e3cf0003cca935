//! Patient Aggregate
//!
//! Accessible only by the owning patient or an admin; the ownership policy
//! is enforced by the patient use cases via the access guard.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::value_objects::{ContactNumber, Email, EntityId};

#[derive(Clone, Debug)]
pub struct Patient {
    id: EntityId,
    name: String,
    date_of_birth: NaiveDate,
    gender: String,
    contact_number: ContactNumber,
    email: Email,
    address: String,
    blood_group: String,
    username: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Patient {
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        gender: impl Into<String>,
        contact_number: ContactNumber,
        email: Email,
        address: impl Into<String>,
        blood_group: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            name: name.into(),
            date_of_birth,
            gender: gender.into(),
            contact_number,
            email,
            address: address.into(),
            blood_group: blood_group.into(),
            username: username.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &EntityId { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn date_of_birth(&self) -> NaiveDate { self.date_of_birth }
    pub fn gender(&self) -> &str { &self.gender }
    pub fn contact_number(&self) -> &ContactNumber { &self.contact_number }
    pub fn email(&self) -> &Email { &self.email }
    pub fn address(&self) -> &str { &self.address }
    pub fn blood_group(&self) -> &str { &self.blood_group }
    pub fn username(&self) -> &str { &self.username }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    /// Apply a partial profile update. Absent fields are left untouched.
    pub fn apply_patch(&mut self, patch: PatientPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(contact_number) = patch.contact_number {
            self.contact_number = contact_number;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(blood_group) = patch.blood_group {
            self.blood_group = blood_group;
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Statically-typed partial update for a patient profile.
#[derive(Clone, Debug, Default)]
pub struct PatientPatch {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub contact_number: Option<ContactNumber>,
    pub email: Option<Email>,
    pub address: Option<String>,
    pub blood_group: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_patient() -> Patient {
        Patient::create(
            "Jane Doe",
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "Female",
            ContactNumber::new("1122334455").unwrap(),
            Email::new("jane@example.com").unwrap(),
            "123 Main St",
            "O+",
            "janedoe",
        )
    }

    #[test]
    fn test_patient_creation() {
        let patient = create_test_patient();
        assert_eq!(patient.name(), "Jane Doe");
        assert_eq!(patient.blood_group(), "O+");
        assert_eq!(patient.username(), "janedoe");
    }

    #[test]
    fn test_apply_patch() {
        let mut patient = create_test_patient();
        patient.apply_patch(PatientPatch {
            address: Some("9 New Lane".into()),
            ..Default::default()
        });

        assert_eq!(patient.address(), "9 New Lane");
        assert_eq!(patient.name(), "Jane Doe");
    }
}
