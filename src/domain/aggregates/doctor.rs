//! Doctor Aggregate
//!
//! Directory entry for a practicing doctor. Two pairs must stay unique
//! across the directory: (email, contact number) and (name, specialization).
//! The pair checks themselves live in the doctor use cases and the gateway;
//! the aggregate only carries the data.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{ContactNumber, Email, EntityId};

#[derive(Clone, Debug)]
pub struct Doctor {
    id: EntityId,
    name: String,
    specialization: String,
    qualification: String,
    clinic_address: String,
    years_of_experience: u8,
    email: Email,
    contact_number: ContactNumber,
    username: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Doctor {
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        name: impl Into<String>,
        specialization: impl Into<String>,
        qualification: impl Into<String>,
        clinic_address: impl Into<String>,
        years_of_experience: u8,
        email: Email,
        contact_number: ContactNumber,
        username: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::new(),
            name: name.into(),
            specialization: specialization.into(),
            qualification: qualification.into(),
            clinic_address: clinic_address.into(),
            years_of_experience,
            email,
            contact_number,
            username: username.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &EntityId { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn specialization(&self) -> &str { &self.specialization }
    pub fn qualification(&self) -> &str { &self.qualification }
    pub fn clinic_address(&self) -> &str { &self.clinic_address }
    pub fn years_of_experience(&self) -> u8 { self.years_of_experience }
    pub fn email(&self) -> &Email { &self.email }
    pub fn contact_number(&self) -> &ContactNumber { &self.contact_number }
    pub fn username(&self) -> &str { &self.username }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    /// Apply a partial profile update. Absent fields are left untouched.
    pub fn apply_patch(&mut self, patch: DoctorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(specialization) = patch.specialization {
            self.specialization = specialization;
        }
        if let Some(qualification) = patch.qualification {
            self.qualification = qualification;
        }
        if let Some(clinic_address) = patch.clinic_address {
            self.clinic_address = clinic_address;
        }
        if let Some(years) = patch.years_of_experience {
            self.years_of_experience = years;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(contact_number) = patch.contact_number {
            self.contact_number = contact_number;
        }
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Statically-typed partial update for a doctor profile.
#[derive(Clone, Debug, Default)]
pub struct DoctorPatch {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub qualification: Option<String>,
    pub clinic_address: Option<String>,
    pub years_of_experience: Option<u8>,
    pub email: Option<Email>,
    pub contact_number: Option<ContactNumber>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_doctor() -> Doctor {
        Doctor::create(
            "Dr. Smith",
            "Cardiology",
            "MD",
            "123 Clinic St",
            10,
            Email::new("smith@clinic.com").unwrap(),
            ContactNumber::new("1234567890").unwrap(),
            "drsmith",
        )
    }

    #[test]
    fn test_doctor_creation() {
        let doctor = create_test_doctor();
        assert_eq!(doctor.name(), "Dr. Smith");
        assert_eq!(doctor.specialization(), "Cardiology");
        assert_eq!(doctor.email().as_str(), "smith@clinic.com");
    }

    #[test]
    fn test_apply_patch_updates_present_fields_only() {
        let mut doctor = create_test_doctor();
        doctor.apply_patch(DoctorPatch {
            clinic_address: Some("456 Hospital Ave".into()),
            years_of_experience: Some(11),
            ..Default::default()
        });

        assert_eq!(doctor.clinic_address(), "456 Hospital Ave");
        assert_eq!(doctor.years_of_experience(), 11);
        assert_eq!(doctor.name(), "Dr. Smith");
    }
}
