//! In-memory repository implementations
//!
//! Used for tests and single-process deployments. Each store holds its map
//! behind a `parking_lot::RwLock`; the doctor store runs its unique-pair
//! checks under the write lock so check-plus-insert is atomic relative to
//! concurrent saves.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::aggregates::{
    Appointment, Doctor, MedicalRecord, Notification, Patient, RecipientType, User,
};
use crate::domain::value_objects::{ContactNumber, Email, EntityId};
use crate::ports::outbound::{
    AppointmentRepository, DoctorRepository, MedicalRecordRepository, NotificationRepository,
    PatientRepository, RepositoryError, UserRepository,
};

/// In-memory user account store, keyed by username.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().get(username).cloned())
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write();
        if users.contains_key(user.username()) {
            return Err(RepositoryError::DuplicateKey(format!(
                "username {}",
                user.username()
            )));
        }
        users.insert(user.username().to_string(), user.clone());
        Ok(())
    }
}

/// In-memory doctor directory, keyed by doctor id.
#[derive(Default)]
pub struct InMemoryDoctorRepository {
    doctors: RwLock<HashMap<String, Doctor>>,
}

impl InMemoryDoctorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn violates_unique_pairs(doctors: &HashMap<String, Doctor>, candidate: &Doctor) -> bool {
        doctors.values().any(|d| {
            d.id() != candidate.id()
                && (d.email() == candidate.email()
                    && d.contact_number() == candidate.contact_number()
                    || d.name().eq_ignore_ascii_case(candidate.name())
                        && d.specialization()
                            .eq_ignore_ascii_case(candidate.specialization()))
        })
    }
}

#[async_trait]
impl DoctorRepository for InMemoryDoctorRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Doctor>, RepositoryError> {
        Ok(self.doctors.read().get(id.as_str()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Doctor>, RepositoryError> {
        Ok(self
            .doctors
            .read()
            .values()
            .find(|d| d.username() == username)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Doctor>, RepositoryError> {
        Ok(self.doctors.read().values().cloned().collect())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Doctor>, RepositoryError> {
        let needle = name.to_lowercase();
        Ok(self
            .doctors
            .read()
            .values()
            .filter(|d| d.name().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn search_by_specialization(
        &self,
        specialization: &str,
    ) -> Result<Vec<Doctor>, RepositoryError> {
        let needle = specialization.to_lowercase();
        Ok(self
            .doctors
            .read()
            .values()
            .filter(|d| d.specialization().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn exists_by_email_or_contact_number(
        &self,
        email: &Email,
        contact_number: &ContactNumber,
    ) -> Result<bool, RepositoryError> {
        Ok(self
            .doctors
            .read()
            .values()
            .any(|d| d.email() == email && d.contact_number() == contact_number))
    }

    async fn exists_by_name_and_specialization(
        &self,
        name: &str,
        specialization: &str,
    ) -> Result<bool, RepositoryError> {
        Ok(self.doctors.read().values().any(|d| {
            d.name().eq_ignore_ascii_case(name)
                && d.specialization().eq_ignore_ascii_case(specialization)
        }))
    }

    async fn save(&self, doctor: &Doctor) -> Result<(), RepositoryError> {
        let mut doctors = self.doctors.write();
        if Self::violates_unique_pairs(&doctors, doctor) {
            return Err(RepositoryError::DuplicateKey(format!(
                "doctor {}",
                doctor.email()
            )));
        }
        doctors.insert(doctor.id().to_string(), doctor.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: &EntityId) -> Result<(), RepositoryError> {
        self.doctors.write().remove(id.as_str());
        Ok(())
    }
}

/// In-memory patient store, keyed by patient id.
#[derive(Default)]
pub struct InMemoryPatientRepository {
    patients: RwLock<HashMap<String, Patient>>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Patient>, RepositoryError> {
        Ok(self.patients.read().get(id.as_str()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Patient>, RepositoryError> {
        Ok(self
            .patients
            .read()
            .values()
            .find(|p| p.username() == username)
            .cloned())
    }

    async fn save(&self, patient: &Patient) -> Result<(), RepositoryError> {
        self.patients
            .write()
            .insert(patient.id().to_string(), patient.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: &EntityId) -> Result<(), RepositoryError> {
        self.patients.write().remove(id.as_str());
        Ok(())
    }
}

/// In-memory appointment store, keyed by appointment id.
#[derive(Default)]
pub struct InMemoryAppointmentRepository {
    appointments: RwLock<HashMap<String, Appointment>>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Appointment>, RepositoryError> {
        Ok(self.appointments.read().get(id.as_str()).cloned())
    }

    async fn save(&self, appointment: &Appointment) -> Result<(), RepositoryError> {
        self.appointments
            .write()
            .insert(appointment.id().to_string(), appointment.clone());
        Ok(())
    }
}

/// In-memory medical record store, keyed by record id.
#[derive(Default)]
pub struct InMemoryMedicalRecordRepository {
    records: RwLock<HashMap<String, MedicalRecord>>,
}

impl InMemoryMedicalRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MedicalRecordRepository for InMemoryMedicalRecordRepository {
    async fn find_by_patient_id_newest_first(
        &self,
        patient_id: &EntityId,
    ) -> Result<Vec<MedicalRecord>, RepositoryError> {
        let mut records: Vec<MedicalRecord> = self
            .records
            .read()
            .values()
            .filter(|r| r.patient_id() == patient_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(records)
    }

    async fn save(&self, record: &MedicalRecord) -> Result<(), RepositoryError> {
        self.records
            .write()
            .insert(record.id().to_string(), record.clone());
        Ok(())
    }
}

/// In-memory notification store, keyed by notification id.
#[derive(Default)]
pub struct InMemoryNotificationRepository {
    notifications: RwLock<HashMap<String, Notification>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn find_by_id(&self, id: &EntityId) -> Result<Option<Notification>, RepositoryError> {
        Ok(self.notifications.read().get(id.as_str()).cloned())
    }

    async fn find_by_recipient(
        &self,
        recipient_type: RecipientType,
        recipient_id: &EntityId,
    ) -> Result<Vec<Notification>, RepositoryError> {
        Ok(self
            .notifications
            .read()
            .values()
            .filter(|n| n.recipient_type() == recipient_type && n.recipient_id() == recipient_id)
            .cloned()
            .collect())
    }

    async fn save(&self, notification: &Notification) -> Result<(), RepositoryError> {
        self.notifications
            .write()
            .insert(notification.id().to_string(), notification.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_doctor(name: &str, email: &str, contact: &str, username: &str) -> Doctor {
        Doctor::create(
            name,
            "Cardiology",
            "MD",
            "123 Clinic St",
            10,
            Email::new(email).unwrap(),
            ContactNumber::new(contact).unwrap(),
            username,
        )
    }

    #[tokio::test]
    async fn test_doctor_save_and_find() {
        let repo = InMemoryDoctorRepository::new();
        let doctor = sample_doctor("Dr. Smith", "smith@clinic.com", "1234567890", "drsmith");

        repo.save(&doctor).await.unwrap();

        let found = repo.find_by_id(doctor.id()).await.unwrap().unwrap();
        assert_eq!(found.email(), doctor.email());
        let by_user = repo.find_by_username("drsmith").await.unwrap();
        assert!(by_user.is_some());
    }

    #[tokio::test]
    async fn test_doctor_unique_pairs_enforced_on_save() {
        let repo = InMemoryDoctorRepository::new();
        repo.save(&sample_doctor(
            "Dr. Smith",
            "smith@clinic.com",
            "1234567890",
            "drsmith",
        ))
        .await
        .unwrap();

        // Same email + contact number, different name.
        let dup_contact = sample_doctor("Dr. Jones", "smith@clinic.com", "1234567890", "drjones");
        assert!(matches!(
            repo.save(&dup_contact).await,
            Err(RepositoryError::DuplicateKey(_))
        ));

        // Same name + specialization, different contact details.
        let dup_name = sample_doctor("dr. smith", "other@clinic.com", "0987654321", "drsmith2");
        assert!(matches!(
            repo.save(&dup_name).await,
            Err(RepositoryError::DuplicateKey(_))
        ));
    }

    #[tokio::test]
    async fn test_doctor_resave_own_row_is_update() {
        let repo = InMemoryDoctorRepository::new();
        let doctor = sample_doctor("Dr. Smith", "smith@clinic.com", "1234567890", "drsmith");
        repo.save(&doctor).await.unwrap();
        repo.save(&doctor).await.unwrap();
    }

    #[tokio::test]
    async fn test_doctor_search_is_case_insensitive() {
        let repo = InMemoryDoctorRepository::new();
        repo.save(&sample_doctor(
            "Dr. Smith",
            "smith@clinic.com",
            "1234567890",
            "drsmith",
        ))
        .await
        .unwrap();

        assert_eq!(repo.search_by_name("smi").await.unwrap().len(), 1);
        assert_eq!(repo.search_by_specialization("CARDIO").await.unwrap().len(), 1);
        assert!(repo.search_by_name("jones").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_duplicate_username() {
        let repo = InMemoryUserRepository::new();
        let user = User::create("jane", "hash", crate::domain::session::Role::Patient);
        repo.save(&user).await.unwrap();
        assert!(matches!(
            repo.save(&user).await,
            Err(RepositoryError::DuplicateKey(_))
        ));
    }

    #[tokio::test]
    async fn test_records_ordered_newest_first() {
        let repo = InMemoryMedicalRecordRepository::new();
        let patient_id = EntityId::new();

        for diagnosis in ["first", "second", "third"] {
            let record = MedicalRecord::create(
                EntityId::new(),
                patient_id.clone(),
                EntityId::new(),
                diagnosis,
                "",
                "",
            );
            repo.save(&record).await.unwrap();
            // Distinct creation instants so the ordering is observable.
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let records = repo
            .find_by_patient_id_newest_first(&patient_id)
            .await
            .unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].diagnosis(), "third");
        assert_eq!(records[2].diagnosis(), "first");
    }

    #[tokio::test]
    async fn test_notifications_filtered_by_recipient() {
        let repo = InMemoryNotificationRepository::new();
        let doctor_id = EntityId::new();
        let patient_id = EntityId::new();

        repo.save(&Notification::create(
            RecipientType::Doctor,
            doctor_id.clone(),
            "New appointment request",
            "Jane Doe has requested an appointment",
        ))
        .await
        .unwrap();
        repo.save(&Notification::create(
            RecipientType::Patient,
            patient_id.clone(),
            "Appointment confirmed",
            "See you soon",
        ))
        .await
        .unwrap();

        let for_doctor = repo
            .find_by_recipient(RecipientType::Doctor, &doctor_id)
            .await
            .unwrap();
        assert_eq!(for_doctor.len(), 1);

        // Same id, wrong recipient type: no cross-talk.
        let wrong_type = repo
            .find_by_recipient(RecipientType::Patient, &doctor_id)
            .await
            .unwrap();
        assert!(wrong_type.is_empty());
    }

    #[tokio::test]
    async fn test_appointment_round_trip() {
        let repo = InMemoryAppointmentRepository::new();
        let appointment = Appointment::create(EntityId::new(), EntityId::new(), Utc::now(), None);
        repo.save(&appointment).await.unwrap();
        assert!(repo.find_by_id(appointment.id()).await.unwrap().is_some());
    }
}
