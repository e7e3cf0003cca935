//! Application services
//!
//! One service per entity family, each enforcing its business invariants and
//! authorization before touching the persistence gateway. Services are
//! stateless between calls; dependencies are constructor-injected trait
//! objects.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::dto::*;
use crate::domain::aggregates::{
    Appointment, Doctor, MedicalRecord, Notification, Patient, RecipientType, User,
};
use crate::domain::services::AccessGuard;
use crate::domain::session::{Role, Session};
use crate::domain::value_objects::EntityId;
use crate::ports::inbound::{
    AppointmentUseCases, DoctorUseCases, DomainError, MedicalRecordUseCases, NotificationUseCases,
    PatientUseCases,
};
use crate::ports::outbound::{
    AppointmentRepository, DoctorRepository, MedicalRecordRepository, NotificationRepository,
    PatientRepository, UserRepository,
};

// =============================================================================
// Doctor service
// =============================================================================

pub struct DoctorService {
    doctor_repo: Arc<dyn DoctorRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl DoctorService {
    pub fn new(doctor_repo: Arc<dyn DoctorRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            doctor_repo,
            user_repo,
        }
    }
}

#[async_trait]
impl DoctorUseCases for DoctorService {
    async fn create_doctor(&self, cmd: CreateDoctorCommand) -> Result<Doctor, DomainError> {
        if self
            .doctor_repo
            .exists_by_email_or_contact_number(&cmd.email, &cmd.contact_number)
            .await?
        {
            return Err(DomainError::Conflict(
                "a doctor with this email or contact number already exists".into(),
            ));
        }
        if self
            .doctor_repo
            .exists_by_name_and_specialization(&cmd.name, &cmd.specialization)
            .await?
        {
            return Err(DomainError::Conflict(format!(
                "doctor {} already registered for {}",
                cmd.name, cmd.specialization
            )));
        }

        let user = User::create(&cmd.username, &cmd.password_hash, Role::Doctor);
        let doctor = Doctor::create(
            cmd.name,
            cmd.specialization,
            cmd.qualification,
            cmd.clinic_address,
            cmd.years_of_experience,
            cmd.email,
            cmd.contact_number,
            cmd.username,
        );
        // The gateway re-checks the unique pairs under its own guard; a
        // losing racer surfaces here as DuplicateKey and is re-tagged
        // Conflict by the `?` conversion.
        self.doctor_repo.save(&doctor).await?;

        // A failed account insert must not leave the profile behind.
        if let Err(e) = self.user_repo.save(&user).await {
            self.doctor_repo.delete_by_id(doctor.id()).await?;
            return Err(e.into());
        }

        tracing::info!(doctor_id = %doctor.id(), "registered doctor");
        Ok(doctor)
    }

    async fn get_own_profile(&self, session: &Session) -> Result<Doctor, DomainError> {
        self.doctor_repo
            .find_by_username(session.username())
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "no doctor profile linked to user {}",
                    session.username()
                ))
            })
    }

    async fn list_all(&self) -> Result<Vec<Doctor>, DomainError> {
        let doctors = self.doctor_repo.find_all().await?;
        // An empty directory is an error condition here, unlike the other
        // listing operations.
        if doctors.is_empty() {
            return Err(DomainError::NotFound(
                "no doctors registered in the directory".into(),
            ));
        }
        Ok(doctors)
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Doctor>, DomainError> {
        Ok(self.doctor_repo.search_by_name(name).await?)
    }

    async fn search_by_specialization(
        &self,
        specialization: &str,
    ) -> Result<Vec<Doctor>, DomainError> {
        Ok(self
            .doctor_repo
            .search_by_specialization(specialization)
            .await?)
    }

    async fn update_doctor(
        &self,
        id: &EntityId,
        cmd: UpdateDoctorCommand,
    ) -> Result<Doctor, DomainError> {
        let mut doctor = self
            .doctor_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("doctor {id} does not exist")))?;

        doctor.apply_patch(cmd.into());
        self.doctor_repo.save(&doctor).await?;

        tracing::debug!(doctor_id = %doctor.id(), "updated doctor profile");
        Ok(doctor)
    }

    async fn delete_doctor(&self, id: &EntityId) -> Result<Doctor, DomainError> {
        let doctor = self
            .doctor_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("doctor {id} does not exist")))?;

        self.doctor_repo.delete_by_id(id).await?;
        tracing::info!(doctor_id = %id, "deleted doctor");
        Ok(doctor)
    }
}

// =============================================================================
// Patient service
// =============================================================================

pub struct PatientService {
    patient_repo: Arc<dyn PatientRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl PatientService {
    pub fn new(patient_repo: Arc<dyn PatientRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            patient_repo,
            user_repo,
        }
    }

    /// Self-or-admin check. The ownership lookup completes before any
    /// guarded mutation begins.
    async fn authorize(&self, session: &Session, target: &EntityId) -> Result<(), DomainError> {
        if session.has_role(Role::Admin) {
            return Ok(());
        }
        let own = self
            .patient_repo
            .find_by_username(session.username())
            .await?
            .ok_or_else(|| {
                DomainError::AccessDenied("no patient profile linked to this session".into())
            })?;
        if !AccessGuard::can_access_patient(session, own.id(), target) {
            return Err(DomainError::AccessDenied(
                "patients may only access their own profile".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PatientUseCases for PatientService {
    async fn register_patient(&self, cmd: RegisterPatientCommand) -> Result<Patient, DomainError> {
        let user = User::create(&cmd.username, &cmd.password_hash, Role::Patient);
        self.user_repo.save(&user).await?;

        let patient = Patient::create(
            cmd.name,
            cmd.date_of_birth,
            cmd.gender,
            cmd.contact_number,
            cmd.email,
            cmd.address,
            cmd.blood_group,
            cmd.username,
        );
        self.patient_repo.save(&patient).await?;

        tracing::info!(patient_id = %patient.id(), "registered patient");
        Ok(patient)
    }

    async fn get_by_id(&self, session: &Session, id: &EntityId) -> Result<Patient, DomainError> {
        self.authorize(session, id).await?;
        self.patient_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("patient {id} does not exist")))
    }

    async fn update_patient(
        &self,
        session: &Session,
        id: &EntityId,
        cmd: UpdatePatientCommand,
    ) -> Result<Patient, DomainError> {
        self.authorize(session, id).await?;
        let mut patient = self
            .patient_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("patient {id} does not exist")))?;

        patient.apply_patch(cmd.into());
        self.patient_repo.save(&patient).await?;

        tracing::debug!(patient_id = %patient.id(), "updated patient profile");
        Ok(patient)
    }

    async fn delete_patient(
        &self,
        session: &Session,
        id: &EntityId,
    ) -> Result<Patient, DomainError> {
        self.authorize(session, id).await?;
        let patient = self
            .patient_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("patient {id} does not exist")))?;

        self.patient_repo.delete_by_id(id).await?;
        tracing::info!(patient_id = %id, "deleted patient");
        Ok(patient)
    }
}

// =============================================================================
// Appointment service
// =============================================================================

pub struct AppointmentService {
    appointment_repo: Arc<dyn AppointmentRepository>,
    doctor_repo: Arc<dyn DoctorRepository>,
    patient_repo: Arc<dyn PatientRepository>,
    notifier: Arc<dyn NotificationUseCases>,
}

impl AppointmentService {
    pub fn new(
        appointment_repo: Arc<dyn AppointmentRepository>,
        doctor_repo: Arc<dyn DoctorRepository>,
        patient_repo: Arc<dyn PatientRepository>,
        notifier: Arc<dyn NotificationUseCases>,
    ) -> Self {
        Self {
            appointment_repo,
            doctor_repo,
            patient_repo,
            notifier,
        }
    }
}

#[async_trait]
impl AppointmentUseCases for AppointmentService {
    async fn request_appointment(
        &self,
        session: &Session,
        cmd: RequestAppointmentCommand,
    ) -> Result<Appointment, DomainError> {
        AccessGuard::require_role(session, Role::Patient)
            .map_err(|e| DomainError::AccessDenied(e.to_string()))?;

        let patient = self
            .patient_repo
            .find_by_username(session.username())
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "no patient profile linked to user {}",
                    session.username()
                ))
            })?;

        let doctor_id = EntityId::from_string(&cmd.doctor_id);
        self.doctor_repo
            .find_by_id(&doctor_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("doctor {doctor_id} does not exist")))?;

        let appointment = Appointment::create(
            patient.id().clone(),
            doctor_id,
            cmd.schedule_time,
            cmd.reason_for_visit,
        );
        self.appointment_repo.save(&appointment).await?;

        self.notifier
            .notify_doctor_on_appointment_request(&appointment)
            .await?;

        tracing::info!(appointment_id = %appointment.id(), "appointment requested");
        Ok(appointment)
    }

    async fn decide_appointment(
        &self,
        session: &Session,
        appointment_id: &EntityId,
        confirmed: bool,
        reason: Option<String>,
    ) -> Result<Appointment, DomainError> {
        AccessGuard::require_role(session, Role::Doctor)
            .map_err(|e| DomainError::AccessDenied(e.to_string()))?;

        let mut appointment = self
            .appointment_repo
            .find_by_id(appointment_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("appointment {appointment_id} does not exist"))
            })?;

        // Admins may decide any appointment; a doctor only their own.
        if !session.has_role(Role::Admin) {
            let doctor = self
                .doctor_repo
                .find_by_username(session.username())
                .await?
                .ok_or_else(|| {
                    DomainError::NotFound(format!(
                        "no doctor profile linked to user {}",
                        session.username()
                    ))
                })?;
            if appointment.doctor_id() != doctor.id() {
                return Err(DomainError::AccessDenied(
                    "appointment is assigned to a different doctor".into(),
                ));
            }
        }

        let transition = if confirmed {
            appointment.confirm()
        } else {
            appointment.reject()
        };
        transition.map_err(|e| DomainError::Conflict(e.to_string()))?;

        self.appointment_repo.save(&appointment).await?;

        self.notifier
            .notify_patient_on_appointment_decision(&appointment, confirmed, reason.as_deref())
            .await?;

        tracing::info!(
            appointment_id = %appointment.id(),
            status = %appointment.status(),
            "appointment decided"
        );
        Ok(appointment)
    }
}

// =============================================================================
// Medical record service
// =============================================================================

pub struct MedicalRecordService {
    record_repo: Arc<dyn MedicalRecordRepository>,
    appointment_repo: Arc<dyn AppointmentRepository>,
    doctor_repo: Arc<dyn DoctorRepository>,
    patient_repo: Arc<dyn PatientRepository>,
}

impl MedicalRecordService {
    pub fn new(
        record_repo: Arc<dyn MedicalRecordRepository>,
        appointment_repo: Arc<dyn AppointmentRepository>,
        doctor_repo: Arc<dyn DoctorRepository>,
        patient_repo: Arc<dyn PatientRepository>,
    ) -> Self {
        Self {
            record_repo,
            appointment_repo,
            doctor_repo,
            patient_repo,
        }
    }
}

#[async_trait]
impl MedicalRecordUseCases for MedicalRecordService {
    async fn create_record(
        &self,
        cmd: CreateMedicalRecordCommand,
    ) -> Result<MedicalRecord, DomainError> {
        let appointment_id = EntityId::from_string(&cmd.appointment_id);
        let patient_id = EntityId::from_string(&cmd.patient_id);
        let doctor_id = EntityId::from_string(&cmd.doctor_id);

        let appointment = self
            .appointment_repo
            .find_by_id(&appointment_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!("appointment {appointment_id} does not exist"))
            })?;
        self.doctor_repo
            .find_by_id(&doctor_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("doctor {doctor_id} does not exist")))?;
        self.patient_repo
            .find_by_id(&patient_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("patient {patient_id} does not exist")))?;

        // Appointment-identity invariant: the submitted doctor and patient
        // must be the ones stored on the appointment.
        if appointment.doctor_id() != &doctor_id || appointment.patient_id() != &patient_id {
            return Err(DomainError::Conflict(
                "appointment does not match the submitted doctor/patient".into(),
            ));
        }

        let record = MedicalRecord::create(
            appointment_id,
            patient_id,
            doctor_id,
            cmd.diagnosis,
            cmd.notes,
            cmd.recommendation,
        );
        self.record_repo.save(&record).await?;

        tracing::info!(record_id = %record.id(), "created medical record");
        Ok(record)
    }

    async fn get_records_for_patient(
        &self,
        session: &Session,
    ) -> Result<Vec<MedicalRecord>, DomainError> {
        let patient = self
            .patient_repo
            .find_by_username(session.username())
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "no patient profile linked to user {}",
                    session.username()
                ))
            })?;

        Ok(self
            .record_repo
            .find_by_patient_id_newest_first(patient.id())
            .await?)
    }
}

// =============================================================================
// Notification service
// =============================================================================

pub struct NotificationService {
    notification_repo: Arc<dyn NotificationRepository>,
    doctor_repo: Arc<dyn DoctorRepository>,
    patient_repo: Arc<dyn PatientRepository>,
}

impl NotificationService {
    pub fn new(
        notification_repo: Arc<dyn NotificationRepository>,
        doctor_repo: Arc<dyn DoctorRepository>,
        patient_repo: Arc<dyn PatientRepository>,
    ) -> Self {
        Self {
            notification_repo,
            doctor_repo,
            patient_repo,
        }
    }
}

#[async_trait]
impl NotificationUseCases for NotificationService {
    async fn notify_doctor_on_appointment_request(
        &self,
        appointment: &Appointment,
    ) -> Result<Notification, DomainError> {
        // Display name for the message body; fall back to the raw id if the
        // patient row is gone by the time we look.
        let patient_name = self
            .patient_repo
            .find_by_id(appointment.patient_id())
            .await?
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| appointment.patient_id().to_string());

        let notification = Notification::create(
            RecipientType::Doctor,
            appointment.doctor_id().clone(),
            "New appointment request",
            format!(
                "{} has requested an appointment on {}",
                patient_name,
                appointment.schedule_time().format("%Y-%m-%d %H:%M UTC")
            ),
        );
        self.notification_repo.save(&notification).await?;

        tracing::debug!(notification_id = %notification.id(), "notified doctor");
        Ok(notification)
    }

    async fn notify_patient_on_appointment_decision(
        &self,
        appointment: &Appointment,
        confirmed: bool,
        reason: Option<&str>,
    ) -> Result<Notification, DomainError> {
        let when = appointment.schedule_time().format("%Y-%m-%d %H:%M UTC");
        let (title, message) = if confirmed {
            (
                "Appointment confirmed",
                format!("Your appointment on {when} has been confirmed."),
            )
        } else {
            let mut message = format!("Your appointment on {when} has been rejected.");
            if let Some(reason) = reason.filter(|r| !r.trim().is_empty()) {
                message.push_str(" Reason: ");
                message.push_str(reason);
            }
            ("Appointment rejected", message)
        };

        let notification = Notification::create(
            RecipientType::Patient,
            appointment.patient_id().clone(),
            title,
            message,
        );
        self.notification_repo.save(&notification).await?;

        tracing::debug!(notification_id = %notification.id(), "notified patient");
        Ok(notification)
    }

    async fn get_notifications_for_doctor(
        &self,
        session: &Session,
    ) -> Result<Vec<Notification>, DomainError> {
        let doctor = self
            .doctor_repo
            .find_by_username(session.username())
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "no doctor profile linked to user {}",
                    session.username()
                ))
            })?;

        Ok(self
            .notification_repo
            .find_by_recipient(RecipientType::Doctor, doctor.id())
            .await?)
    }

    async fn get_notifications_for_patient(
        &self,
        session: &Session,
    ) -> Result<Vec<Notification>, DomainError> {
        let patient = self
            .patient_repo
            .find_by_username(session.username())
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(format!(
                    "no patient profile linked to user {}",
                    session.username()
                ))
            })?;

        Ok(self
            .notification_repo
            .find_by_recipient(RecipientType::Patient, patient.id())
            .await?)
    }

    async fn mark_as_read(&self, id: &EntityId) -> Result<(), DomainError> {
        let mut notification = self
            .notification_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("notification {id} does not exist")))?;

        // Already read: no-op, not an error.
        if notification.is_read() {
            return Ok(());
        }

        notification.mark_read();
        self.notification_repo.save(&notification).await?;
        Ok(())
    }
}
