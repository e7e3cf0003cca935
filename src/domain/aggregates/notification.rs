//! Notification Aggregate
//!
//! Created by the domain services as a side effect of appointment
//! transitions. The recipient is fixed at creation; the read flag is the
//! only mutable field and moves one way, unread to read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EntityId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipientType {
    Doctor,
    Patient,
}

#[derive(Clone, Debug)]
pub struct Notification {
    id: EntityId,
    recipient_type: RecipientType,
    recipient_id: EntityId,
    title: String,
    message: String,
    read: bool,
    created_at: DateTime<Utc>,
}

impl Notification {
    pub fn create(
        recipient_type: RecipientType,
        recipient_id: EntityId,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(),
            recipient_type,
            recipient_id,
            title: title.into(),
            message: message.into(),
            read: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &EntityId { &self.id }
    pub fn recipient_type(&self) -> RecipientType { self.recipient_type }
    pub fn recipient_id(&self) -> &EntityId { &self.recipient_id }
    pub fn title(&self) -> &str { &self.title }
    pub fn message(&self) -> &str { &self.message }
    pub fn is_read(&self) -> bool { self.read }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

    /// One-way transition; marking twice leaves the state unchanged.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_starts_unread() {
        let notification = Notification::create(
            RecipientType::Doctor,
            EntityId::new(),
            "New appointment request",
            "Jane Doe has requested an appointment",
        );
        assert!(!notification.is_read());
    }

    #[test]
    fn test_mark_read_is_one_way() {
        let mut notification = Notification::create(
            RecipientType::Patient,
            EntityId::new(),
            "Appointment confirmed",
            "See you soon",
        );
        notification.mark_read();
        notification.mark_read();
        assert!(notification.is_read());
    }
}
