//! User Aggregate
//!
//! Backing account for a doctor or patient profile. The role is fixed at
//! creation and there is deliberately no way to change it afterwards.

use chrono::{DateTime, Utc};

use crate::domain::session::Role;

#[derive(Clone, Debug)]
pub struct User {
    username: String,
    password_hash: String,
    role: Role,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn create(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            role,
            created_at: Utc::now(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
