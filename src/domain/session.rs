//! Session Context
//!
//! Per-request identity and role information resolved by authentication
//! outside the core, passed explicitly into every use case that needs it.
//! There is no process-global "current user".

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Role assigned to a user at creation, immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

/// Request-scoped caller identity.
#[derive(Clone, Debug)]
pub struct Session {
    username: String,
    roles: HashSet<Role>,
}

impl Session {
    pub fn new(username: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            username: username.into(),
            roles: roles.into_iter().collect(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn roles(&self) -> &HashSet<Role> {
        &self.roles
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_roles() {
        let session = Session::new("jane", [Role::Patient]);
        assert_eq!(session.username(), "jane");
        assert_eq!(session.roles().len(), 1);
        assert!(session.has_role(Role::Patient));
        assert!(!session.has_role(Role::Admin));
    }
}
