//! Domain services module

use crate::domain::session::{Role, Session};
use crate::domain::value_objects::EntityId;

/// Self-or-admin ownership policy evaluator.
///
/// Pure and side-effect-free: it takes no persistence dependency. Callers
/// must already have resolved "my own patient id" through the session
/// username and a directory lookup before asking.
pub struct AccessGuard;

impl AccessGuard {
    /// Admin sessions pass every check. A patient session passes only when
    /// its own patient id equals the target. Every other combination is
    /// denied.
    pub fn can_access_patient(
        session: &Session,
        own_patient_id: &EntityId,
        target_patient_id: &EntityId,
    ) -> bool {
        if session.has_role(Role::Admin) {
            return true;
        }
        session.has_role(Role::Patient) && own_patient_id == target_patient_id
    }

    /// Require a role on the session. Admin passes every role check.
    pub fn require_role(session: &Session, role: Role) -> Result<(), AccessDenied> {
        if session.has_role(Role::Admin) || session.has_role(role) {
            Ok(())
        } else {
            Err(AccessDenied { required: role })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{required:?} role is required for this operation")]
pub struct AccessDenied {
    pub required: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_passes_every_check() {
        let session = Session::new("admin", [Role::Admin]);
        let own = EntityId::new();
        let target = EntityId::new();
        assert!(AccessGuard::can_access_patient(&session, &own, &target));
        assert!(AccessGuard::require_role(&session, Role::Doctor).is_ok());
    }

    #[test]
    fn test_patient_passes_for_self_only() {
        let session = Session::new("jane", [Role::Patient]);
        let own = EntityId::new();
        let other = EntityId::new();
        assert!(AccessGuard::can_access_patient(&session, &own, &own));
        assert!(!AccessGuard::can_access_patient(&session, &own, &other));
    }

    #[test]
    fn test_doctor_session_denied() {
        let session = Session::new("drwho", [Role::Doctor]);
        let id = EntityId::new();
        assert!(!AccessGuard::can_access_patient(&session, &id, &id));
    }

    #[test]
    fn test_require_role_denied() {
        let session = Session::new("jane", [Role::Patient]);
        let err = AccessGuard::require_role(&session, Role::Doctor).unwrap_err();
        assert_eq!(err.required, Role::Doctor);
    }
}
