//! Common types used throughout HR Portal RS

use serde::{Deserialize, Serialize};

/// Entity identifier. Employee codes (e.g. "E001") come from the surrounding
/// organisation; engine-generated records carry uuid strings.
pub type Id = String;

/// Portal role enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Manager,
    HrPayroll,
    Management,
}

impl Role {
    pub fn is_manager(&self) -> bool {
        matches!(self, Self::Manager)
    }

    pub fn is_hr(&self) -> bool {
        matches!(self, Self::HrPayroll)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::Manager => "Manager",
            Self::HrPayroll => "HR/Payroll",
            Self::Management => "Management",
        }
    }
}

/// Resolved caller identity for a command.
///
/// Authentication happens outside the engine; the identity/role pair passed
/// here is trusted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Actor {
    pub id: Id,
    pub role: Role,
}

impl Actor {
    pub fn new(id: impl Into<Id>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    pub fn is(&self, id: &str) -> bool {
        self.id == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_predicates() {
        assert!(Role::Manager.is_manager());
        assert!(!Role::Manager.is_hr());
        assert!(Role::HrPayroll.is_hr());
        assert_eq!(Role::HrPayroll.label(), "HR/Payroll");
    }

    #[test]
    fn test_actor_identity() {
        let actor = Actor::new("E001", Role::Employee);
        assert!(actor.is("E001"));
        assert!(!actor.is("E002"));
    }
}
