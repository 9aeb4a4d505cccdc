//! Employee record maintenance
//!
//! The two mutations a user record sees after materialization: payroll edits
//! by HR and self-service contact updates by the record's owner.

use hr_auth::{authorize, Action};
use hr_core::error::ValidationErrors;
use hr_core::result::HrResult;
use hr_core::types::Actor;
use hr_models::user::{ContactInfo, PayrollStructure};
use hr_store::Store;
use validator::Validate;

/// Workflow service for user record maintenance
pub struct UserWorkflow<'a> {
    store: &'a mut Store,
}

impl<'a> UserWorkflow<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// HR replaces an employee's payroll structure
    pub fn update_payroll(
        &mut self,
        actor: &Actor,
        employee_id: &str,
        payroll: PayrollStructure,
    ) -> HrResult<()> {
        self.store.user(employee_id)?;
        authorize(actor.role, Action::PayrollUpdate, false)?;

        payroll.validate().map_err(ValidationErrors::from)?;

        self.store.user_mut(employee_id)?.payroll = Some(payroll);
        tracing::info!(employee_id = %employee_id, updated_by = %actor.id, "payroll updated");
        Ok(())
    }

    /// Employees update their own contact details
    pub fn update_contact(
        &mut self,
        actor: &Actor,
        employee_id: &str,
        contact: ContactInfo,
    ) -> HrResult<()> {
        self.store.user(employee_id)?;
        let is_own_record = actor.id == employee_id;
        authorize(actor.role, Action::ContactUpdate, is_own_record)?;

        self.store.user_mut(employee_id)?.contact = contact;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_core::types::Role;
    use hr_models::User;

    fn store_with_employee() -> Store {
        let mut store = Store::new();
        store.insert_user(User {
            id: "E001".into(),
            name: "Amina Khalid".into(),
            role: Role::Employee,
            department: "Engineering".into(),
            designation: "Engineer".into(),
            payroll: None,
            benefits: None,
            contact: ContactInfo::default(),
        });
        store
    }

    #[test]
    fn test_payroll_update_hr_only() {
        let mut store = store_with_employee();
        let payroll = PayrollStructure {
            basic: 3200.0,
            housing_allowance: 600.0,
            other_allowances: 0.0,
        };

        let err = UserWorkflow::new(&mut store)
            .update_payroll(&Actor::new("M001", Role::Manager), "E001", payroll.clone())
            .unwrap_err();
        assert_eq!(err.error_code(), "forbidden");

        UserWorkflow::new(&mut store)
            .update_payroll(&Actor::new("H001", Role::HrPayroll), "E001", payroll)
            .unwrap();
        assert_eq!(store.user("E001").unwrap().gross_pay(), Some(3800.0));
    }

    #[test]
    fn test_payroll_update_rejects_negative_amounts() {
        let mut store = store_with_employee();
        let err = UserWorkflow::new(&mut store)
            .update_payroll(
                &Actor::new("H001", Role::HrPayroll),
                "E001",
                PayrollStructure {
                    basic: -10.0,
                    housing_allowance: 0.0,
                    other_allowances: 0.0,
                },
            )
            .unwrap_err();
        assert_eq!(err.error_code(), "validation_failed");
        assert!(store.user("E001").unwrap().payroll.is_none());
    }

    #[test]
    fn test_contact_update_owner_only() {
        let mut store = store_with_employee();
        let contact = ContactInfo {
            email: Some("amina@example.com".into()),
            phone: None,
            address: None,
        };

        let err = UserWorkflow::new(&mut store)
            .update_contact(&Actor::new("E002", Role::Employee), "E001", contact.clone())
            .unwrap_err();
        assert_eq!(err.error_code(), "forbidden");

        UserWorkflow::new(&mut store)
            .update_contact(&Actor::new("E001", Role::Employee), "E001", contact)
            .unwrap();
        assert_eq!(
            store.user("E001").unwrap().contact.email.as_deref(),
            Some("amina@example.com")
        );
    }
}
