//! Onboarding workflow
//!
//! Two-stage approval of a proposed employee: the designated manager reviews
//! first, then HR. HR approval materializes the request into a `User` and
//! removes the request; rejection at either stage removes it. Every call
//! checks the gate and the transition table before touching the store.

use hr_auth::{authorize, Action};
use hr_core::error::HrError;
use hr_core::result::HrResult;
use hr_core::types::{Actor, Id, Role};
use hr_models::user::{BenefitsEligibility, ContactInfo, PayrollStructure, User};
use hr_models::{FormData, OnboardingProfile, OnboardingRequest, OnboardingStatus};
use hr_store::Store;

use crate::transitions::ONBOARDING;

/// Workflow service for onboarding requests
pub struct OnboardingWorkflow<'a> {
    store: &'a mut Store,
}

impl<'a> OnboardingWorkflow<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Submit a new onboarding request for first-line review.
    ///
    /// The form stays an untyped bag until HR approval; only the proposed
    /// identifier is checked here, against existing users and requests.
    pub fn submit(
        &mut self,
        proposed_id: impl Into<Id>,
        form: FormData,
        manager_id: impl Into<Id>,
    ) -> HrResult<OnboardingRequest> {
        let proposed_id = proposed_id.into();
        if self.store.has_user(&proposed_id) {
            return Err(HrError::invalid_field(
                "id",
                format!("employee {proposed_id} already exists"),
            ));
        }
        if self.store.has_onboarding_request(&proposed_id) {
            return Err(HrError::invalid_field(
                "id",
                format!("onboarding request {proposed_id} already pending"),
            ));
        }

        let request = OnboardingRequest::new(proposed_id, form, manager_id);
        self.store.insert_onboarding_request(request.clone());
        Ok(request)
    }

    /// First-line approval by the request's designated manager
    pub fn approve_as_manager(&mut self, actor: &Actor, request_id: &str) -> HrResult<()> {
        let request = self.store.onboarding_request(request_id)?;
        let is_designated = request.manager_id == actor.id;
        authorize(actor.role, Action::OnboardingApproveAsManager, is_designated)?;

        let action = ONBOARDING.guard(
            request_id,
            request.status,
            OnboardingStatus::PendingHrApproval,
            "approve_as_manager",
        )?;
        debug_assert_eq!(action, Action::OnboardingApproveAsManager);

        self.store.onboarding_request_mut(request_id)?.status =
            OnboardingStatus::PendingHrApproval;
        Ok(())
    }

    /// Final approval by HR: coerces the form, materializes the new `User`,
    /// and removes the request. Nothing is written unless every check passes.
    pub fn approve_as_hr(&mut self, actor: &Actor, request_id: &str) -> HrResult<User> {
        let request = self.store.onboarding_request(request_id)?;
        authorize(actor.role, Action::OnboardingApproveAsHr, false)?;

        if request.status != OnboardingStatus::PendingHrApproval {
            return Err(HrError::InvalidTransition {
                entity: "OnboardingRequest",
                id: request_id.to_string(),
                status: request.status.label().to_string(),
                operation: "approve_as_hr",
            });
        }

        let profile = OnboardingProfile::from_form(&request.form)?;
        if self.store.has_user(request_id) {
            return Err(HrError::invalid_field(
                "id",
                format!("employee {request_id} already exists"),
            ));
        }

        let user = materialize_user(request_id, &profile);
        let request = self.store.remove_onboarding_request(request_id)?;
        self.store.insert_user(user.clone());
        tracing::info!(
            employee_id = %user.id,
            department = %user.department,
            manager_id = %request.manager_id,
            "onboarding request approved, employee record created"
        );
        Ok(user)
    }

    /// Rejection at either review stage removes the request
    pub fn reject(&mut self, actor: &Actor, request_id: &str) -> HrResult<()> {
        let request = self.store.onboarding_request(request_id)?;

        // Stage-appropriate reviewer: the designated manager while the
        // request sits with them, HR once it has moved on.
        let is_stage_reviewer = match request.status {
            OnboardingStatus::PendingManagerApproval => {
                actor.role == Role::Manager && request.manager_id == actor.id
            }
            OnboardingStatus::PendingHrApproval => actor.role == Role::HrPayroll,
        };
        authorize(actor.role, Action::OnboardingReject, is_stage_reviewer)?;

        self.store.remove_onboarding_request(request_id)?;
        tracing::info!(request_id = %request_id, "onboarding request rejected");
        Ok(())
    }
}

/// Build the employee record from a coerced profile. Salary fields map to the
/// payroll structure; benefit flags map to default valuations.
fn materialize_user(id: &str, profile: &OnboardingProfile) -> User {
    User {
        id: id.to_string(),
        name: profile.name.clone(),
        role: profile.role,
        department: profile.department.clone(),
        designation: profile.designation.clone(),
        payroll: Some(PayrollStructure {
            basic: profile.basic_salary,
            housing_allowance: profile.housing_allowance,
            other_allowances: profile.other_allowances,
        }),
        benefits: Some(BenefitsEligibility::from_flags(
            profile.medical,
            profile.life_insurance,
            profile.provident_fund,
            profile.transport,
        )),
        contact: ContactInfo::default(),
    }
}
