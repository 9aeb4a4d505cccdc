//! Onboarding request model
//!
//! A proposed new employee awaiting two-stage approval (designated manager,
//! then HR). The submitted form is an untyped bag at the boundary; it is
//! coerced into a typed [`OnboardingProfile`] at HR approval time, failing
//! fast on missing or malformed required fields.

use std::collections::BTreeMap;

use hr_core::error::ValidationErrors;
use hr_core::traits::{Entity, Identifiable};
use hr_core::types::{Id, Role};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Onboarding request status
///
/// Exactly one of the two pending states is active at a time. Both terminal
/// outcomes (approval, rejection) remove the request from the store, so no
/// terminal variant exists here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStatus {
    PendingManagerApproval,
    PendingHrApproval,
}

impl OnboardingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PendingManagerApproval => "pending_manager_approval",
            Self::PendingHrApproval => "pending_hr_approval",
        }
    }
}

/// Raw submitted form data
pub type FormData = BTreeMap<String, Value>;

/// Onboarding request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingRequest {
    /// Proposed employee identifier; becomes the User id on approval
    pub id: Id,

    /// Submitted form fields, untyped until HR approval
    pub form: FormData,

    /// Manager responsible for first-line review
    pub manager_id: Id,

    pub status: OnboardingStatus,
}

impl Identifiable for OnboardingRequest {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Entity for OnboardingRequest {
    const TYPE_NAME: &'static str = "OnboardingRequest";
}

impl OnboardingRequest {
    pub fn new(id: impl Into<Id>, form: FormData, manager_id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            form,
            manager_id: manager_id.into(),
            status: OnboardingStatus::PendingManagerApproval,
        }
    }
}

/// Typed intermediate structure coerced from the form bag
#[derive(Debug, Clone, Validate)]
pub struct OnboardingProfile {
    #[validate(length(min = 1, message = "can't be blank"))]
    pub name: String,

    #[validate(length(min = 1, message = "can't be blank"))]
    pub department: String,

    #[validate(length(min = 1, message = "can't be blank"))]
    pub designation: String,

    /// Target portal role for the new employee
    pub role: Role,

    #[validate(range(min = 0.0, message = "must be non-negative"))]
    pub basic_salary: f64,

    #[validate(range(min = 0.0, message = "must be non-negative"))]
    pub housing_allowance: f64,

    #[validate(range(min = 0.0, message = "must be non-negative"))]
    pub other_allowances: f64,

    pub medical: bool,
    pub life_insurance: bool,
    pub provident_fund: bool,
    pub transport: bool,

    /// Proof-of-identity image reference (opaque to the engine)
    pub photo: Option<String>,
}

impl OnboardingProfile {
    /// Coerce and validate the raw form bag
    pub fn from_form(form: &FormData) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_string(form, "name", &mut errors);
        let department = required_string(form, "department", &mut errors);
        let designation = required_string(form, "designation", &mut errors);

        let role = match form.get("role") {
            Some(value) => match serde_json::from_value::<Role>(value.clone()) {
                Ok(role) => role,
                Err(_) => {
                    errors.add("role", "is not a recognised role");
                    Role::Employee
                }
            },
            None => Role::Employee,
        };

        let basic_salary = required_number(form, "basic_salary", &mut errors);
        let housing_allowance = optional_number(form, "housing_allowance", &mut errors);
        let other_allowances = optional_number(form, "other_allowances", &mut errors);

        let profile = Self {
            name,
            department,
            designation,
            role,
            basic_salary,
            housing_allowance,
            other_allowances,
            medical: flag(form, "medical", &mut errors),
            life_insurance: flag(form, "life_insurance", &mut errors),
            provident_fund: flag(form, "provident_fund", &mut errors),
            transport: flag(form, "transport", &mut errors),
            photo: form
                .get("photo")
                .and_then(Value::as_str)
                .map(str::to_owned),
        };

        if let Err(derive_errors) = profile.validate() {
            errors.merge(derive_errors.into());
        }
        errors.into_result()?;
        Ok(profile)
    }
}

fn required_string(form: &FormData, field: &str, errors: &mut ValidationErrors) -> String {
    match form.get(field).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        Some(_) => {
            errors.add(field, "can't be blank");
            String::new()
        }
        None => {
            errors.add(field, "is required");
            String::new()
        }
    }
}

fn required_number(form: &FormData, field: &str, errors: &mut ValidationErrors) -> f64 {
    match form.get(field) {
        Some(value) => coerce_number(value).unwrap_or_else(|| {
            errors.add(field, "is not a number");
            0.0
        }),
        None => {
            errors.add(field, "is required");
            0.0
        }
    }
}

fn optional_number(form: &FormData, field: &str, errors: &mut ValidationErrors) -> f64 {
    match form.get(field) {
        Some(value) => coerce_number(value).unwrap_or_else(|| {
            errors.add(field, "is not a number");
            0.0
        }),
        None => 0.0,
    }
}

// Numeric form values arrive as JSON numbers or numeric strings depending on
// the submitting widget; accept both.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn flag(form: &FormData, field: &str, errors: &mut ValidationErrors) -> bool {
    match form.get(field) {
        None => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true" || s == "1" || s == "on",
        Some(_) => {
            errors.add(field, "is not a boolean");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_form() -> FormData {
        let mut form = FormData::new();
        form.insert("name".into(), json!("Amina Khalid"));
        form.insert("department".into(), json!("Engineering"));
        form.insert("designation".into(), json!("Site Engineer"));
        form.insert("role".into(), json!("employee"));
        form.insert("basic_salary".into(), json!(3000));
        form.insert("housing_allowance".into(), json!("500"));
        form.insert("medical".into(), json!(true));
        form.insert("transport".into(), json!("on"));
        form
    }

    #[test]
    fn test_profile_from_valid_form() {
        let profile = OnboardingProfile::from_form(&valid_form()).unwrap();
        assert_eq!(profile.name, "Amina Khalid");
        assert_eq!(profile.role, Role::Employee);
        assert_eq!(profile.basic_salary, 3000.0);
        assert_eq!(profile.housing_allowance, 500.0);
        assert_eq!(profile.other_allowances, 0.0);
        assert!(profile.medical);
        assert!(!profile.life_insurance);
        assert!(profile.transport);
    }

    #[test]
    fn test_profile_missing_required_fields() {
        let mut form = valid_form();
        form.remove("name");
        form.remove("basic_salary");

        let errors = OnboardingProfile::from_form(&form).unwrap_err();
        assert!(errors.has_error("name"));
        assert!(errors.has_error("basic_salary"));
        assert!(!errors.has_error("department"));
    }

    #[test]
    fn test_profile_malformed_values() {
        let mut form = valid_form();
        form.insert("basic_salary".into(), json!("lots"));
        form.insert("medical".into(), json!(3));
        form.insert("role".into(), json!("overlord"));

        let errors = OnboardingProfile::from_form(&form).unwrap_err();
        assert!(errors.has_error("basic_salary"));
        assert!(errors.has_error("medical"));
        assert!(errors.has_error("role"));
    }

    #[test]
    fn test_profile_negative_salary_rejected() {
        let mut form = valid_form();
        form.insert("basic_salary".into(), json!(-100));

        let errors = OnboardingProfile::from_form(&form).unwrap_err();
        assert!(errors.has_error("basic_salary"));
    }

    #[test]
    fn test_request_starts_pending_manager() {
        let request = OnboardingRequest::new("E010", valid_form(), "M001");
        assert_eq!(request.status, OnboardingStatus::PendingManagerApproval);
        assert_eq!(request.manager_id, "M001");
    }
}
