//! User model
//!
//! An employee record in the portal. Users materialize from approved
//! onboarding requests and are never deleted; payroll edits and self-service
//! contact updates mutate them in place.

use hr_core::traits::{Entity, Identifiable};
use hr_core::types::{Id, Role};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Id,

    /// Display name
    pub name: String,

    /// Portal role
    pub role: Role,

    /// Department label (free text)
    pub department: String,

    /// Job designation (free text)
    pub designation: String,

    /// Salary breakdown, present once payroll has been set up
    pub payroll: Option<PayrollStructure>,

    /// Benefits eligibility, present once configured
    pub benefits: Option<BenefitsEligibility>,

    /// Self-service contact details
    pub contact: ContactInfo,
}

impl Identifiable for User {
    fn id(&self) -> &Id {
        &self.id
    }
}

impl Entity for User {
    const TYPE_NAME: &'static str = "User";
}

impl User {
    /// Monthly gross pay across all payroll components
    pub fn gross_pay(&self) -> Option<f64> {
        self.payroll.as_ref().map(PayrollStructure::total)
    }
}

/// Salary breakdown
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default, PartialEq)]
pub struct PayrollStructure {
    /// Basic monthly salary
    #[validate(range(min = 0.0, message = "must be non-negative"))]
    pub basic: f64,

    /// Housing allowance
    #[validate(range(min = 0.0, message = "must be non-negative"))]
    pub housing_allowance: f64,

    /// Other allowances
    #[validate(range(min = 0.0, message = "must be non-negative"))]
    pub other_allowances: f64,
}

impl PayrollStructure {
    pub fn total(&self) -> f64 {
        self.basic + self.housing_allowance + self.other_allowances
    }
}

/// Valuation of a single benefit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BenefitValue {
    /// Percentage of basic salary
    PercentOfBase(f64),
    /// Flat monthly amount
    Flat(f64),
}

impl BenefitValue {
    /// Monetary value against a basic salary
    pub fn amount(&self, basic: f64) -> f64 {
        match self {
            Self::PercentOfBase(pct) => basic * pct / 100.0,
            Self::Flat(amount) => *amount,
        }
    }
}

/// The four independently toggleable benefits. `None` means not enrolled.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BenefitsEligibility {
    pub medical: Option<BenefitValue>,
    pub life_insurance: Option<BenefitValue>,
    pub provident_fund: Option<BenefitValue>,
    pub transport: Option<BenefitValue>,
}

impl BenefitsEligibility {
    /// Default valuations applied when an onboarding benefit flag is set
    pub fn from_flags(medical: bool, life_insurance: bool, provident_fund: bool, transport: bool) -> Self {
        Self {
            medical: medical.then_some(BenefitValue::PercentOfBase(10.0)),
            life_insurance: life_insurance.then_some(BenefitValue::Flat(50.0)),
            provident_fund: provident_fund.then_some(BenefitValue::PercentOfBase(5.0)),
            transport: transport.then_some(BenefitValue::Flat(100.0)),
        }
    }

    pub fn is_enrolled_in_any(&self) -> bool {
        self.medical.is_some()
            || self.life_insurance.is_some()
            || self.provident_fund.is_some()
            || self.transport.is_some()
    }
}

/// Self-service contact fields
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payroll_total() {
        let payroll = PayrollStructure {
            basic: 3000.0,
            housing_allowance: 500.0,
            other_allowances: 200.0,
        };
        assert_eq!(payroll.total(), 3700.0);
    }

    #[test]
    fn test_payroll_validation_rejects_negative() {
        let payroll = PayrollStructure {
            basic: -1.0,
            ..Default::default()
        };
        assert!(payroll.validate().is_err());
    }

    #[test]
    fn test_benefit_value_amount() {
        assert_eq!(BenefitValue::PercentOfBase(10.0).amount(3000.0), 300.0);
        assert_eq!(BenefitValue::Flat(75.0).amount(3000.0), 75.0);
    }

    #[test]
    fn test_benefits_from_flags() {
        let benefits = BenefitsEligibility::from_flags(true, false, true, false);
        assert!(benefits.medical.is_some());
        assert!(benefits.life_insurance.is_none());
        assert!(benefits.provident_fund.is_some());
        assert!(benefits.transport.is_none());
        assert!(benefits.is_enrolled_in_any());

        let none = BenefitsEligibility::from_flags(false, false, false, false);
        assert!(!none.is_enrolled_in_any());
    }
}
