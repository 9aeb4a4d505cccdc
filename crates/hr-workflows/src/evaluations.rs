//! Performance evaluation workflow
//!
//! Manager initiates and scores, employee responds, HR closes. Ratings are
//! only writable during manager review; a completed evaluation accepts no
//! further mutation of any kind.

use hr_auth::{authorize, Action};
use hr_core::error::HrError;
use hr_core::result::HrResult;
use hr_core::types::Actor;
use hr_models::{EvaluationStatus, KpiRatings, ManagerComments, PerformanceEvaluation, MAX_RATING};
use hr_store::Store;
use uuid::Uuid;

use crate::transitions::EVALUATION;

/// Workflow service for performance evaluations
pub struct EvaluationWorkflow<'a> {
    store: &'a mut Store,
}

impl<'a> EvaluationWorkflow<'a> {
    pub fn new(store: &'a mut Store) -> Self {
        Self { store }
    }

    /// Open an evaluation for an employee: zeroed KPIs, empty comments,
    /// awaiting the initiating manager's review
    pub fn initiate(
        &mut self,
        actor: &Actor,
        employee_id: &str,
        manager_id: &str,
        period: impl Into<String>,
    ) -> HrResult<PerformanceEvaluation> {
        authorize(actor.role, Action::EvaluationInitiate, false)?;

        let employee_name = self.store.user(employee_id)?.name.clone();
        let evaluation = PerformanceEvaluation::new(
            Uuid::new_v4().to_string(),
            employee_id,
            employee_name,
            manager_id,
            period,
        );
        self.store.insert_evaluation(evaluation.clone());
        Ok(evaluation)
    }

    /// Manager scores the five KPI dimensions and records comments and goals
    pub fn submit_manager_review(
        &mut self,
        actor: &Actor,
        eval_id: &str,
        ratings: KpiRatings,
        comments: ManagerComments,
        goals: impl Into<String>,
    ) -> HrResult<()> {
        let evaluation = self.store.evaluation(eval_id)?;
        let is_reviewing_manager = evaluation.manager_id == actor.id;
        authorize(
            actor.role,
            Action::EvaluationSubmitManagerReview,
            is_reviewing_manager,
        )?;

        EVALUATION.guard(
            eval_id,
            evaluation.status,
            EvaluationStatus::PendingEmployeeComments,
            "submit_manager_review",
        )?;

        if let Some(dimension) = ratings.out_of_range() {
            return Err(HrError::invalid_field(
                format!("{dimension:?}"),
                format!("rating must be between 0 and {MAX_RATING}"),
            ));
        }

        let evaluation = self.store.evaluation_mut(eval_id)?;
        evaluation.ratings = ratings;
        evaluation.manager_comments = comments;
        evaluation.goals = goals.into();
        evaluation.status = EvaluationStatus::PendingEmployeeComments;
        Ok(())
    }

    /// The evaluated employee records their comments
    pub fn submit_employee_comments(
        &mut self,
        actor: &Actor,
        eval_id: &str,
        comments: impl Into<String>,
    ) -> HrResult<()> {
        let evaluation = self.store.evaluation(eval_id)?;
        let is_subject = evaluation.employee_id == actor.id;
        authorize(actor.role, Action::EvaluationSubmitEmployeeComments, is_subject)?;

        EVALUATION.guard(
            eval_id,
            evaluation.status,
            EvaluationStatus::PendingHrFinalization,
            "submit_employee_comments",
        )?;

        let evaluation = self.store.evaluation_mut(eval_id)?;
        evaluation.employee_comments = comments.into();
        evaluation.status = EvaluationStatus::PendingHrFinalization;
        Ok(())
    }

    /// HR closes the evaluation, from either waiting state. Completed
    /// records are immutable from here on.
    pub fn finalize(&mut self, actor: &Actor, eval_id: &str) -> HrResult<()> {
        let evaluation = self.store.evaluation(eval_id)?;
        authorize(actor.role, Action::EvaluationFinalize, false)?;

        EVALUATION.guard(
            eval_id,
            evaluation.status,
            EvaluationStatus::Completed,
            "finalize",
        )?;

        let evaluation = self.store.evaluation_mut(eval_id)?;
        evaluation.status = EvaluationStatus::Completed;
        tracing::info!(
            eval_id = %eval_id,
            employee_id = %evaluation.employee_id,
            period = %evaluation.period,
            mean = evaluation.ratings.mean(),
            "evaluation finalized"
        );
        Ok(())
    }
}
