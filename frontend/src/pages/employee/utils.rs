use crate::{
    api::{ApiError, ExitResponse},
    utils::time,
};
use chrono::NaiveDate;
use leptos::*;
use std::collections::HashMap;

pub const EXIT_QUESTIONS: [&str; 5] = [
    "What is your primary reason for leaving?",
    "How would you rate your overall experience with the company?",
    "What suggestions do you have for improving the work environment?",
    "Would you consider returning to the company in the future?",
    "How would you rate the support from your immediate supervisor?",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmployeePhase {
    #[default]
    Resigning,
    Questionnaire,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// Rejected before any request was made.
    #[error("{0}")]
    Invalid(String),
    #[error("A submission is already in progress")]
    InFlight,
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub fn validate_lwd(raw: &str, today: NaiveDate) -> Result<NaiveDate, SubmitError> {
    if raw.trim().is_empty() {
        return Err(SubmitError::Invalid(
            "Please select your last working day".into(),
        ));
    }
    let lwd = time::parse_date_input(raw)
        .ok_or_else(|| SubmitError::Invalid("Please enter a valid date".into()))?;
    if lwd < today {
        return Err(SubmitError::Invalid(
            "Last working day cannot be in the past".into(),
        ));
    }
    Ok(lwd)
}

/// Pairs every fixed question with its answer, keeping question order.
pub fn build_exit_responses(answers: &HashMap<usize, String>) -> Vec<ExitResponse> {
    EXIT_QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, question)| ExitResponse {
            question_text: (*question).to_string(),
            response: answers.get(&index).cloned().unwrap_or_default(),
        })
        .collect()
}

pub fn all_answered(answers: &HashMap<usize, String>) -> bool {
    (0..EXIT_QUESTIONS.len()).all(|index| {
        answers
            .get(&index)
            .is_some_and(|answer| !answer.trim().is_empty())
    })
}

#[derive(Clone, Copy)]
pub struct ResignationFormState {
    lwd: RwSignal<String>,
}

impl Default for ResignationFormState {
    fn default() -> Self {
        Self {
            lwd: create_rw_signal(String::new()),
        }
    }
}

impl ResignationFormState {
    pub fn lwd_signal(&self) -> RwSignal<String> {
        self.lwd
    }

    pub fn reset(&self) {
        self.lwd.set(String::new());
    }

    pub fn to_payload(&self, today: NaiveDate) -> Result<NaiveDate, SubmitError> {
        validate_lwd(&self.lwd.get_untracked(), today)
    }
}

#[derive(Clone, Copy)]
pub struct QuestionnaireFormState {
    answers: RwSignal<HashMap<usize, String>>,
}

impl Default for QuestionnaireFormState {
    fn default() -> Self {
        Self {
            answers: create_rw_signal(HashMap::new()),
        }
    }
}

impl QuestionnaireFormState {
    pub fn answer(&self, index: usize) -> String {
        self.answers
            .with(|answers| answers.get(&index).cloned().unwrap_or_default())
    }

    pub fn set_answer(&self, index: usize, value: String) {
        self.answers.update(|answers| {
            answers.insert(index, value);
        });
    }

    pub fn is_complete(&self) -> bool {
        self.answers.with(all_answered)
    }

    pub fn reset(&self) {
        self.answers.set(HashMap::new());
    }

    pub fn to_payload(&self) -> Result<Vec<ExitResponse>, SubmitError> {
        self.answers.with_untracked(|answers| {
            if all_answered(answers) {
                Ok(build_exit_responses(answers))
            } else {
                Err(SubmitError::Invalid("Please answer every question".into()))
            }
        })
    }
}
