use crate::{
    pages::employee::{
        repository::EmployeeRepository,
        utils::{EmployeePhase, QuestionnaireFormState, ResignationFormState, SubmitError},
    },
    state::notifications::Notifications,
    utils::time,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeeViewModel {
    pub phase: RwSignal<EmployeePhase>,
    pub is_submitting: RwSignal<bool>,
    pub resignation_form: ResignationFormState,
    pub questionnaire_form: QuestionnaireFormState,
    pub notifications: Notifications,
    repository: StoredValue<EmployeeRepository>,
}

impl EmployeeViewModel {
    pub fn new(repository: EmployeeRepository, notifications: Notifications) -> Self {
        Self {
            phase: create_rw_signal(EmployeePhase::default()),
            is_submitting: create_rw_signal(false),
            resignation_form: ResignationFormState::default(),
            questionnaire_form: QuestionnaireFormState::default(),
            notifications,
            repository: store_value(repository),
        }
    }

    pub async fn submit_resignation(&self) -> Result<(), SubmitError> {
        if self.is_submitting.get_untracked() {
            return Err(SubmitError::InFlight);
        }
        let lwd = match self.resignation_form.to_payload(time::today()) {
            Ok(lwd) => lwd,
            Err(err) => {
                self.notifications.error(err.to_string());
                return Err(err);
            }
        };

        self.is_submitting.set(true);
        let repository = self.repository.get_value();
        let result = repository.submit_resignation(lwd).await;
        self.is_submitting.set(false);

        match result {
            Ok(_) => {
                self.notifications.success("Resignation submitted successfully");
                self.resignation_form.reset();
                self.phase.set(EmployeePhase::Questionnaire);
                Ok(())
            }
            Err(err) => {
                log::error!("Resignation submission failed: {}", err);
                self.notifications.error("Failed to submit resignation");
                Err(err.into())
            }
        }
    }

    pub async fn submit_questionnaire(&self) -> Result<(), SubmitError> {
        if self.is_submitting.get_untracked() {
            return Err(SubmitError::InFlight);
        }
        let responses = self.questionnaire_form.to_payload()?;

        self.is_submitting.set(true);
        let repository = self.repository.get_value();
        let result = repository.submit_exit_questionnaire(responses).await;
        self.is_submitting.set(false);

        match result {
            Ok(_) => {
                self.notifications
                    .success("Exit questionnaire submitted successfully");
                self.questionnaire_form.reset();
                self.phase.set(EmployeePhase::Resigning);
                Ok(())
            }
            Err(err) => {
                log::error!("Exit questionnaire submission failed: {}", err);
                self.notifications.error("Failed to submit exit questionnaire");
                Err(err.into())
            }
        }
    }

    pub fn spawn_submit_resignation(self) {
        spawn_local(async move {
            let _ = self.submit_resignation().await;
        });
    }

    pub fn spawn_submit_questionnaire(self) {
        spawn_local(async move {
            let _ = self.submit_questionnaire().await;
        });
    }
}
