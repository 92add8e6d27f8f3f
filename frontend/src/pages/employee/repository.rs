use crate::api::{ApiClient, ApiError, ExitQuestionnaire, ExitResponse, ResignationRequest};
use chrono::NaiveDate;
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeRepository {
    client: Rc<ApiClient>,
}

impl EmployeeRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn submit_resignation(&self, lwd: NaiveDate) -> Result<ResignationRequest, ApiError> {
        self.client.submit_resignation(lwd).await
    }

    pub async fn submit_exit_questionnaire(
        &self,
        responses: Vec<ExitResponse>,
    ) -> Result<ExitQuestionnaire, ApiError> {
        self.client.submit_exit_questionnaire(responses).await
    }
}
