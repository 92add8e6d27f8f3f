use crate::api::{ApiClient, ApiError, ExitQuestionnaire, ResignationRequest};
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HrDashboardData {
    pub resignations: Vec<ResignationRequest>,
    pub exit_responses: Vec<ExitQuestionnaire>,
}

#[derive(Clone)]
pub struct HrRepository {
    client: Rc<ApiClient>,
}

impl HrRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Issues both reads at once and fails if either does.
    pub async fn fetch_dashboard(&self) -> Result<HrDashboardData, ApiError> {
        let (resignations, exit_responses) = futures::join!(
            self.client.get_all_resignations(),
            self.client.get_exit_responses()
        );
        Ok(HrDashboardData {
            resignations: resignations?,
            exit_responses: exit_responses?,
        })
    }

    pub async fn conclude(
        &self,
        resignation_id: &str,
        approved: bool,
        lwd: &str,
    ) -> Result<ResignationRequest, ApiError> {
        self.client
            .conclude_resignation(resignation_id, approved, lwd)
            .await
    }
}
