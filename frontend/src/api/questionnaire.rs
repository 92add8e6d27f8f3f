use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, ExitQuestionnaire, ExitResponse, ExitResponsesRequest},
};

impl ApiClient {
    pub async fn submit_exit_questionnaire(
        &self,
        responses: Vec<ExitResponse>,
    ) -> Result<ExitQuestionnaire, ApiError> {
        let request = self.authorized(Method::POST, "/user/responses").await;
        self.send_json(
            request,
            &ExitResponsesRequest { responses },
            "Failed to submit questionnaire",
        )
        .await
    }

    pub async fn get_exit_responses(&self) -> Result<Vec<ExitQuestionnaire>, ApiError> {
        let request = self.authorized(Method::GET, "/admin/exit_responses").await;
        self.execute(request, "Failed to fetch responses").await
    }
}
