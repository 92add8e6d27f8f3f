use chrono::NaiveDate;
use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, ConcludeResignationRequest, ResignRequest, ResignationRequest},
};

impl ApiClient {
    pub async fn submit_resignation(&self, lwd: NaiveDate) -> Result<ResignationRequest, ApiError> {
        let request = self.authorized(Method::POST, "/user/resign").await;
        self.send_json(request, &ResignRequest { lwd }, "Failed to submit resignation")
            .await
    }

    pub async fn get_all_resignations(&self) -> Result<Vec<ResignationRequest>, ApiError> {
        let request = self.authorized(Method::GET, "/admin/resignations").await;
        self.execute(request, "Failed to fetch resignations").await
    }

    pub async fn conclude_resignation(
        &self,
        resignation_id: &str,
        approved: bool,
        lwd: &str,
    ) -> Result<ResignationRequest, ApiError> {
        let request = self
            .authorized(Method::PUT, "/admin/conclude_resignation")
            .await;
        let body = ConcludeResignationRequest {
            resignation_id: resignation_id.to_string(),
            approved,
            lwd: lwd.to_string(),
        };
        self.send_json(request, &body, "Failed to process resignation")
            .await
    }
}
