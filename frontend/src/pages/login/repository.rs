use crate::api::{ApiClient, ApiError, Credentials, Session};
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
}

impl AuthRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: Credentials) -> Result<Session, ApiError> {
        self.client.login(&credentials).await
    }

    pub async fn register(&self, credentials: Credentials) -> Result<Session, ApiError> {
        self.client.register(&credentials).await
    }

    pub fn logout(&self) {
        self.client.clear_session();
    }
}
