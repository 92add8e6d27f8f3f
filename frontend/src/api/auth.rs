use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Credentials, Session, SESSION_NOT_SAVED_MESSAGE},
};

impl ApiClient {
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        self.open_session("/auth/login", credentials, "Login failed")
            .await
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        self.open_session("/auth/register", credentials, "Registration failed")
            .await
    }

    async fn open_session(
        &self,
        path: &str,
        credentials: &Credentials,
        fallback: &str,
    ) -> Result<Session, ApiError> {
        let request = self.request(Method::POST, path).await;
        let session: Session = self.send_json(request, credentials, fallback).await?;
        if let Err(err) = self.session_store().save(&session) {
            log::error!("Could not persist session: {}", err);
            // later requests read the token from the store
            self.session_store().clear();
            return Err(ApiError::Storage(SESSION_NOT_SAVED_MESSAGE.to_string()));
        }
        log::info!(
            "Signed in as {} ({})",
            session.user.username,
            session.user.role.as_str()
        );
        Ok(session)
    }
}
