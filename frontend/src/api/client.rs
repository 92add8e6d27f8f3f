use std::rc::Rc;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use super::{
    session::{BrowserSessionStore, SessionStore},
    types::{ApiError, Envelope, ErrorBody, User},
};
use crate::config;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Rc<dyn SessionStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: Rc::new(BrowserSessionStore),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::new()
        }
    }

    pub fn with_session_store(mut self, store: impl SessionStore + 'static) -> Self {
        self.session = Rc::new(store);
        self
    }

    pub(super) fn session_store(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    pub fn stored_user(&self) -> Option<User> {
        let user = self.session.user()?;
        // a user without a token cannot call anything
        self.session.token().map(|_| user)
    }

    /// Logout is local only; the backend keeps no session to revoke.
    pub fn clear_session(&self) {
        self.session.clear();
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        self.client.request(method, format!("{}{}", base_url, path))
    }

    pub(super) async fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.request(method, path).await;
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends the request and collapses every failure into [`ApiError`].
    pub(super) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|err| {
            log::warn!("{}: no response ({})", fallback, err);
            ApiError::Network
        })?;
        map_json_response(response, fallback).await
    }

    pub(super) async fn send_json<B, T>(
        &self,
        request: RequestBuilder,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(request.json(body), fallback).await
    }
}

async fn map_json_response<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<Envelope<T>>()
            .await
            .map(Envelope::into_inner)
            .map_err(|err| {
                log::warn!("{}: unreadable response body ({})", fallback, err);
                ApiError::backend(fallback)
            })
    } else {
        let body = response.json::<ErrorBody>().await.ok();
        let error = ApiError::from_body(body, fallback);
        log::warn!("{}: backend answered {} ({})", fallback, status, error);
        Err(error)
    }
}
