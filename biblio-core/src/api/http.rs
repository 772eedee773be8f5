//! reqwest-backed collaborator client

use super::{endpoints, ApiResult, LibraryApi};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{Book, LoanRequest, NewBook, NewUser, User};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Client for a remote collaborator at a configured base URL
#[derive(Debug, Clone)]
pub struct HttpLibraryApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLibraryApi {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        tracing::debug!("GET {}", path);
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_json(&self, path: &str, body: &impl Serialize) -> ApiResult<()> {
        tracing::debug!("POST {}", path);
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

/// Validate a base URL and strip any trailing slash
pub fn normalize_base_url(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    let has_host = trimmed.split("://").nth(1).map_or(false, |rest| !rest.is_empty());

    if has_scheme && has_host {
        Ok(trimmed.to_string())
    } else {
        Err(ApiError::InvalidBaseUrl(raw.to_string()))
    }
}

#[async_trait]
impl LibraryApi for HttpLibraryApi {
    async fn list_books(&self) -> ApiResult<Vec<Book>> {
        self.get_json(endpoints::BOOKS).await
    }

    async fn create_book(&self, book: &NewBook) -> ApiResult<()> {
        self.post_json(endpoints::BOOKS, book).await
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.get_json(endpoints::USERS).await
    }

    async fn create_user(&self, user: &NewUser) -> ApiResult<()> {
        self.post_json(endpoints::USERS, user).await
    }

    async fn borrow(&self, request: &LoanRequest) -> ApiResult<()> {
        self.post_json(endpoints::BORROW, request).await
    }

    async fn return_book(&self, request: &LoanRequest) -> ApiResult<()> {
        self.post_json(endpoints::RETURN, request).await
    }
}
