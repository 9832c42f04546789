//! Thin wrapper over the `/api/students` collection endpoint.
//!
//! The UI never touches the store directly: every read and write goes through
//! a [`StudentApi`], so the backend can live in this process or anywhere else.

use crate::data::student::{Student, StudentDraft};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use snafu::{ResultExt, Snafu, ensure};
use std::fmt::Debug;

#[cfg(test)]
pub mod testing;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ClientError {
    #[snafu(display("Unable to reach {}", endpoint))]
    SendRequest {
        source: reqwest::Error,
        endpoint: String,
    },
    #[snafu(display("{} responded with {}", endpoint, status))]
    UnexpectedStatus {
        status: StatusCode,
        endpoint: String,
    },
    #[snafu(display("Unable to decode the response from {}", endpoint))]
    DecodeBody {
        source: reqwest::Error,
        endpoint: String,
    },
}

#[async_trait]
pub trait StudentApi: Debug + Send + Sync {
    async fn get_all(&self) -> Result<Vec<Student>, ClientError>;
    async fn create(&self, draft: &StudentDraft) -> Result<Student, ClientError>;
    async fn update(&self, id: i64, draft: &StudentDraft) -> Result<Student, ClientError>;
    async fn remove(&self, id: i64) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpStudentApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpStudentApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn collection(&self) -> String {
        format!("{}/api/students", self.base_url)
    }

    fn member(&self, id: i64) -> String {
        format!("{}/api/students/{id}", self.base_url)
    }
}

async fn send(request: RequestBuilder, endpoint: &str) -> Result<Response, ClientError> {
    let response = request
        .send()
        .await
        .context(SendRequestSnafu { endpoint })?;

    let status = response.status();
    ensure!(
        status.is_success(),
        UnexpectedStatusSnafu { status, endpoint }
    );

    Ok(response)
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    async fn get_all(&self) -> Result<Vec<Student>, ClientError> {
        let endpoint = self.collection();
        send(self.http.get(&endpoint), &endpoint)
            .await?
            .json()
            .await
            .context(DecodeBodySnafu { endpoint })
    }

    async fn create(&self, draft: &StudentDraft) -> Result<Student, ClientError> {
        let endpoint = self.collection();
        send(self.http.post(&endpoint).json(draft), &endpoint)
            .await?
            .json()
            .await
            .context(DecodeBodySnafu { endpoint })
    }

    async fn update(&self, id: i64, draft: &StudentDraft) -> Result<Student, ClientError> {
        let endpoint = self.member(id);
        send(self.http.put(&endpoint).json(draft), &endpoint)
            .await?
            .json()
            .await
            .context(DecodeBodySnafu { endpoint })
    }

    async fn remove(&self, id: i64) -> Result<(), ClientError> {
        let endpoint = self.member(id);
        send(self.http.delete(&endpoint), &endpoint).await?;
        Ok(())
    }
}
