use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::AskError;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://tyypbyzirptj3wj3fiaz7kaj7u0letdv.lambda-url.us-east-1.on.aws/";

#[derive(Debug, Serialize)]
pub struct QuestionRequest<'a> {
    pub question: &'a str,
}

/// Body of a successful reply. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerResponse {
    pub answer: Option<String>,
}

impl From<Value> for AnswerResponse {
    /// Any JSON body is accepted; only a truthy `answer` member yields text.
    ///
    /// Strings are taken as-is, non-zero numbers and `true` are shown in
    /// their JSON form. Everything else (non-object bodies, `null`, `false`,
    /// `0`, arrays, objects) counts as no answer.
    fn from(body: Value) -> Self {
        let answer = match body.get("answer") {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v.abs() > 0.0) => {
                Some(n.to_string())
            }
            Some(Value::Bool(true)) => Some("true".to_string()),
            _ => None,
        };
        Self { answer }
    }
}

impl AnswerResponse {
    /// Returns the answer text, treating an empty string as absent.
    pub fn into_answer(self) -> Option<String> {
        self.answer.filter(|answer| !answer.is_empty())
    }
}

/// Anything that can turn a question into an answer payload.
///
/// The session only depends on this trait, so tests can substitute an
/// in-process fake for the HTTP client.
#[allow(async_fn_in_trait)]
pub trait Answerer {
    async fn ask(&self, question: &str) -> Result<AnswerResponse, AskError>;
}

pub struct AnswerClient {
    client: Client,
    endpoint: String,
}

impl AnswerClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

impl Answerer for AnswerClient {
    async fn ask(&self, question: &str) -> Result<AnswerResponse, AskError> {
        debug!(endpoint = %self.endpoint, "sending question");

        // `json` also sets `Content-Type: application/json`
        let response = self
            .client
            .post(&self.endpoint)
            .json(&QuestionRequest { question })
            .send()
            .await
            .map_err(|source| AskError::Connect {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AskError::Status { status });
        }

        // Only a body that is not JSON at all is a decode failure; a JSON
        // body of the wrong shape is an answer-less reply.
        let body = response
            .json::<Value>()
            .await
            .map_err(|source| AskError::Decode { source })?;
        let payload = AnswerResponse::from(body);

        debug!(%status, has_answer = payload.answer.is_some(), "received reply");
        Ok(payload)
    }
}
