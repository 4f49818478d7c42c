//! Request boundary around the classifier.
//!
//! Validates `{ "text": ... }` payloads, runs the classifier with panics
//! contained, and maps every outcome to a status plus a JSON body. Nothing
//! raised inside the classifier crosses this boundary unhandled.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};

use crate::classifier::SentimentClassifier;
use crate::core::{AnalysisReport, Error, Result};
use crate::observability::{get_current_context, payload_message, reset_context};
use crate::scoring::PolarityScorer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: Option<String>,
}

/// Extract the text to analyze from a raw JSON request body.
pub fn parse_request(body: &str) -> Result<String> {
    if body.trim().is_empty() {
        return Err(Error::MissingPayload);
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::InvalidRequest(format!("body is not valid JSON: {}", e)))?;

    let fields = match value {
        Value::Null => return Err(Error::MissingPayload),
        Value::Object(fields) if fields.is_empty() => return Err(Error::MissingPayload),
        Value::Object(fields) => fields,
        _ => {
            return Err(Error::InvalidRequest(
                "body must be a JSON object".to_string(),
            ))
        }
    };

    let request: AnalyzeRequest = serde_json::from_value(Value::Object(fields))
        .map_err(|_| Error::InvalidRequest("'text' must be a string".to_string()))?;

    match request.text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(Error::EmptyText),
    }
}

/// Classify `text`, converting a panic anywhere inside into [`Error::Internal`].
pub fn analyze_text<S: PolarityScorer>(
    classifier: &SentimentClassifier<S>,
    text: Option<&str>,
) -> Result<AnalysisReport> {
    let text = match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(Error::EmptyText),
    };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| classifier.classify(text)));
    match outcome {
        Ok(result) => result,
        Err(payload) => {
            let phase = get_current_context().phase;
            reset_context();
            let message = payload_message(payload.as_ref());
            log::error!(
                "Classifier fault during {}: {}",
                phase.map_or_else(|| "analysis".to_string(), |p| p.to_string()),
                message
            );
            Err(Error::internal(message, phase))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Report(AnalysisReport),
    Error(ErrorBody),
}

/// Transport-neutral response: an HTTP-style status and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: ResponseBody,
}

impl Response {
    pub fn from_result(result: Result<AnalysisReport>) -> Self {
        match result {
            Ok(report) => Self {
                status: 200,
                body: ResponseBody::Report(report),
            },
            Err(err) => Self {
                status: err.status_code(),
                body: ResponseBody::Error(ErrorBody {
                    error: err.public_message(),
                }),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.body)?)
    }
}

/// Full request cycle: raw body in, response out.
pub fn handle_request<S: PolarityScorer>(
    classifier: &SentimentClassifier<S>,
    body: &str,
) -> Response {
    let result = parse_request(body).and_then(|text| analyze_text(classifier, Some(&text)));
    if let Err(err) = &result {
        if err.is_client_error() {
            log::debug!("Rejected request: {}", err);
        }
    }
    Response::from_result(result)
}
