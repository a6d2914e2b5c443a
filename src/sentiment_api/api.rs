//! Client for the remote sentiment-analysis service.

use serde::{Deserialize, Serialize};

use crate::config::ServiceSettings;
use crate::http_client;
use crate::sentiment::{AnalysisMode, AnalysisOutcome, LineResult, Sentiment, SentimentResult};

/// Input for one analysis call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// Pre-split, non-empty lines.
    Lines(Vec<String>),
    /// One block of free text.
    Text(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Nothing to analyze")]
    EmptyInput,
    #[error("Invalid endpoint {endpoint}: {source}")]
    Endpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("Service rejected the request: {0}")]
    BadRequest(String),
    #[error("Service error: {0}")]
    ServerError(String),
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Serialize)]
struct LinesBody<'a> {
    lines: &'a [String],
}

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct LinesResponseWire {
    results: Option<Vec<LineResultWire>>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct LineResultWire {
    #[serde(default)]
    line: String,
    sentiment: Sentiment,
    confidence: f64,
}

#[derive(Deserialize)]
struct TextResponseWire {
    sentiment: Option<Sentiment>,
    confidence: Option<f64>,
    error: Option<String>,
}

/// Sends analysis requests to the configured endpoints.
#[derive(Clone)]
pub struct AnalysisClient {
    agent: ureq::Agent,
    service: ServiceSettings,
}

impl AnalysisClient {
    pub fn new(service: ServiceSettings) -> Self {
        let agent = http_client::build_agent(service.timeouts());
        Self { agent, service }
    }

    /// Run one request and wrap the result by mode.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisOutcome, AnalyzeError> {
        match request {
            AnalysisRequest::Lines(lines) => self.analyze_lines(lines).map(AnalysisOutcome::Lines),
            AnalysisRequest::Text(text) => self.analyze_text(text).map(AnalysisOutcome::Text),
        }
    }

    /// POST `{"lines": [...]}` and return one result per returned entry.
    pub fn analyze_lines(&self, lines: &[String]) -> Result<Vec<LineResult>, AnalyzeError> {
        if lines.is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }
        let body = self.post(AnalysisMode::Lines, &LinesBody { lines })?;
        let mut results = parse_lines_response(&body)?;
        if results.len() == lines.len() {
            fill_missing_lines(&mut results, lines);
        } else {
            tracing::warn!(
                sent = lines.len(),
                received = results.len(),
                "Result count differs from line count"
            );
        }
        Ok(results)
    }

    /// POST `{"text": "..."}` and return the single result.
    pub fn analyze_text(&self, text: &str) -> Result<SentimentResult, AnalyzeError> {
        if text.trim().is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }
        let body = self.post(AnalysisMode::Text, &TextBody { text })?;
        parse_text_response(&body)
    }

    fn post(&self, mode: AnalysisMode, body: &impl Serialize) -> Result<String, AnalyzeError> {
        let endpoint = self
            .service
            .endpoint(mode)
            .map_err(|source| AnalyzeError::Endpoint {
                endpoint: endpoint_description(&self.service, mode),
                source,
            })?;
        tracing::info!(mode = mode.as_str(), %endpoint, "Sending analysis request");
        let max_bytes = self.service.max_response_bytes;
        let request = self
            .agent
            .post(endpoint.as_str())
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");

        let response = match request.send_json(body) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let body = http_client::read_response_text(response, max_bytes)
                    .unwrap_or_else(|err| err);
                return Err(map_status_error(code, &body));
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(AnalyzeError::Transport(err.to_string()));
            }
        };
        http_client::read_response_text(response, max_bytes).map_err(AnalyzeError::InvalidResponse)
    }
}

fn endpoint_description(service: &ServiceSettings, mode: AnalysisMode) -> String {
    let path = match mode {
        AnalysisMode::Lines => &service.lines_path,
        AnalysisMode::Text => &service.text_path,
    };
    format!("{} + {}", service.base_url, path)
}

fn map_status_error(code: u16, body: &str) -> AnalyzeError {
    let message = service_error_message(body).unwrap_or_else(|| body.trim().to_string());
    match code {
        400 => AnalyzeError::BadRequest(message),
        500..=599 => AnalyzeError::ServerError(message),
        _ => AnalyzeError::Status {
            code,
            body: message,
        },
    }
}

/// Pull the `error` field out of a JSON error body, if there is one.
fn service_error_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<serde_json::Value>(body.trim()).ok()?;
    value
        .get("error")
        .and_then(|error| error.as_str())
        .map(str::to_string)
}

fn parse_lines_response(body: &str) -> Result<Vec<LineResult>, AnalyzeError> {
    let trimmed = non_empty_body(body)?;
    let parsed: LinesResponseWire = serde_json::from_str(trimmed)
        .map_err(|err| AnalyzeError::InvalidResponse(err.to_string()))?;
    let Some(results) = parsed.results else {
        return Err(match parsed.error {
            Some(message) => AnalyzeError::ServerError(message),
            None => AnalyzeError::InvalidResponse("Missing results in response".to_string()),
        });
    };
    Ok(results
        .into_iter()
        .map(|wire| LineResult {
            line: wire.line,
            sentiment: wire.sentiment,
            confidence: clamp_confidence(wire.confidence),
        })
        .collect())
}

fn parse_text_response(body: &str) -> Result<SentimentResult, AnalyzeError> {
    let trimmed = non_empty_body(body)?;
    let parsed: TextResponseWire = serde_json::from_str(trimmed)
        .map_err(|err| AnalyzeError::InvalidResponse(err.to_string()))?;
    match (parsed.sentiment, parsed.confidence) {
        (Some(sentiment), Some(confidence)) => Ok(SentimentResult {
            sentiment,
            confidence: clamp_confidence(confidence),
        }),
        _ => Err(match parsed.error {
            Some(message) => AnalyzeError::ServerError(message),
            None => AnalyzeError::InvalidResponse(
                "Missing sentiment/confidence in response".to_string(),
            ),
        }),
    }
}

/// Entries returned without a `line` take the sent line at the same index.
fn fill_missing_lines(results: &mut [LineResult], sent: &[String]) {
    for (result, line) in results.iter_mut().zip(sent) {
        if result.line.is_empty() {
            result.line = line.clone();
        }
    }
}

fn non_empty_body(body: &str) -> Result<&str, AnalyzeError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(AnalyzeError::InvalidResponse(
            "Empty response body".to_string(),
        ));
    }
    Ok(trimmed)
}

fn clamp_confidence(value: f64) -> f64 {
    if (0.0..=1.0).contains(&value) {
        // `-0.0` is in range; store it as `0.0`.
        return value + 0.0;
    }
    tracing::warn!(confidence = value, "Confidence outside [0, 1]; clamping");
    value.clamp(0.0, 1.0)
}
