//! Gateway for the external document-analysis service.
//!
//! One structured-output request per analysis: the raw document text plus a
//! fixed extraction schema go out, a validated [`AnalysisReport`] comes back.
//! There is no retry and no caching; every call is independent and the caller
//! treats all failure variants identically.

use serde::Deserialize;
use serde_json::json;

use crate::analysis::report::AnalysisReport;
use crate::http_client;

/// Model the extraction request is addressed to.
pub const ANALYSIS_MODEL: &str = "gemini-3-pro-preview";
/// Default REST endpoint base for the generative service.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
/// Environment variable holding the API key, with a legacy fallback.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_KEY_ENV_FALLBACK: &str = "API_KEY";
/// Environment variable overriding the endpoint base (used by tests).
pub const API_BASE_ENV: &str = "WORKSTRAT_API_BASE";

/// Upper bound on the analysis response body.
const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Errors from one analysis request. The UI collapses all of these into a
/// single generic message; the variants exist for logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Missing API key (set `{API_KEY_ENV}`)")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Response exceeded size limit: {0}")]
    Oversized(std::io::Error),
    #[error("Malformed response: {0}")]
    Json(String),
    #[error("Response carried no analysis text")]
    EmptyResponse,
    #[error("Response contained duplicate program titles")]
    DuplicateProgramTitles,
}

/// Wraps the external generative endpoint behind a plain request/response call.
#[derive(Clone, Debug)]
pub struct AnalysisGateway {
    base_url: String,
    model: String,
}

impl Default for AnalysisGateway {
    fn default() -> Self {
        Self::from_env()
    }
}

impl AnalysisGateway {
    /// Gateway against the default endpoint, honoring the base-URL override.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::new(base_url, ANALYSIS_MODEL)
    }

    /// Gateway against an explicit endpoint base.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Read the API key from the environment.
    pub fn api_key_from_env() -> Option<String> {
        std::env::var(API_KEY_ENV)
            .or_else(|_| std::env::var(API_KEY_ENV_FALLBACK))
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    /// Submit `document_text` for extraction and parse the structured result.
    pub fn analyze(
        &self,
        api_key: &str,
        document_text: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        if api_key.trim().is_empty() {
            return Err(AnalysisError::MissingApiKey);
        }
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let body = request_body(document_text);

        let response = match http_client::agent()
            .post(&url)
            .set("x-goog-api-key", api_key)
            .send_json(&body)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                let detail = response.into_string().unwrap_or_default();
                return Err(AnalysisError::Http(format!("HTTP {code}: {detail}")));
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(AnalysisError::Http(err.to_string()));
            }
        };

        let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
            .map_err(AnalysisError::Oversized)?;
        let envelope: GenerateContentResponse =
            serde_json::from_slice(&bytes).map_err(|err| AnalysisError::Json(err.to_string()))?;
        let text = envelope.first_text().ok_or(AnalysisError::EmptyResponse)?;
        let report: AnalysisReport =
            serde_json::from_str(text).map_err(|err| AnalysisError::Json(err.to_string()))?;
        if !report.has_unique_program_titles() {
            return Err(AnalysisError::DuplicateProgramTitles);
        }
        Ok(report)
    }
}

/// Extraction prompt wrapped around the raw document.
fn build_prompt(document_text: &str) -> String {
    format!(
        "Analyze the following HR strategic document or data and extract key workforce \
         planning insights. Provide a structured analysis including metrics, skill gaps, \
         a training roadmap, and strategic insights.\n\n\
         For the training roadmap, ensure you explicitly define:\n\
         1. Key learning modules (with a name and a brief context/detail for each).\n\
         2. Any prerequisites (with a name and a brief detail).\n\
         3. The recommended or maximum team size per session.\n\
         4. A 'managerApprovalStatus' based on whether the document implies this training \
         is already greenlit, still a proposal, or faced previous pushback. Default to \
         'Pending' if unclear.\n\
         5. 'skillsCovered': A list of specific competencies developed.\n\
         6. 'deliveryMethod': How the training is conducted (e.g., 'Instructor-led \
         Virtual', 'On-site Workshop', 'Self-paced eLearning').\n\n\
         Document Content:\n{document_text}"
    )
}

fn request_body(document_text: &str) -> serde_json::Value {
    json!({
        "contents": [{ "parts": [{ "text": build_prompt(document_text) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
        },
    })
}

/// The fixed extraction schema the service must answer in.
fn response_schema() -> serde_json::Value {
    let named_detail = json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "detail": { "type": "STRING" },
        },
        "required": ["name", "detail"],
    });
    json!({
        "type": "OBJECT",
        "properties": {
            "metrics": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "current": { "type": "NUMBER" },
                        "target": { "type": "NUMBER" },
                        "unit": { "type": "STRING" },
                    },
                    "required": ["category", "current", "target", "unit"],
                },
            },
            "skillGaps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "skill": { "type": "STRING" },
                        "currentProficiency": { "type": "NUMBER" },
                        "requiredProficiency": { "type": "NUMBER" },
                        "priority": { "type": "STRING", "enum": ["High", "Medium", "Low"] },
                    },
                    "required": ["skill", "currentProficiency", "requiredProficiency", "priority"],
                },
            },
            "trainingRoadmap": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "objective": { "type": "STRING" },
                        "duration": { "type": "STRING" },
                        "audience": { "type": "STRING" },
                        "expectedOutcome": { "type": "STRING" },
                        "teamSize": { "type": "STRING" },
                        "managerApprovalStatus": {
                            "type": "STRING",
                            "description": "Current approval status from management.",
                            "enum": ["Pending", "Approved", "Rejected"],
                        },
                        "skillsCovered": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "deliveryMethod": { "type": "STRING" },
                        "modules": { "type": "ARRAY", "items": named_detail.clone() },
                        "prerequisites": { "type": "ARRAY", "items": named_detail },
                    },
                    "required": [
                        "title", "objective", "duration", "audience", "expectedOutcome",
                        "modules", "prerequisites", "teamSize", "managerApprovalStatus",
                        "skillsCovered", "deliveryMethod",
                    ],
                },
            },
            "strategicInsights": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "impact": { "type": "STRING", "enum": ["Critical", "Moderate", "Low"] },
                    },
                    "required": ["title", "description", "impact"],
                },
            },
        },
        "required": ["metrics", "skillGaps", "trainingRoadmap", "strategicInsights"],
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .first()
            .map(|part| part.text.as_str())
            .filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    const REPORT_JSON: &str = r#"{
        "metrics": [{ "category": "Data Literacy", "current": 45, "target": 85, "unit": "%" }],
        "skillGaps": [{
            "skill": "Cloud Architecture",
            "currentProficiency": 40,
            "requiredProficiency": 90,
            "priority": "High"
        }],
        "trainingRoadmap": [{
            "title": "Cloud Architecture Fundamentals",
            "objective": "Close the cloud skills gap",
            "duration": "6 Weeks",
            "audience": "Platform engineers",
            "expectedOutcome": "Certified architects",
            "teamSize": "12",
            "managerApprovalStatus": "Approved",
            "skillsCovered": ["Cloud Design"],
            "deliveryMethod": "Instructor-led Virtual",
            "modules": [{ "name": "Landing Zones", "detail": "Guardrails" }],
            "prerequisites": []
        }],
        "strategicInsights": [{
            "title": "Succession cliff",
            "description": "Retirement wave ahead",
            "impact": "Critical"
        }]
    }"#;

    fn envelope_with_text(text: &str) -> String {
        serde_json::to_string(&serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }))
        .unwrap()
    }

    /// Serve one canned HTTP response, handing the raw request back to the test.
    fn serve_once(status_line: &str, body: String) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::channel();
        let status_line = status_line.to_string();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let request = read_http_request(&mut stream);
                let _ = tx.send(request);
                let response = format!(
                    "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        (format!("http://{}", addr), rx)
    }

    fn read_http_request(stream: &mut std::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let read = stream.read(&mut buf).unwrap_or(0);
            if read == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..read]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(headers_end) = text.find("\r\n\r\n") {
                let content_length = text
                    .lines()
                    .find_map(|line| line.strip_prefix("Content-Length: "))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if raw.len() >= headers_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).to_string()
    }

    #[test]
    fn parses_a_well_formed_response() {
        let (base, request_rx) = serve_once("HTTP/1.1 200 OK", envelope_with_text(REPORT_JSON));
        let gateway = AnalysisGateway::new(base, ANALYSIS_MODEL);
        let report = gateway.analyze("test-key", "strategy text").unwrap();
        assert_eq!(report.metrics.len(), 1);
        assert_eq!(
            report.training_roadmap[0].title,
            "Cloud Architecture Fundamentals"
        );

        let request = request_rx.recv().unwrap();
        assert!(request.contains("x-goog-api-key: test-key"));
        assert!(request.contains("responseSchema"));
        assert!(request.contains("strategy text"));
        assert!(request.contains("managerApprovalStatus"));
    }

    #[test]
    fn rejects_blank_api_key_without_a_request() {
        let gateway = AnalysisGateway::new("http://127.0.0.1:1", ANALYSIS_MODEL);
        let err = gateway.analyze("  ", "text").unwrap_err();
        assert!(matches!(err, AnalysisError::MissingApiKey));
    }

    #[test]
    fn maps_http_status_to_error() {
        let (base, _rx) = serve_once("HTTP/1.1 500 Internal Server Error", "{}".to_string());
        let gateway = AnalysisGateway::new(base, ANALYSIS_MODEL);
        let err = gateway.analyze("test-key", "text").unwrap_err();
        assert!(matches!(err, AnalysisError::Http(_)));
    }

    #[test]
    fn maps_empty_candidates_to_error() {
        let (base, _rx) = serve_once("HTTP/1.1 200 OK", r#"{"candidates":[]}"#.to_string());
        let gateway = AnalysisGateway::new(base, ANALYSIS_MODEL);
        let err = gateway.analyze("test-key", "text").unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResponse));
    }

    #[test]
    fn maps_malformed_report_json_to_error() {
        let (base, _rx) = serve_once("HTTP/1.1 200 OK", envelope_with_text("not json"));
        let gateway = AnalysisGateway::new(base, ANALYSIS_MODEL);
        let err = gateway.analyze("test-key", "text").unwrap_err();
        assert!(matches!(err, AnalysisError::Json(_)));
    }

    #[test]
    fn rejects_duplicate_program_titles() {
        let mut report: serde_json::Value = serde_json::from_str(REPORT_JSON).unwrap();
        let duplicate = report["trainingRoadmap"][0].clone();
        report["trainingRoadmap"]
            .as_array_mut()
            .unwrap()
            .push(duplicate);
        let (base, _rx) = serve_once("HTTP/1.1 200 OK", envelope_with_text(&report.to_string()));
        let gateway = AnalysisGateway::new(base, ANALYSIS_MODEL);
        let err = gateway.analyze("test-key", "text").unwrap_err();
        assert!(matches!(err, AnalysisError::DuplicateProgramTitles));
    }

    #[test]
    fn schema_requires_all_roadmap_fields() {
        let schema = response_schema();
        let required = schema["properties"]["trainingRoadmap"]["items"]["required"]
            .as_array()
            .unwrap();
        for field in [
            "title",
            "modules",
            "prerequisites",
            "teamSize",
            "managerApprovalStatus",
            "skillsCovered",
            "deliveryMethod",
        ] {
            assert!(required.iter().any(|value| value == field), "{field}");
        }
    }
}
