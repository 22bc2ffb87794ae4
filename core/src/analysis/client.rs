use std::time::Duration;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::analysis::prompt::build_analysis_request;
use crate::analysis::wire::{ChatRequest, ChatResponse};
use crate::imaging::encode_png_base64;
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::MetricsRecorder;

/// Text surfaced to the end user whenever a remote call is masked.
pub const FALLBACK_TEXT: &str = "Unable to analyze image. Please try again.";

/// Common error type for remote-call transport failures.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("service returned status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Trait describing the chat-completion transport so tests can substitute a
/// stub for the HTTP client.
pub trait ChatCompletion {
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError>;
}

/// Production transport: one bearer-authenticated POST per analysis, bounded
/// by the configured request timeout. Blocking; callers on an async runtime
/// run it through a blocking task.
pub struct HttpChatTransport {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl HttpChatTransport {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

impl ChatCompletion for HttpChatTransport {
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|err| TransportError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<ChatResponse>()
            .map_err(|err| TransportError::MalformedResponse(err.to_string()))
    }
}

/// Two-variant analysis result: a real completion, or the fixed fallback
/// with the masked diagnostic preserved for callers that care.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Completed { text: String },
    Fallback { text: String, reason: String },
}

impl AnalysisOutcome {
    pub fn text(&self) -> &str {
        match self {
            AnalysisOutcome::Completed { text } => text,
            AnalysisOutcome::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisOutcome::Fallback { .. })
    }
}

/// Client that turns an uploaded raster into a remote model description.
/// Each invocation is an independent call: no retry, no backoff, no caching.
pub struct AnalysisClient<T> {
    transport: T,
    model: String,
    max_output_tokens: u32,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl<T: ChatCompletion> AnalysisClient<T> {
    pub fn new(transport: T, model: impl Into<String>, max_output_tokens: u32) -> Self {
        Self {
            transport,
            model: model.into(),
            max_output_tokens,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Encodes the image, performs the remote call, and extracts the first
    /// choice's text. Never returns an error past this boundary: every
    /// failure is logged and masked behind [`FALLBACK_TEXT`].
    pub fn analyze(&self, image: &DynamicImage) -> AnalysisOutcome {
        let encoded = match encode_png_base64(image) {
            Ok(encoded) => encoded,
            Err(err) => return self.fallback(err.to_string()),
        };

        let request = build_analysis_request(&self.model, self.max_output_tokens, &encoded);
        match self.transport.complete(&request) {
            Ok(response) => match response.first_text() {
                Some(text) => {
                    self.metrics.record_analysis();
                    self.logger
                        .record(&format!("analysis completed, {} chars", text.len()));
                    AnalysisOutcome::Completed {
                        text: text.to_string(),
                    }
                }
                None => self.fallback("response carried no choices".to_string()),
            },
            Err(err) => self.fallback(err.to_string()),
        }
    }

    fn fallback(&self, reason: String) -> AnalysisOutcome {
        self.metrics.record_fallback();
        self.logger
            .record_failure(&format!("image analysis error: {}", reason));
        AnalysisOutcome::Fallback {
            text: FALLBACK_TEXT.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::wire::{ChatChoice, ChoiceMessage};
    use image::{DynamicImage, Rgb, RgbImage};

    struct StubTransport {
        reply: Result<String, ()>,
    }

    impl ChatCompletion for StubTransport {
        fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, TransportError> {
            match &self.reply {
                Ok(text) => Ok(ChatResponse {
                    choices: vec![ChatChoice {
                        message: ChoiceMessage {
                            content: text.clone(),
                        },
                    }],
                }),
                Err(()) => Err(TransportError::Request("connection refused".into())),
            }
        }
    }

    fn sample_image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([90, 120, 60])))
    }

    #[test]
    fn successful_call_returns_first_choice_verbatim() {
        let client = AnalysisClient::new(
            StubTransport {
                reply: Ok("dense canopy over river delta".into()),
            },
            "vision-model",
            1024,
        );

        let outcome = client.analyze(&sample_image());
        assert_eq!(
            outcome,
            AnalysisOutcome::Completed {
                text: "dense canopy over river delta".into()
            }
        );
        assert_eq!(client.metrics().snapshot(), (1, 0));
    }

    #[test]
    fn transport_failure_is_masked_behind_fallback() {
        let client = AnalysisClient::new(StubTransport { reply: Err(()) }, "vision-model", 1024);

        let outcome = client.analyze(&sample_image());
        assert!(outcome.is_fallback());
        assert_eq!(outcome.text(), FALLBACK_TEXT);
        assert_eq!(client.metrics().snapshot(), (0, 1));
    }

    #[test]
    fn empty_choice_list_is_masked_behind_fallback() {
        struct EmptyTransport;
        impl ChatCompletion for EmptyTransport {
            fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, TransportError> {
                Ok(ChatResponse { choices: vec![] })
            }
        }

        let client = AnalysisClient::new(EmptyTransport, "vision-model", 1024);
        let outcome = client.analyze(&sample_image());
        assert_eq!(outcome.text(), FALLBACK_TEXT);
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = AnalysisOutcome::Fallback {
            text: FALLBACK_TEXT.into(),
            reason: "timeout".into(),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "fallback");
        assert_eq!(value["text"], FALLBACK_TEXT);
    }
}
