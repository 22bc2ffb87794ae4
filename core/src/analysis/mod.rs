pub mod client;
pub mod prompt;
pub mod wire;

pub use client::{
    AnalysisClient, AnalysisOutcome, ChatCompletion, HttpChatTransport, TransportError,
    FALLBACK_TEXT,
};
pub use prompt::{build_analysis_request, ANALYSIS_INSTRUCTION};
