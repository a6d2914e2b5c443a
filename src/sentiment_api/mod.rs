//! HTTP contract with the remote sentiment-analysis service.

pub mod api;

pub use api::{AnalysisClient, AnalysisRequest, AnalyzeError};
