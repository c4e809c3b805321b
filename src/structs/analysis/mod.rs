pub mod analysis_result;
pub mod guardrails_feedback;
pub mod pii_detection;
pub mod quality_scores;
