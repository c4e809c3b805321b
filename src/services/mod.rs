pub mod ai_providers;
pub mod content_analyzer;
pub mod response_normalizer;
