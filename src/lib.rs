//! LLM-backed content analysis over HTTP.
//!
//! `POST /analyze` takes `{"text": "..."}`, asks the completion service for a
//! JSON analysis (content type, PII, quality scores, feedback, rewrite) and
//! returns `{"success": true, "analysis": {...}}`.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
