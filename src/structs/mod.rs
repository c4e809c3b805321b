pub mod ai;
pub mod analysis;
pub mod analysis_envelope;
pub mod analysis_reply;
pub mod analysis_request;
pub mod cli;
pub mod config;
pub mod health_status;
