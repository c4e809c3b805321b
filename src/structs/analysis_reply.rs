use serde_json::Value;
use warp::http::StatusCode;

/// Status and JSON body produced for one `/analyze` call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReply {
    pub status: StatusCode,
    pub body: Value,
}
