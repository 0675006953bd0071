use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SummarizeRequest {
    // A missing field takes the same rejection path as an empty one
    #[serde(default)]
    pub url: String,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}
