use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone)]
pub struct UpstreamRequest<'a> {
    pub inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<UpstreamOptions>,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct UpstreamOptions {
    pub wait_for_model: bool,
}

/// One element of the array the summarization model answers with.
#[derive(Deserialize, Debug, Clone)]
pub struct UpstreamSummary {
    pub summary_text: String,
}
