use crate::{error::ErrorServer, health, summarize};
use precis_core::helpers::dto::{HealthResponse, SummaryRequest, SummaryResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(summarize::handler::summarize, health::handler::health),
    components(schemas(SummaryRequest, SummaryResponse, HealthResponse, ErrorServer))
)]
pub struct ApiDoc;
