use axum::Json;
use precis_core::helpers::dto::HealthResponse;

#[utoipa::path(
    get,
    path = "/health",
    description = "Liveness probe",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse),
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
