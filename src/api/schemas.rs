use serde::Serialize;
use utoipa::ToSchema;

/// Envelope returned by every FAQ endpoint on success.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope returned on validation, authorization and store failures.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code, e.g. `VALIDATION_ERROR`, `FORBIDDEN`, `TOPIC_NOT_FOUND`
    #[schema(example = "TOPIC_NOT_FOUND")]
    pub code: String,

    /// Message shown to the client as-is
    #[schema(example = "invalid Topic id: data not found")]
    pub message: String,
}
