use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for rejected requests and failed operations.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
