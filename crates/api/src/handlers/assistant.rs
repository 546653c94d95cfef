//! Handlers for the assistant tool layer.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::assistant::{run_tool, ToolError, TOOLS};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /assistant/tools/call`.
#[derive(Debug, Deserialize)]
pub struct ToolCallRequest {
    pub name: String,
    /// Tool arguments as a JSON object; may be omitted for nullary tools.
    #[serde(default)]
    pub arguments: Value,
}

/// Rendered tool output.
#[derive(Debug, Serialize)]
pub struct ToolCallResponse {
    pub output: String,
}

/// GET /api/v1/assistant/tools
///
/// List the callable tool descriptors.
pub async fn list_tools() -> impl IntoResponse {
    Json(DataResponse { data: TOOLS })
}

/// POST /api/v1/assistant/tools/call
pub async fn call_tool(
    State(state): State<AppState>,
    Json(request): Json<ToolCallRequest>,
) -> AppResult<impl IntoResponse> {
    let output = run_tool(&state.pool, &request.name, &request.arguments)
        .await
        .map_err(|e| match e {
            ToolError::UnknownTool(_) | ToolError::MissingArgument(_) => {
                AppError::BadRequest(e.to_string())
            }
            ToolError::Database(db) => AppError::Database(db),
        })?;

    tracing::debug!(tool = %request.name, "Assistant tool call served");

    Ok(Json(DataResponse {
        data: ToolCallResponse { output },
    }))
}
