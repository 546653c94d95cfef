//! Read-only query tools for a tool-calling assistant.
//!
//! Each tool reads persisted conference data and renders a plain-text
//! answer. The tool layer never calls the eligibility validator and has
//! no write path.

pub mod tools;

use confera_db::DbPool;
use serde::Serialize;
use serde_json::Value;

/// Description of one callable tool, served by `GET /assistant/tools`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// Names of required string arguments.
    pub arguments: &'static [&'static str],
}

/// The registry of available tools.
pub const TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "list_conferences",
        description: "Return all conferences with their date range",
        arguments: &[],
    },
    ToolDescriptor {
        name: "get_conference_details",
        description: "Return details about a conference matched by name",
        arguments: &["name"],
    },
    ToolDescriptor {
        name: "list_sessions",
        description: "List all sessions for a conference matched by name",
        arguments: &["conference_name"],
    },
    ToolDescriptor {
        name: "filter_by_theme",
        description: "Filter conferences by theme, loosely matched",
        arguments: &["theme"],
    },
];

/// Why a tool call failed before producing an answer.
///
/// "No match" and "ambiguous match" are not errors; tools report those
/// in their rendered text so the assistant can relay them verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Dispatch a tool call by name, returning the rendered text answer.
pub async fn run_tool(pool: &DbPool, name: &str, arguments: &Value) -> Result<String, ToolError> {
    let arg = |key: &'static str| -> Result<&str, ToolError> {
        arguments
            .get(key)
            .and_then(Value::as_str)
            .ok_or(ToolError::MissingArgument(key))
    };

    match name {
        "list_conferences" => tools::list_conferences(pool).await,
        "get_conference_details" => tools::get_conference_details(pool, arg("name")?).await,
        "list_sessions" => tools::list_sessions(pool, arg("conference_name")?).await,
        "filter_by_theme" => tools::filter_by_theme(pool, arg("theme")?).await,
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}
