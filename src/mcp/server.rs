//! MCP Server implementation
//!
//! Implements the MCP tools for gulp-targets using rmcp SDK.

use rmcp::model::{Implementation, ServerCapabilities, ServerInfo, ToolsCapability};
use rmcp::{tool, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{ErrorInfo, ProviderError};
use crate::project::{expand_project_path, resolve_project_dir};
use crate::provider::{detect_gulp, BuildProvider, BuildTarget, Detection, GulpBuilder};

/// MCP Server for gulp-targets
#[derive(Clone)]
pub struct GulpTargetsServer {
    /// Configuration loaded at startup
    config: Config,
}

impl GulpTargetsServer {
    /// Create with a specific config
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    fn builder(&self) -> GulpBuilder {
        GulpBuilder::with_config(self.config.clone())
    }
}

impl Default for GulpTargetsServer {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

// === Tool Parameter Types ===

/// Parameters shared by all tools
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProjectParams {
    /// Project directory (defaults to the server's current directory)
    #[serde(default)]
    pub project: Option<String>,
}

/// Response from is_eligible tool
#[derive(Debug, Serialize)]
pub struct IsEligibleResponse {
    /// Project directory that was checked
    pub project_path: String,
    /// Whether a gulpfile exists there
    pub eligible: bool,
}

/// Response from list_targets tool
#[derive(Debug, Serialize)]
pub struct ListTargetsResponse {
    /// Project directory the targets belong to
    pub project_path: String,
    /// Targets in the order gulp reported them
    pub targets: Vec<BuildTarget>,
}

/// Response from detect_gulp tool
#[derive(Debug, Serialize)]
pub struct DetectGulpResponse {
    /// Project directory that was inspected
    pub project_path: String,
    #[serde(flatten)]
    pub detection: Detection,
}

/// Error response for tools
#[derive(Debug, Serialize)]
struct ToolError {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<ErrorInfo>,
}

impl ToolError {
    fn new(error: impl std::fmt::Display, suggestion: Option<String>) -> String {
        Self::render(ToolError {
            success: false,
            error: error.to_string(),
            suggestion,
            details: None,
        })
    }

    fn from_provider(err: &ProviderError) -> String {
        let info = ErrorInfo::from(err);
        Self::render(ToolError {
            success: false,
            error: err.to_string(),
            suggestion: info.suggestion.clone(),
            details: Some(info),
        })
    }

    fn render(error: ToolError) -> String {
        serde_json::to_string_pretty(&error).unwrap_or_else(|_| {
            format!("{{\"success\":false,\"error\":{:?}}}", error.error)
        })
    }
}

fn to_json<T: Serialize>(response: &T) -> String {
    serde_json::to_string_pretty(response)
        .unwrap_or_else(|e| ToolError::new(format!("Serialization error: {}", e), None))
}

// === MCP Tool Implementations ===

#[tool(tool_box)]
impl GulpTargetsServer {
    /// Check whether a project can be built with gulp
    #[tool(description = "Check whether a project directory contains a gulpfile and can be built with gulp.")]
    pub async fn is_eligible(&self, #[tool(aggr)] params: ProjectParams) -> String {
        let project_path = match expand_project_path(params.project.as_deref()) {
            Ok(p) => p,
            Err(e) => return ToolError::from_provider(&e),
        };

        let eligible = self.builder().is_eligible(&project_path);

        to_json(&IsEligibleResponse {
            project_path: project_path.display().to_string(),
            eligible,
        })
    }

    /// List gulp tasks as build targets
    #[tool(
        description = "List gulp tasks of a project as build targets. Each target has name, exec, args and sh; run exec with args in the project directory."
    )]
    pub async fn list_targets(&self, #[tool(aggr)] params: ProjectParams) -> String {
        let project_path = match resolve_project_dir(params.project.as_deref()) {
            Ok(p) => p,
            Err(e) => return ToolError::from_provider(&e),
        };

        let builder = self.builder();
        if !builder.is_eligible(&project_path) {
            return ToolError::new(
                format!("No gulpfile found in {}", project_path.display()),
                Some("Point 'project' at the directory containing gulpfile.js".into()),
            );
        }

        match builder.settings(&project_path).await {
            Ok(targets) => to_json(&ListTargetsResponse {
                project_path: project_path.display().to_string(),
                targets,
            }),
            Err(e) => ToolError::from_provider(&e),
        }
    }

    /// Report how gulp would be found for a project
    #[tool(description = "Report the gulpfile, local gulp install and global gulp command for a project.")]
    pub async fn detect_gulp(&self, #[tool(aggr)] params: ProjectParams) -> String {
        let project_path = match resolve_project_dir(params.project.as_deref()) {
            Ok(p) => p,
            Err(e) => return ToolError::from_provider(&e),
        };

        to_json(&DetectGulpResponse {
            project_path: project_path.display().to_string(),
            detection: detect_gulp(&project_path, &self.config.gulp),
        })
    }
}

#[tool(tool_box)]
impl ServerHandler for GulpTargetsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "gulp-targets".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "MCP server that detects gulp projects and lists their tasks as build targets. \
                 It never runs builds; execute a target's exec and args yourself."
                    .to_string(),
            ),
        }
    }
}
