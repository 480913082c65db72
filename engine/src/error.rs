use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid binding path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
    #[error("schema error in node '{node}': {reason}")]
    Schema { node: String, reason: String },
    #[error("no renderer registered for kind '{kind}' (node '{node}')")]
    UnknownRenderer { kind: String, node: String },
    #[error("repeat source '{path}' in node '{node}' is not an array")]
    RepeatSource { node: String, path: String },
    #[error("layout error in node '{node}': {reason}")]
    Layout { node: String, reason: String },
    #[error("render error: {0}")]
    Render(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A non-fatal problem encountered while rendering one subtree.
///
/// Issues are collected on the render output so the host can surface them;
/// the siblings of the failed subtree always render.
#[derive(Debug)]
pub struct RenderIssue {
    pub node_id: String,
    pub error: EngineError,
}

impl RenderIssue {
    pub fn new(node_id: impl Into<String>, error: EngineError) -> Self {
        Self {
            node_id: node_id.into(),
            error,
        }
    }
}
