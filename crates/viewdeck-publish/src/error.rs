use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encode/decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document does not contain the named assignment anchor. Callers
    /// must surface this — a publish target silently missing its anchor
    /// would ship stale data forever.
    #[error("placeholder assignment `const {name} = ...;` not found in document")]
    PlaceholderMissing { name: String },

    /// The anchor was found but its expression never terminates with `;`.
    #[error("placeholder assignment `const {name} = ...` has no terminating semicolon")]
    UnterminatedSpan { name: String },
}
