use thiserror::Error;

/// Top-level error type used across the gizmo option crates.
#[derive(Debug, Error)]
pub enum GizmoError {
    /// A gizmo was constructed from dynamic input without a field its
    /// contract requires (currently only `name`).
    #[error("gizmo `{gizmo}` requires field `{field}`")]
    MissingRequiredField {
        gizmo: &'static str,
        field: &'static str,
    },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T, E = GizmoError> = std::result::Result<T, E>;
