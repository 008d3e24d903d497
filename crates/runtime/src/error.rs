/// Runtime errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Settings file could not be loaded or named an unknown policy
    #[error("failed to load elemental affinity settings: {0}")]
    SettingsError(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
