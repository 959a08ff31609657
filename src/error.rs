use thiserror::Error;

/// Error type for agent construction and value table access
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SarsaError {
    /// A hyperparameter was outside the open interval `(0, 1)`
    #[error("invalid value {value} for `{name}`, must be in the open interval (0, 1)")]
    InvalidHyperparameter { name: &'static str, value: f32 },
    /// The table shape was empty or contained a zero-sized dimension
    #[error("invalid table shape {shape:?}, must be non-empty with positive dimensions")]
    InvalidShape { shape: Vec<usize> },
    /// A state index did not match the table's state dimensions
    #[error("state index {state:?} is out of bounds for state dimensions {dims:?}")]
    StateOutOfBounds { state: Vec<usize>, dims: Vec<usize> },
    /// An action index was outside `[0, action_space)`
    #[error("action index {action} is out of bounds for action space of size {action_space}")]
    ActionOutOfBounds { action: usize, action_space: usize },
}
