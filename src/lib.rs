/// The SARSA agent
pub mod agent;

/// Error types
pub mod error;

/// Exploration policies
pub mod exploration;
