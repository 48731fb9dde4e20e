//! Dashboard implementation
//!
//! Shared by the child and parent views; the role decides which fields appear.

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::DashboardState;
