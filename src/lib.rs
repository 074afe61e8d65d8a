pub mod config;
pub mod handler;
pub mod harvest;
pub mod logging;
pub mod model;
pub mod traits;

#[cfg(test)]
mod testing;

// Re-export common types for convenience
pub use config::*;
pub use handler::*;
pub use model::*;
pub use traits::*;
