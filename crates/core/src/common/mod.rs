//! Common types shared across the simulator.
//!
//! 1. **Identifiers:** Strong types for pages and frame indices.
//! 2. **Error Handling:** Configuration errors, consistency faults and the engine error.

/// Page number and frame index types.
pub mod page;

/// Error types.
pub mod error;

pub use error::{ConfigError, ConsistencyFault, SimError};
pub use page::{FrameIndex, PageNumber};
