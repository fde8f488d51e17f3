//! Core business logic module
//!
//! This module contains the command processing components:
//! - `traits` - Read-only directory abstraction used by the engine
//! - `registry` - Client and account directory
//! - `engine` - Command processing orchestration

pub mod engine;
pub mod registry;
pub mod traits;

pub use engine::Bank;
pub use registry::Registry;
pub use traits::Directory;
