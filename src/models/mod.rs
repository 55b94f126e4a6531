//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod category;
pub mod problem;
pub mod real_world_example;
pub mod solution;

pub use category::*;
pub use problem::*;
pub use real_world_example::*;
pub use solution::*;
