//! The dependency graph model and its seeded, layered generator.

pub mod dag;
pub mod dot;
pub mod generator;

pub use dag::*;
pub use dot::{pipe_to, to_dot};
pub use generator::{LayeredGraph, generate, generate_layered};
