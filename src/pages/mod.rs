//! Page-level route components.

pub mod graph;
