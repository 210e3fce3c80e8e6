//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The graph screen owns a single state model; components read and write it
//! through a `RwSignal` context.

pub mod graph;
