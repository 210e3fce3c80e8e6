//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form, selector, and record-view models live here as plain data so they
//! can be tested without a browser; components only wire them to the DOM.

pub mod draft;
pub mod record_view;
pub mod schema;
pub mod search;
pub mod storage;
