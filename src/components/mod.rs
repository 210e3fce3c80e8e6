//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are schema- or record-driven and report changes through
//! callbacks; only pages touch shared graph state.

pub mod drawer;
pub mod field_input;
pub mod record_details;
pub mod record_list;
pub mod schema_form;
pub mod search_select;
