//! Feature slices: one module per user-facing flow, each split into pure
//! state (host-tested) and a wasm-gated view.

pub mod admin;
pub mod backend;
pub mod paper_form;
pub mod papers;
