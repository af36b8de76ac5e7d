//! Core types for the formforge engine.
//!
//! This crate provides the foundational types shared by the code generator,
//! the state store, and the preview interpreter:
//! - The field descriptor model (`Field`, `FieldKind`, `SubType`, ...)
//! - The naming configuration (`ComponentInfo`)
//! - The static password complexity rule table
//! - The fixed option dataset backing choice-based controls

pub mod field;
pub mod options;
pub mod rules;

pub use field::*;
pub use options::*;
pub use rules::*;
