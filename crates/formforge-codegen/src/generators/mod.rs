//! The four fragment generators.
//!
//! Each generator is a pure total function over the field list. Output
//! order always matches input order so the emitted code stays
//! field-for-field aligned with the builder list; any kind a generator
//! does not recognize falls back to the plain text rule rather than
//! erroring.

pub mod defaults;
pub mod imports;
pub mod markup;
pub mod schema;
