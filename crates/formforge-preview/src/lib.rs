//! Live preview of a field list.
//!
//! A second, independent consumer of the same field descriptors the code
//! generator reads. Instead of emitting source text it interprets the list
//! directly: `preview` produces a renderable control tree, `PreviewState`
//! carries the interactive values, and `validate` applies the same rules
//! the generated schema would enforce. Behavior must stay consistent with
//! the generator so what-you-see is what-you-get.

pub mod controls;
pub mod validate;
pub mod values;

pub use controls::{preview, PreviewControl, PreviewField};
pub use validate::{validate, ValidationIssue};
pub use values::{PreviewState, Value};
