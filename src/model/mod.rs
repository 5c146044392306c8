//! Data model for extracted log records.
//!
//! Every parser in this crate emits one of three record shapes: unified-log
//! records, crash-report records, and package-log records. Records are plain
//! value objects — created once by a parse call, never mutated, owned by the
//! caller that receives them. Timestamps are carried in their source-native
//! string form; the parsers never reformat them.

pub mod crash;
pub mod package;
pub mod record;
pub mod source;

pub use crash::*;
pub use package::*;
pub use record::*;
pub use source::*;
