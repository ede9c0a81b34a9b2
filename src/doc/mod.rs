mod array;
mod builtin;
mod error;
mod navigate;
mod object;
mod parse;
mod path;
mod path_ops;
mod schema;
mod validate;
mod value;

/// Ordered value sequence.
pub use array::Array;
/// Builtin string predicates referenced by compiled rules.
pub use builtin::Check;
/// Error families and result alias.
pub use error::{Error, ParseError, PathError, Result, SchemaError, SortError};
/// Path walking primitives behind the `*_path` operations.
pub use navigate::{Growth, PLACEHOLDER, SlotMut, SlotRef, navigate, navigate_mut};
/// String-keyed value mapping.
pub use object::Object;
/// Bracket path tokenizer types.
pub use path::{Path, PathToken};
/// Schema compiler types and options.
pub use schema::{CompileOptions, RegexpPolicy, Schema, VItem, VItemKind};
/// Rule checking entry points.
pub use validate::{check, is_valid};
/// Dynamic value and accessor helpers.
pub use value::{Edit, Selector, Value, ValueKind};
