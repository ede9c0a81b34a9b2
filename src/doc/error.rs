use thiserror::Error;

use crate::doc::ValueKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Malformed document text.
#[derive(Debug, Error)]
pub enum ParseError {
	/// Text started like a container or quoted string but did not decode as one.
	#[error("malformed {expected} text: {message}")]
	Malformed {
		/// Root kind implied by the first non-whitespace character.
		expected: ValueKind,
		/// Decoder diagnostic.
		message: String,
	},
}

/// Bracket-path resolution failure.
#[derive(Debug, Error)]
pub enum PathError {
	/// A token addressed a position incompatible with the container it met,
	/// or an intermediate object key was missing.
	#[error("invalid path: {path}")]
	InvalidPath {
		/// Original path text.
		path: String,
	},
}

/// Array sort precondition failure. The array is left untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
	/// There was nothing to sort.
	#[error("cannot sort an empty array")]
	Empty,
	/// Elements (or the sort-key fields) do not share one scalar type.
	#[error("cannot sort mixed element types")]
	MixedTypes,
	/// Elements (or the sort-key fields) are not sortable scalars.
	#[error("cannot sort {kind} elements")]
	NotScalar {
		/// Offending element kind.
		kind: ValueKind,
	},
	/// An element was expected to be an object.
	#[error("element {index} is not an object")]
	NotObject {
		/// Offending element index.
		index: usize,
	},
	/// An object element lacks the sort key.
	#[error("element {index} has no key {key:?}")]
	MissingKey {
		/// Offending element index.
		index: usize,
		/// Requested sort key.
		key: String,
	},
}

/// Schema compilation failure.
#[derive(Debug, Error)]
pub enum SchemaError {
	/// Schema text was not parseable.
	#[error("schema: {0}")]
	Parse(#[from] ParseError),
	/// Schema root must be an object, a string or an array.
	#[error("unsupported schema root {kind} (expected object, string or array)")]
	UnsupportedRoot {
		/// Root kind found.
		kind: ValueKind,
	},
	/// A `regexp` rule did not compile and the policy rejects it.
	#[error("invalid regexp {pattern:?}: {message}")]
	InvalidRegexp {
		/// Pattern text from the schema.
		pattern: String,
		/// Regex compiler diagnostic.
		message: String,
	},
}

/// Any error produced by the document subsystem.
#[derive(Debug, Error)]
pub enum Error {
	/// Document text failed to parse.
	#[error(transparent)]
	Parse(#[from] ParseError),
	/// Path did not resolve.
	#[error(transparent)]
	Path(#[from] PathError),
	/// Sort preconditions failed.
	#[error("sort failed: {0}")]
	Sort(#[from] SortError),
	/// Schema did not compile.
	#[error(transparent)]
	Schema(#[from] SchemaError),
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
}
