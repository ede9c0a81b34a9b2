/// Insert, update and remove commands.
pub mod edit;
/// Parse and re-serialize command.
pub mod fmt;
/// Path lookup commands.
pub mod get;
/// Object key listing command.
pub mod keys;
/// Array sort command.
pub mod sort;
mod util;
/// Schema validation command.
pub mod validate;
