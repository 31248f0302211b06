/// Module for tracking where a line of source text came from.
pub mod source_location;

/// Module for splitting a line of source text into raw tokens.
pub mod tokenizing;

/// Module for classifying raw tokens into numbers, string literals and symbols.
pub mod parsing;
