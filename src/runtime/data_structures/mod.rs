/// The process wide symbol table, giving each word name a single comparable identity.
pub mod symbol;

/// The Atom enumeration, the unit of code and data the evaluator works with.
pub mod atom;

/// The dictionary module provides the word dictionary used by the interpreter.
pub mod dictionary;
