/// The core words of the language.
pub mod base_words;

/// Words that read input and load scripts, along with the line sources and the REPL.
pub mod io_words;
