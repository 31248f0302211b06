use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};
use std::fmt::Display;

/// Render values space separated, with a space after the last one as well, and end the line.
fn format_values<T: Display>(values: &[T]) -> String {
    let mut text = String::new();

    for value in values {
        text += &format!("{} ", value);
    }

    text.push('\n');
    text
}

/// Print out the operand stack without changing it, bottom first.
///
/// Signature: ` -- `
fn word_print_stack(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let text = format_values(interpreter.stack());

    interpreter.output().write_all(text.as_bytes())?;
    Ok(())
}

/// Print out the string stack without changing it, bottom first.
///
/// Signature: ` -- `
fn word_print_strings(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let text = format_values(interpreter.strings());

    interpreter.output().write_all(text.as_bytes())?;
    Ok(())
}

/// Print out the names of all the words in the dictionary.
///
/// Signature: ` -- `
fn word_print_dictionary(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let text = interpreter.dictionary().to_string();

    interpreter.output().write_all(text.as_bytes())?;
    Ok(())
}

/// Register the interpreter inspection words.
pub fn register_nforth_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, ".", word_print_stack);
    add_native_word!(interpreter, ".str", word_print_strings);
    add_native_word!(interpreter, "words", word_print_dictionary);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_space_separated() {
        assert_eq!(format_values(&[10.0, 2.5, -1.0]), "10 2.5 -1 \n");
        assert_eq!(format_values::<f64>(&[]), "\n");
        assert_eq!(format_values(&["a b", "c"]), "a b c \n");
    }
}
