use crate::{
    add_native_word,
    runtime::{
        data_structures::atom::Atom,
        error::{self, ErrorKind, script_error},
        interpreter::Interpreter,
    },
};

/// Define a new word.  The name is the next atom in the pending sequence, the body is everything
/// after it up to the `;` terminator.  The terminator is consumed but isn't part of the body.
///
/// At least two atoms have to follow the name, something for the body and the terminator.  If
/// they aren't there, or the terminator never shows up, the word is malformed and nothing is
/// bound.
///
/// Signature: ` -- `
fn word_define(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let name = match interpreter.next_atom() {
        Some(Atom::Symbol(name)) => name,

        Some(other) => {
            return script_error(interpreter, ErrorKind::MalformedDefinition(other.to_string()));
        }

        None => {
            let define = interpreter.reserved().define;
            return script_error(interpreter, ErrorKind::MalformedDefinition(define.to_string()));
        }
    };

    if interpreter.pending().len() < 2 {
        return script_error(interpreter, ErrorKind::MalformedDefinition(name.to_string()));
    }

    let terminator = interpreter.reserved().terminator;

    match interpreter.collect_until(terminator) {
        Some(body) => {
            interpreter.define_word(name, body);
            Ok(())
        }

        None => script_error(interpreter, ErrorKind::MalformedDefinition(name.to_string())),
    }
}

/// Register the word creation words.
pub fn register_word_creation_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, ":", word_define);
}
