use crate::{
    add_native_word,
    runtime::{
        error::{self, ErrorKind, script_error},
        interpreter::Interpreter,
    },
};

/// Skip a comment.  Everything up to and including the next `)` is thrown away.  Comments don't
/// nest, and a comment that's never closed swallows the rest of the pending code.
///
/// Signature: ` -- `
fn word_comment(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let comment_end = interpreter.reserved().comment_end;

    while let Some(atom) = interpreter.next_atom() {
        if atom.is_symbol(comment_end) {
            break;
        }
    }

    Ok(())
}

/// Skip the rest of the pending code.
///
/// Signature: ` -- `
fn word_line_comment(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.clear_pending();
    Ok(())
}

/// Loop while the top of the stack is non-zero.  The loop body is everything up to the `;`
/// terminator.  The condition is popped before the first pass and again after every pass, so the
/// body is expected to leave the next condition on the stack.
///
/// The loop ends on a condition of exactly zero, or when there's no condition left to pop.
///
/// Signature: `condition -- `
fn word_while(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let terminator = interpreter.reserved().terminator;

    let body = match interpreter.collect_until(terminator) {
        Some(body) => body,
        None => {
            return script_error(interpreter, ErrorKind::MalformedDefinition("while".to_string()));
        }
    };

    while let Some(condition) = interpreter.try_pop() {
        if condition == 0.0 {
            break;
        }

        interpreter.evaluate(&body)?;
    }

    Ok(())
}

/// Register the comment and flow control words.
pub fn register_control_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "(", word_comment);
    add_native_word!(interpreter, "\\", word_line_comment);
    add_native_word!(interpreter, "while", word_while);
}
