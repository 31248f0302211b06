use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};

/// Drop the top value on the operand stack.
///
/// Signature: `value -- `
fn word_drop(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.pop()?;

    Ok(())
}

/// Copy the value at the given index to the top of the stack.  The index counts down from the top
/// of the stack once the index itself has been popped, 0 is the top.
///
/// Signature: `... index -- ... picked-value`
fn word_pick(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let index = interpreter.pop_as_index()?;
    let value = interpreter.pick(index)?;

    interpreter.push(value);

    Ok(())
}

/// Move the value at the given index to the top of the stack.  Indexed the same way as `pick`.
///
/// Signature: `... index -- ... rolled-value`
fn word_roll(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let index = interpreter.pop_as_index()?;

    interpreter.roll(index)
}

/// Get the depth of the operand stack before calling this word.
///
/// Signature: ` -- depth`
fn word_depth(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let depth = interpreter.stack().len() as f64;

    interpreter.push(depth);
    Ok(())
}

/// Register the stack manipulation words.
pub fn register_stack_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "drop", word_drop);
    add_native_word!(interpreter, "pick", word_pick);
    add_native_word!(interpreter, "roll", word_roll);
    add_native_word!(interpreter, "depth", word_depth);
}
