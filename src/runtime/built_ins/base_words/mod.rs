/// Words that show the state of the interpreter.
mod nforth_words;

/// Words that manipulate the operand stack.
mod stack_words;

/// Words that create new words.
mod word_creation_words;

/// Comments and flow control.
mod control_words;

use crate::runtime::{
    built_ins::base_words::{
        control_words::register_control_words, nforth_words::register_nforth_words,
        stack_words::register_stack_words, word_creation_words::register_word_creation_words,
    },
    interpreter::Interpreter,
};

/// Called to register all of the core words of the language.
pub fn register_base_words(interpreter: &mut dyn Interpreter) {
    register_nforth_words(interpreter);
    register_stack_words(interpreter);
    register_word_creation_words(interpreter);
    register_control_words(interpreter);
}
