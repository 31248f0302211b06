use crate::{
    lang::source_location::SourceLocation,
    runtime::{
        data_structures::{
            atom::{Atom, DefinitionBody},
            dictionary::Dictionary,
            symbol::Symbol,
        },
        error,
    },
};
use std::{collections::VecDeque, io::Write, rc::Rc};

pub mod nforth_interpreter;

/// The operand stack of numbers managed by the interpreter.
pub type ValueStack = Vec<f64>;

/// The stack of strings, filled by string literals and the line source.
pub type StringStack = Vec<String>;

/// The queue of atoms waiting to be evaluated.  The evaluator and the lookahead words both take
/// from the front.
pub type PendingList = VecDeque<Atom>;

/// Definition of a word handler function.  This is the function that is called when a primitive
/// is executed.  Can be a lambda, a callable object or a Rust function.
pub type WordHandler = dyn Fn(&mut dyn Interpreter) -> error::Result<()>;

/// The symbols the interpreter gives special meaning to.  They're interned once when the
/// interpreter is created and after that only ever compared by identity.
#[derive(Clone, Copy, Debug)]
pub struct ReservedSymbols {
    /// `:` starts a definition.
    pub define: Symbol,

    /// `;` ends a definition or a loop body.
    pub terminator: Symbol,

    /// `)` ends a comment.
    pub comment_end: Symbol,
}

impl ReservedSymbols {
    pub fn new() -> ReservedSymbols {
        ReservedSymbols {
            define: Symbol::intern(":"),
            terminator: Symbol::intern(";"),
            comment_end: Symbol::intern(")"),
        }
    }
}

impl Default for ReservedSymbols {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for managing the interpreter's operand and string stacks.  Intended to be called by
/// primitives.
pub trait InterpreterStack {
    /// Use to examine the full operand stack when required, for example by the `.` word.
    fn stack(&self) -> &ValueStack;

    /// Push a number onto the operand stack.
    fn push(&mut self, value: f64);

    /// Pop a number from the operand stack.  If the stack is empty a stack underflow error is
    /// returned.
    fn pop(&mut self) -> error::Result<f64>;

    /// Pop a number if there is one, without treating an empty stack as an error.
    fn try_pop(&mut self) -> Option<f64>;

    /// Pop the top value and convert it to a stack index.  Negative or non-finite values can't
    /// address anything on the stack and are reported as a stack underflow.
    fn pop_as_index(&mut self) -> error::Result<usize>;

    /// Copy the value `index` places below the top of the stack, 0 being the top itself.
    fn pick(&mut self, index: usize) -> error::Result<f64>;

    /// Move the value `index` places below the top of the stack to the top.
    fn roll(&mut self, index: usize) -> error::Result<()>;

    /// The full string stack.
    fn strings(&self) -> &StringStack;

    /// Push a string onto the string stack.
    fn push_string(&mut self, text: String);

    /// Pop a string from the string stack, or error if it's empty.
    fn pop_string(&mut self) -> error::Result<String>;
}

/// Trait for managing and evaluating the pending instruction sequence.
pub trait CodeManagement {
    /// The atoms still waiting to be evaluated.
    fn pending(&self) -> &PendingList;

    /// Take the next atom from the front of the pending sequence.  This is how words look ahead at
    /// the code that follows them.
    fn next_atom(&mut self) -> Option<Atom>;

    /// Take atoms from the pending sequence up to the given terminator.  The terminator is consumed
    /// but not returned.  If the sequence runs out first None is returned, and everything that was
    /// pending is gone.
    fn collect_until(&mut self, terminator: Symbol) -> Option<DefinitionBody>;

    /// Throw away everything that's still pending.
    fn clear_pending(&mut self);

    /// Evaluate a block of atoms to completion before returning.  Anything that was already pending
    /// is left alone until the block is done.
    fn evaluate(&mut self, code: &[Atom]) -> error::Result<()>;

    /// Tokenize, classify and evaluate one line of source text.  Errors raised along the way are
    /// tagged with the given location.
    fn process_line(&mut self, location: SourceLocation, line: &str) -> error::Result<()>;

    /// Find a script file and evaluate it line by line, echoing each line to the output.
    fn process_source_file(&mut self, path: &str) -> error::Result<()>;
}

/// Simplify registering a native word with the interpreter.
///
/// Required parameters are the interpreter instance to register with, the name of the word and the
/// word function handler to execute for the word.
#[macro_export]
macro_rules! add_native_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr
    ) => {{
        use std::rc::Rc;

        $interpreter.add_word($name, Rc::new($function));
    }};
}

/// Trait for managing the words known to the interpreter.
pub trait WordManagement {
    /// Bind a native word in the dictionary.
    fn add_word(&mut self, name: &str, handler: Rc<WordHandler>);

    /// Bind a user defined word in the dictionary, replacing any previous binding.
    fn define_word(&mut self, name: Symbol, body: DefinitionBody);

    /// The word dictionary.
    fn dictionary(&self) -> &Dictionary;

    /// The interpreter's reserved symbols.
    fn reserved(&self) -> &ReservedSymbols;
}

/// Core interpreter trait.
///
/// This trait brings together the stack, code and word management traits, and adds the
/// interpreter's connections to the outside world: the script search paths, the line source and
/// the output sink.
pub trait Interpreter: InterpreterStack + CodeManagement + WordManagement {
    /// Add a new path to the search path list.  This path will be checked to make sure that it
    /// exists.
    fn add_search_path(&mut self, path: &str) -> error::Result<()>;

    /// Add the parent directory for a file to the search paths.  This way if a script loads other
    /// scripts from it's own directory, they'll be found.
    fn add_search_path_for_file(&mut self, file_path: &str) -> error::Result<()>;

    /// Drop the last added path from the search path list.  It is in this way, the search path list
    /// acts like a stack.
    fn drop_search_path(&mut self) -> error::Result<()>;

    /// Return a list of paths that the interpreter will search when finding files.
    fn search_paths(&self) -> &Vec<String>;

    /// Find a file in the current list of search paths.  If the file is found return the fully
    /// qualified path to the file.
    fn find_file(&self, path: &str) -> error::Result<String>;

    /// If set, the line currently being evaluated.
    fn current_location(&self) -> &Option<SourceLocation>;

    /// Where the diagnostic words write their output.
    fn output(&mut self) -> &mut dyn Write;

    /// Read the next line from the interpreter's line source.  None means the input is exhausted.
    fn read_line(&mut self) -> error::Result<Option<String>>;
}
