
use std::{ error::Error,
           process::Termination,
           fmt::{ self, Debug, Display, Formatter }, process::ExitCode };
use crate::lang::source_location::SourceLocation;

use super::interpreter::Interpreter;



pub type Result<T> = std::result::Result<T, ScriptError>;



/// The different ways evaluation can fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind
{
    /// A symbol was evaluated that has no binding in the dictionary.
    #[error("invalid identifier {0}")]
    InvalidIdentifier(String),

    /// A definition, or a loop body, could not be parsed out of the pending instructions.
    #[error("malformed word {0}")]
    MalformedDefinition(String),

    /// A word needed more values than the stack holds.
    #[error("stack underflow: {0}")]
    StackUnderflow(String),

    /// A script to load could not be opened.
    #[error("file not found {0}")]
    FileNotFound(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(String)
}



/// Any error that occurs during the evaluation of a script.
#[derive(Clone)]
pub struct ScriptError
{
    /// The line being evaluated when the error occurred, if available.
    location: Option<SourceLocation>,

    /// What went wrong.
    kind: ErrorKind
}


impl Error for ScriptError
{
}


/// When returned from main, convert the error result to an operating system exit code.
impl Termination for ScriptError
{
    /// Because this type represents an error, the exit code is always FAILURE.
    fn report(self) -> ExitCode
    {
        eprintln!("Error: {}", self);
        ExitCode::FAILURE
    }
}


impl Display for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match &self.location
        {
            Some(location) => write!(f, "{}: {}", location, self.kind),
            None => write!(f, "{}", self.kind)
        }
    }
}


impl Debug for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}


impl ScriptError
{
    /// Create a new ScriptError.
    pub fn new(location: Option<SourceLocation>, kind: ErrorKind) -> ScriptError
    {
        ScriptError
            {
                location,
                kind
            }
    }

    /// Create a new Script Error and wrap it in a Result::Err.
    pub fn new_as_result<T>(location: Option<SourceLocation>, kind: ErrorKind) -> Result<T>
    {
        Err(ScriptError::new(location, kind))
    }

    /// If available, the line being evaluated when the error occurred.
    pub fn location(&self) -> &Option<SourceLocation>
    {
        &self.location
    }

    /// What went wrong.
    pub fn kind(&self) -> &ErrorKind
    {
        &self.kind
    }
}


/// Allow for the conversion of a std::io::Error into a ScriptError.
impl From<std::io::Error> for ScriptError
{
    fn from(error: std::io::Error) -> ScriptError
    {
        ScriptError::new(None, ErrorKind::Io(error.to_string()))
    }
}



/// A convenience function for creating a ScriptError and wrapping in in a Result::Err using the
/// interpreter's current location.
pub fn script_error<T>(interpreter: &dyn Interpreter, kind: ErrorKind) -> Result<T>
{
    let location = interpreter.current_location().clone();

    ScriptError::new_as_result(location, kind)
}
