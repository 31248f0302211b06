
use std::fmt::{ self,
                Display,
                Formatter };



/// Where a line of source text came from.  Errors raised while a line is being evaluated carry the
/// location of that line so the user can find it again.
///
/// This is a read-only structure.  Use the field accessor methods to get the values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation
{
    /// Either the path to the file or a description of the source.  Lines typed into the REPL use
    /// a tag of "\<repl\>".
    path: String,

    /// The 1 based line number within that source.
    line: usize
}


/// Used for error reporting to show where in the source an error originated.
impl Display for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result
    {
        write!(formatter, "{} ({})", self.path, self.line)
    }
}


impl SourceLocation
{
    /// Create a new SourceLocation for the given source and line.
    pub fn new(path: &str, line: usize) -> SourceLocation
    {
        SourceLocation { path: path.to_owned(), line }
    }

    /// The path to the source or a meaningful description of it.
    pub fn path(&self) -> &String
    {
        &self.path
    }

    /// The 1 based line number.
    pub fn line(&self) -> usize
    {
        self.line
    }
}
