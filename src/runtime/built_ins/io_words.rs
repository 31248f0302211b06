use std::io::{ stdin, BufRead };
use crate::{ add_native_word,
             lang::source_location::SourceLocation,
             runtime::{ error,
                        interpreter::Interpreter } };



/// Somewhere lines of source text come from.
pub trait LineSource
{
    /// Get the next line without its line ending.  None means the input is exhausted.
    fn next_line(&mut self) -> error::Result<Option<String>>;
}


/// Read one line of raw bytes and strip its line ending.  Bytes that aren't valid UTF-8 are
/// replaced rather than failing the read, so a stray byte costs one bad token, not the session.
fn read_lossy_line<R: BufRead + ?Sized>(reader: &mut R) -> error::Result<Option<String>>
{
    let mut bytes = Vec::new();

    if reader.read_until(b'\n', &mut bytes)? == 0
    {
        return Ok(None);
    }

    while let Some(b'\n' | b'\r') = bytes.last()
    {
        let _ = bytes.pop();
    }

    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}


/// Lines read from any buffered reader, such as a script file.
pub struct ReaderSource<R: BufRead>
{
    reader: R
}


impl<R: BufRead> ReaderSource<R>
{
    pub fn new(reader: R) -> ReaderSource<R>
    {
        ReaderSource { reader }
    }
}


impl<R: BufRead> LineSource for ReaderSource<R>
{
    fn next_line(&mut self) -> error::Result<Option<String>>
    {
        read_lossy_line(&mut self.reader)
    }
}


/// Lines typed at the terminal.
pub struct StdinSource;


impl StdinSource
{
    pub fn new() -> StdinSource
    {
        StdinSource
    }
}


impl Default for StdinSource
{
    fn default() -> Self
    {
        Self::new()
    }
}


impl LineSource for StdinSource
{
    fn next_line(&mut self) -> error::Result<Option<String>>
    {
        read_lossy_line(&mut stdin().lock())
    }
}


#[cfg(unix)]
/// Is standard input attached to a terminal?  Used to decide if the REPL shows a prompt.
pub fn stdin_is_terminal() -> bool
{
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

#[cfg(not(unix))]
/// Is standard input attached to a terminal?  Used to decide if the REPL shows a prompt.
pub fn stdin_is_terminal() -> bool
{
    true
}



/// Read the user's input until it runs out.  Errors are reported to the output and the REPL keeps
/// going with the next line, whatever was on the stacks when the error happened stays there.
pub fn repl(interpreter: &mut dyn Interpreter, show_prompt: bool) -> error::Result<()>
{
    let mut line_number = 0;

    loop
    {
        if show_prompt
        {
            write!(interpreter.output(), ">> ")?;
            interpreter.output().flush()?;
        }

        let line =
            match interpreter.read_line()?
            {
                Some(line) => line,
                None       => break
            };

        line_number += 1;

        let location = SourceLocation::new("<repl>", line_number);

        if let Err(error) = interpreter.process_line(location, &line)
        {
            writeln!(interpreter.output(), "Error: {}", error)?;
        }

        interpreter.output().flush()?;
    }

    if show_prompt
    {
        writeln!(interpreter.output())?;
    }

    Ok(())
}



/// Read a line from the interpreter's line source and push it onto the string stack.  At the end
/// of the input an empty string is pushed.
///
/// Signature: ` -- ` strings: ` -- line`
fn word_accept(interpreter: &mut dyn Interpreter) -> error::Result<()>
{
    let line = interpreter.read_line()?.unwrap_or_default();

    interpreter.push_string(line);
    Ok(())
}

/// Load and run a script.  The file name is taken from the string stack.
///
/// Signature: ` -- ` strings: `path -- `
fn word_load(interpreter: &mut dyn Interpreter) -> error::Result<()>
{
    let path = interpreter.pop_string()?;
    interpreter.process_source_file(&path)
}



/// Register the I/O words with the given interpreter.
pub fn register_io_words(interpreter: &mut dyn Interpreter)
{
    add_native_word!(interpreter, "accept", word_accept);
    add_native_word!(interpreter, "load", word_load);
}


#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn reader_source_strips_line_endings()
    {
        let mut source = ReaderSource::new(&b"first\r\nsecond\n\nlast"[..]);

        assert_eq!(source.next_line().unwrap(), Some("first".to_string()));
        assert_eq!(source.next_line().unwrap(), Some("second".to_string()));
        assert_eq!(source.next_line().unwrap(), Some(String::new()));
        assert_eq!(source.next_line().unwrap(), Some("last".to_string()));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn reader_source_replaces_invalid_bytes()
    {
        let mut source = ReaderSource::new(&b"caf\xe9 1\n\xff\xfe\r\nok\n"[..]);

        assert_eq!(source.next_line().unwrap(), Some("caf\u{fffd} 1".to_string()));
        assert_eq!(source.next_line().unwrap(), Some("\u{fffd}\u{fffd}".to_string()));
        assert_eq!(source.next_line().unwrap(), Some("ok".to_string()));
        assert_eq!(source.next_line().unwrap(), None);
    }
}
