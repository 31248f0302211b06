use std::{ fs::{ canonicalize, metadata, File },
           io::{ stdout, BufReader, Write },
           mem,
           path::{ Path,
                   PathBuf },
           rc::Rc };
use iceoryx2_bb_log::{ debug, trace };
use crate::{ lang::{ parsing::parse_line,
                     source_location::SourceLocation },
             runtime::{ built_ins::io_words::{ LineSource,
                                               ReaderSource,
                                               StdinSource },
                        data_structures::{ atom::{ Atom,
                                                   DefinitionBody,
                                                   Primitive },
                                           dictionary::Dictionary,
                                           symbol::Symbol },
                        error::{ self,
                                 script_error,
                                 ErrorKind },
                        interpreter::{ CodeManagement,
                                       Interpreter,
                                       InterpreterStack,
                                       PendingList,
                                       ReservedSymbols,
                                       StringStack,
                                       ValueStack,
                                       WordHandler,
                                       WordManagement } } };



/// The search paths used to find script files.
pub type SearchPaths = Vec<String>;



/// The core interpreter implementation.
pub struct NforthInterpreter
{
    /// The search paths used to find script files.
    search_paths: SearchPaths,

    /// The operand stack.
    stack: ValueStack,

    /// The string stack.
    strings: StringStack,

    /// The atoms waiting to be evaluated.
    pending: PendingList,


    /// The line currently being evaluated.
    current_location: Option<SourceLocation>,


    /// The dictionary of words known by the interpreter.
    dictionary: Dictionary,

    /// Symbols with special meaning, interned once up front.
    reserved: ReservedSymbols,


    /// Where `accept` and the REPL get their lines from.
    input: Box<dyn LineSource>,

    /// Where the diagnostic words write to.
    output: Box<dyn Write>
}


impl Interpreter for NforthInterpreter
{
    fn add_search_path(&mut self, path: &str) -> error::Result<()>
    {
        if let Err(err) = metadata(path)
        {
            return script_error(self, ErrorKind::FileNotFound(format!("{} ({})", path, err)));
        }

        self.search_paths.push(path.to_string());
        Ok(())
    }

    fn add_search_path_for_file(&mut self, file_path: &str) -> error::Result<()>
    {
        if let Some(parent) = Path::new(file_path).parent()
        {
            let parent_str = parent.to_string_lossy();
            self.add_search_path(&parent_str)?;
        }

        Ok(())
    }

    fn drop_search_path(&mut self) -> error::Result<()>
    {
        if self.search_paths.pop().is_none()
        {
            return script_error(self, ErrorKind::StackUnderflow("search path stack".to_string()));
        }

        Ok(())
    }

    fn search_paths(&self) -> &Vec<String>
    {
        &self.search_paths
    }

    fn find_file(&self, path: &str) -> error::Result<String>
    {
        let mut candidates = vec![ PathBuf::from(path) ];

        if Path::new(path).is_relative()
        {
            for directory in self.search_paths.iter().rev()
            {
                candidates.push(PathBuf::from(directory).join(path));
            }
        }

        for candidate in candidates
        {
            if candidate.is_file()
            {
                let canonical = canonicalize(candidate)?;
                return Ok(canonical.to_string_lossy().to_string());
            }
        }

        script_error(self, ErrorKind::FileNotFound(path.to_string()))
    }

    fn current_location(&self) -> &Option<SourceLocation>
    {
        &self.current_location
    }

    fn output(&mut self) -> &mut dyn Write
    {
        &mut *self.output
    }

    fn read_line(&mut self) -> error::Result<Option<String>>
    {
        self.input.next_line()
    }
}


impl InterpreterStack for NforthInterpreter
{
    fn stack(&self) -> &ValueStack
    {
        &self.stack
    }

    fn push(&mut self, value: f64)
    {
        self.stack.push(value);
    }

    fn pop(&mut self) -> error::Result<f64>
    {
        match self.stack.pop()
        {
            Some(value) => Ok(value),
            None        => script_error(self, ErrorKind::StackUnderflow("empty stack".to_string()))
        }
    }

    fn try_pop(&mut self) -> Option<f64>
    {
        self.stack.pop()
    }

    fn pop_as_index(&mut self) -> error::Result<usize>
    {
        let value = self.pop()?;

        if !value.is_finite() || value < 0.0
        {
            return script_error(self,
                                ErrorKind::StackUnderflow(format!("invalid stack index {}",
                                                                  value)));
        }

        let depth = self.stack.len();

        if value >= depth as f64
        {
            return script_error(self,
                                ErrorKind::StackUnderflow(format!("index {} out of range of stack \
                                                                   size {}",
                                                                  value,
                                                                  depth)));
        }

        Ok(value as usize)
    }

    fn pick(&mut self, index: usize) -> error::Result<f64>
    {
        let position = self.stack_position(index)?;
        Ok(self.stack[position])
    }

    fn roll(&mut self, index: usize) -> error::Result<()>
    {
        let position = self.stack_position(index)?;
        let value = self.stack.remove(position);

        self.stack.push(value);
        Ok(())
    }

    fn strings(&self) -> &StringStack
    {
        &self.strings
    }

    fn push_string(&mut self, text: String)
    {
        self.strings.push(text);
    }

    fn pop_string(&mut self) -> error::Result<String>
    {
        match self.strings.pop()
        {
            Some(text) => Ok(text),
            None       => script_error(self,
                                       ErrorKind::StackUnderflow("empty string stack".to_string()))
        }
    }
}


// Helper methods for the evaluator.
impl NforthInterpreter
{
    /// Convert an index counted down from the top of the stack into a position in the stack.
    fn stack_position(&self, index: usize) -> error::Result<usize>
    {
        let depth = self.stack.len();

        if index >= depth
        {
            return script_error(self,
                                ErrorKind::StackUnderflow(format!("index {} out of range of stack \
                                                                   size {}",
                                                                  index,
                                                                  depth)));
        }

        Ok(depth - 1 - index)
    }

    /// Put a definition's body in front of everything else that's pending, keeping the body's
    /// order.
    fn splice(pending: &mut PendingList, body: &[Atom])
    {
        for atom in body.iter().rev()
        {
            pending.push_front(atom.clone());
        }
    }

    /// Swap in a new pending sequence, drain it, then put back what was pending before.  The old
    /// sequence is restored even if the evaluation fails.
    fn execute(&mut self, code: PendingList) -> error::Result<()>
    {
        let outer = mem::replace(&mut self.pending, code);
        let result = self.run_pending();

        self.pending = outer;
        result
    }

    /// The evaluator loop.  Keep taking atoms off the front of the pending sequence until it's
    /// empty.
    ///
    /// Calling a user defined word doesn't recurse, the word's body is spliced into the front of the
    /// pending sequence and the loop just carries on.  So however deep a chain of word calls gets
    /// the native stack stays put.  Only primitives that evaluate code themselves, such as `while`,
    /// nest.
    fn run_pending(&mut self) -> error::Result<()>
    {
        while let Some(atom) = self.pending.pop_front()
        {
            trace!("__ {}", atom);

            match atom
            {
                Atom::Number(value) => self.stack.push(value),

                Atom::Symbol(symbol) =>
                    {
                        let handler =
                            match self.dictionary.try_get(symbol)
                            {
                                Some(Atom::Primitive(primitive)) => primitive.handler(),

                                Some(Atom::Definition(body)) =>
                                    {
                                        Self::splice(&mut self.pending, body);
                                        continue;
                                    },

                                Some(_) | None =>
                                    {
                                        let name = symbol.name().to_string();
                                        return script_error(self,
                                                            ErrorKind::InvalidIdentifier(name));
                                    }
                            };

                        (*handler)(self)?;
                    },

                Atom::Definition(body) => Self::splice(&mut self.pending, &body),

                Atom::Primitive(primitive) => primitive.call(self)?
            }
        }

        Ok(())
    }

    /// Feed every line from a line source through the interpreter, echoing each line first.
    fn process_source(&mut self, path: &str, source: &mut dyn LineSource) -> error::Result<()>
    {
        let mut line_number = 0;

        while let Some(line) = source.next_line()?
        {
            line_number += 1;

            writeln!(self.output, "{}", line)?;
            self.process_line(SourceLocation::new(path, line_number), &line)?;
        }

        Ok(())
    }
}


impl CodeManagement for NforthInterpreter
{
    fn pending(&self) -> &PendingList
    {
        &self.pending
    }

    fn next_atom(&mut self) -> Option<Atom>
    {
        self.pending.pop_front()
    }

    fn collect_until(&mut self, terminator: Symbol) -> Option<DefinitionBody>
    {
        let mut body = DefinitionBody::new();

        while let Some(atom) = self.pending.pop_front()
        {
            if atom.is_symbol(terminator)
            {
                return Some(body);
            }

            body.push(atom);
        }

        None
    }

    fn clear_pending(&mut self)
    {
        self.pending.clear();
    }

    fn evaluate(&mut self, code: &[Atom]) -> error::Result<()>
    {
        self.execute(code.iter().cloned().collect())
    }

    fn process_line(&mut self, location: SourceLocation, line: &str) -> error::Result<()>
    {
        let mut code = PendingList::new();
        parse_line(line, &mut code, &mut self.strings);

        let previous = self.current_location.replace(location);
        let result = self.execute(code);

        self.current_location = previous;
        result
    }

    fn process_source_file(&mut self, path: &str) -> error::Result<()>
    {
        let full_path = self.find_file(path)?;

        let file =
            match File::open(&full_path)
            {
                Ok(file) => file,
                Err(_)   => return script_error(self, ErrorKind::FileNotFound(path.to_string()))
            };

        debug!("loading {}", full_path);

        let mut source = ReaderSource::new(BufReader::new(file));

        self.add_search_path_for_file(&full_path)?;
        let result = self.process_source(&full_path, &mut source);
        self.drop_search_path()?;

        result
    }
}


impl WordManagement for NforthInterpreter
{
    fn add_word(&mut self, name: &str, handler: Rc<WordHandler>)
    {
        let symbol = Symbol::intern(name);
        let _ = self.dictionary.insert(symbol, Atom::Primitive(Primitive::new(symbol, handler)));
    }

    fn define_word(&mut self, name: Symbol, body: DefinitionBody)
    {
        debug!("defining {} with {} atoms", name, body.len());
        let _ = self.dictionary.insert(name, Atom::Definition(body));
    }

    fn dictionary(&self) -> &Dictionary
    {
        &self.dictionary
    }

    fn reserved(&self) -> &ReservedSymbols
    {
        &self.reserved
    }
}


impl NforthInterpreter
{
    /// Create an interpreter reading lines from standard input and writing to standard output.
    pub fn new() -> NforthInterpreter
    {
        NforthInterpreter::with_io(Box::new(StdinSource::new()), Box::new(stdout()))
    }

    /// Create an interpreter with the given line source and output sink.
    pub fn with_io(input: Box<dyn LineSource>, output: Box<dyn Write>) -> NforthInterpreter
    {
        NforthInterpreter
            {
                search_paths: Vec::new(),

                stack: Vec::with_capacity(20),
                strings: Vec::new(),
                pending: PendingList::with_capacity(40),

                current_location: None,

                dictionary: Dictionary::new(),
                reserved: ReservedSymbols::new(),

                input,
                output
            }
    }
}


impl Default for NforthInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
