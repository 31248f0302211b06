use crate::runtime::{
    data_structures::symbol::Symbol,
    error,
    interpreter::{Interpreter, WordHandler},
};
use std::{
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};

/// A native word written in Rust.  Once registered the handler never changes, so clones of the
/// same primitive all share the one handler.
#[derive(Clone)]
pub struct Primitive {
    /// The name the primitive was registered under.
    name: Symbol,

    /// The function called when the primitive is executed.
    handler: Rc<WordHandler>,
}

impl Primitive {
    pub fn new(name: Symbol, handler: Rc<WordHandler>) -> Primitive {
        Primitive { name, handler }
    }

    pub fn name(&self) -> Symbol {
        self.name
    }

    /// Get a handle to the handler that outlives any borrow of the dictionary.
    pub fn handler(&self) -> Rc<WordHandler> {
        self.handler.clone()
    }

    /// Run the primitive against the interpreter.
    pub fn call(&self, interpreter: &mut dyn Interpreter) -> error::Result<()> {
        (*self.handler)(interpreter)
    }
}

/// Primitives are the same primitive only if they share a handler.
impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Rc::ptr_eq(&self.handler, &other.handler)
    }
}

/// The body of a user defined word.
pub type DefinitionBody = Vec<Atom>;

/// The single unit the evaluator works with.  Source lines become Numbers and Symbols, the
/// dictionary binds Symbols to Definitions and Primitives.
#[derive(Clone, PartialEq)]
pub enum Atom {
    /// A numeric literal, pushed onto the operand stack when evaluated.
    Number(f64),

    /// A word reference, looked up in the dictionary when evaluated.
    Symbol(Symbol),

    /// A user defined word, the atoms are spliced into the pending sequence when called.
    Definition(DefinitionBody),

    /// A native word.
    Primitive(Primitive),
}

impl Atom {
    /// Check if the atom is the given symbol.  Used for finding terminators by identity.
    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        matches!(self, Atom::Symbol(found) if *found == symbol)
    }
}

/// Print the atom the way it would be written in source code.
impl Display for Atom {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Atom::Number(value) => write!(f, "{}", value),
            Atom::Symbol(symbol) => write!(f, "{}", symbol),

            Atom::Definition(body) => {
                write!(f, "[")?;

                for atom in body.iter() {
                    write!(f, " {}", atom)?;
                }

                write!(f, " ]")
            }

            Atom::Primitive(primitive) => write!(f, "<primitive {}>", primitive.name()),
        }
    }
}

impl Debug for Atom {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Atom::Number(value) => write!(f, "{} n", value),
            Atom::Symbol(symbol) => write!(f, "{:?}", symbol),
            _ => write!(f, "{}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_print_as_source() {
        let body = vec![Atom::Number(2.5), Atom::Symbol(Symbol::intern("drop"))];

        assert_eq!(Atom::Number(-3.0).to_string(), "-3");
        assert_eq!(Atom::Definition(body).to_string(), "[ 2.5 drop ]");
    }

    fn word_nothing(_interpreter: &mut dyn Interpreter) -> error::Result<()> {
        Ok(())
    }

    #[test]
    fn primitives_print_their_name() {
        let handler: Rc<WordHandler> = Rc::new(word_nothing);
        let primitive = Primitive::new(Symbol::intern("depth"), handler);

        assert_eq!(Atom::Primitive(primitive).to_string(), "<primitive depth>");
    }
}
