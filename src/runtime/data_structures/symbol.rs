use lazy_static::lazy_static;
use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    sync::{Arc, Mutex, MutexGuard},
};

/// The identity of an interned word name.  Two symbols are the same word if and only if their
/// handles are equal, the text is never compared after interning.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

/// A table of interned names.  Each distinct name gets exactly one Symbol for as long as the table
/// lives.  Names are never removed.
pub struct SymbolTable {
    ids: HashMap<Arc<str>, Symbol>,
    names: Vec<Arc<str>>,
}

impl SymbolTable {
    /// Create a new empty table.
    pub fn new() -> SymbolTable {
        SymbolTable {
            ids: HashMap::new(),
            names: Vec::new(),
        }
    }

    /// Get the symbol for the given text, creating it if this is the first time we've seen it.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(found) = self.ids.get(text) {
            return *found;
        }

        let symbol = Symbol(self.names.len() as u32);
        let name: Arc<str> = Arc::from(text);

        self.names.push(name.clone());
        let _ = self.ids.insert(name, symbol);

        symbol
    }

    /// The text a symbol was interned from, if the symbol belongs to this table.
    pub fn name(&self, symbol: Symbol) -> Option<&Arc<str>> {
        self.names.get(symbol.0 as usize)
    }

    /// How many distinct names have been interned.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    // The process wide table.  It lives until the process exits so every symbol handed out stays
    // valid for any definition that refers to it.
    static ref SYMBOL_TABLE: Mutex<SymbolTable> = Mutex::new(SymbolTable::new());
}

/// Lock the global table.  A panic while holding the lock can't leave the table half updated, so a
/// poisoned lock is still safe to use.
fn global_table() -> MutexGuard<'static, SymbolTable> {
    SYMBOL_TABLE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Symbol {
    /// Intern the text in the process wide symbol table.
    pub fn intern(text: &str) -> Symbol {
        global_table().intern(text)
    }

    /// The name this symbol was interned from.
    pub fn name(&self) -> Arc<str> {
        match global_table().name(*self) {
            Some(name) => name.clone(),
            None => Arc::from(""),
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}#{}", self.name(), self.0)
    }
}
