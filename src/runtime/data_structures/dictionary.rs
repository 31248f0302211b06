use crate::runtime::data_structures::{atom::Atom, symbol::Symbol};
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    sync::Arc,
};

/// The word dictionary used by the interpreter.  Each symbol is bound to at most one atom, either a
/// Primitive or a Definition.  The dictionary owns what it binds, rebinding a word drops whatever
/// the word was bound to before.
pub struct Dictionary {
    words: HashMap<Symbol, Atom>,
}

/// Print the names of all the words in the dictionary in sorted order, each followed by a space.
impl Display for Dictionary {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for name in self.names() {
            write!(formatter, "{} ", name)?;
        }

        writeln!(formatter)
    }
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Bind a word, replacing any existing binding.  The old binding, if there was one, is handed
    /// back.
    pub fn insert(&mut self, name: Symbol, binding: Atom) -> Option<Atom> {
        self.words.insert(name, binding)
    }

    /// Look up the binding for a word.
    pub fn try_get(&self, name: Symbol) -> Option<&Atom> {
        self.words.get(&name)
    }

    pub fn contains(&self, name: Symbol) -> bool {
        self.words.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The names of all the bound words, sorted by their text.
    pub fn names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<Arc<str>> = self.words.keys().map(|symbol| symbol.name()).collect();

        names.sort();
        names
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_replaces_the_old_word() {
        let mut dictionary = Dictionary::new();
        let name = Symbol::intern("dictionary-test-word");

        let first = Atom::Definition(vec![Atom::Number(1.0)]);
        let second = Atom::Definition(vec![Atom::Number(2.0)]);

        assert!(dictionary.insert(name, first.clone()).is_none());
        assert_eq!(dictionary.insert(name, second.clone()), Some(first));

        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.try_get(name), Some(&second));
    }

    #[test]
    fn lookup_is_by_identity() {
        let mut dictionary = Dictionary::new();

        dictionary.insert(Symbol::intern("dictionary-alpha"), Atom::Number(1.0));

        assert!(dictionary.contains(Symbol::intern("dictionary-alpha")));
        assert!(!dictionary.contains(Symbol::intern("dictionary-beta")));
    }

    #[test]
    fn listing_is_sorted() {
        let mut dictionary = Dictionary::new();

        dictionary.insert(Symbol::intern("listing-b"), Atom::Number(1.0));
        dictionary.insert(Symbol::intern("listing-a"), Atom::Number(2.0));

        assert_eq!(dictionary.to_string(), "listing-a listing-b \n");
    }
}
