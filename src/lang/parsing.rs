use crate::{
    lang::tokenizing::tokenize,
    runtime::{
        data_structures::{atom::Atom, symbol::Symbol},
        interpreter::{PendingList, StringStack},
    },
};

/// Does it look like we're dealing with a numeric literal?  Only digits, signs, decimal points and
/// exponent markers can show up in one.  This keeps words like `inf` and `nan` from being read as
/// numbers.
fn is_number(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '-' || c == '+' || c == 'e' || c == 'E')
}

/// Attempt to convert the whole of the text into a number.  Partial matches such as `1a` or a
/// lone sign are rejected, as are values too large to represent.
pub fn to_number(text: &str) -> Option<f64> {
    if !is_number(text) {
        return None;
    }

    let value: f64 = text.parse().ok()?;

    if value.is_finite() { Some(value) } else { None }
}

/// If the token is a string literal, get the text of the string.  A string literal token ends with
/// the closing quote and has at least one other character in front of it.
pub fn to_string_literal(text: &str) -> Option<&str> {
    if text.chars().count() < 2 {
        return None;
    }

    text.strip_suffix('"')
}

/// Classify the tokens of a line.  Numbers and symbols are appended to the pending sequence, string
/// literals go straight onto the string stack.  Nothing is evaluated here.
pub fn parse_line(line: &str, pending: &mut PendingList, strings: &mut StringStack) {
    for token in tokenize(line) {
        if let Some(value) = to_number(&token) {
            pending.push_back(Atom::Number(value));
        } else if let Some(text) = to_string_literal(&token) {
            strings.push(text.to_string());
        } else {
            pending.push_back(Atom::Symbol(Symbol::intern(&token)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert!(to_number("3.14").is_some());
        assert_eq!(to_number("-2"), Some(-2.0));
        assert_eq!(to_number("1e10"), Some(1e10));
        assert_eq!(to_number("+5"), Some(5.0));
        assert_eq!(to_number(".5"), Some(0.5));
    }

    #[test]
    fn not_numbers() {
        assert_eq!(to_number("1a"), None);
        assert_eq!(to_number("+"), None);
        assert_eq!(to_number("-"), None);
        assert_eq!(to_number("."), None);
        assert_eq!(to_number("1e"), None);
        assert_eq!(to_number("inf"), None);
        assert_eq!(to_number("NaN"), None);
        assert_eq!(to_number("1e999"), None);
        assert_eq!(to_number(""), None);
    }

    #[test]
    fn string_literals() {
        assert_eq!(to_string_literal("hello\""), Some("hello"));
        assert_eq!(to_string_literal("a b\""), Some("a b"));
        assert_eq!(to_string_literal("\""), None);
        assert_eq!(to_string_literal("hello"), None);
    }

    #[test]
    fn line_is_classified() {
        let mut pending = PendingList::new();
        let mut strings = StringStack::new();

        parse_line(r#"1 "two words" three -4.5"#, &mut pending, &mut strings);

        let atoms: Vec<Atom> = pending.into_iter().collect();

        assert_eq!(
            atoms,
            vec![
                Atom::Number(1.0),
                Atom::Symbol(Symbol::intern("three")),
                Atom::Number(-4.5)
            ]
        );
        assert_eq!(strings, vec!["two words".to_string()]);
    }

    #[test]
    fn lone_quote_is_a_symbol() {
        let mut pending = PendingList::new();
        let mut strings = StringStack::new();

        parse_line(r#""""#, &mut pending, &mut strings);

        assert!(strings.is_empty());
        assert_eq!(pending.front(), Some(&Atom::Symbol(Symbol::intern("\""))));
    }
}
