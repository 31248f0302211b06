use std::{iter::Peekable, str::Chars};

/// A list of raw tokens found in a line of source text.  Classification into numbers, strings and
/// symbols happens later, see `lang::parsing`.
pub type TokenList = Vec<String>;

/// The character stream the tokenizer walks over.
type CharStream<'a> = Peekable<Chars<'a>>;

/// Check if the given character is considered whitespace.
fn is_whitespace(next: &char) -> bool {
    *next == ' ' || *next == '\t' || *next == '\r' || *next == '\n'
}

/// Skip over whitespace in the text.  Stopping only at either the end of the line or the next
/// non-whitespace character.
fn skip_whitespace(chars: &mut CharStream) {
    while let Some(next) = chars.peek() {
        if !is_whitespace(next) {
            break;
        }

        let _ = chars.next();
    }
}

/// Consume a quoted span.  The opening quote has already been eaten, everything up to and including
/// the closing quote is appended to the token text.  Whitespace inside the span is kept.
///
/// Running out of text before the closing quote simply ends the span.
fn process_quoted_span(chars: &mut CharStream, text: &mut String) {
    for next in chars.by_ref() {
        text.push(next);

        if next == '"' {
            break;
        }
    }
}

/// Pull the text of one token out of the stream.  A token ends at whitespace, or right after the
/// closing quote of a quoted span.
fn process_token(chars: &mut CharStream) -> String {
    let mut text = String::new();

    while let Some(&next) = chars.peek() {
        if is_whitespace(&next) {
            break;
        }

        let _ = chars.next();

        if next == '"' {
            process_quoted_span(chars, &mut text);
            break;
        }

        text.push(next);
    }

    text
}

/// Split a line of source text into raw tokens.
///
/// Tokens are separated by spaces, tabs, carriage returns and new lines.  A double quote starts a
/// quoted span that runs up to and including the next double quote, so a string literal such as
/// `"hello world"` comes back as the single token `hello world"`.  The opening quote is dropped,
/// only the closing one is left for the classifier to find.
pub fn tokenize(line: &str) -> TokenList {
    let mut chars = line.chars().peekable();
    let mut token_list = TokenList::new();

    while let Some(next) = chars.peek() {
        if is_whitespace(next) {
            skip_whitespace(&mut chars);
            continue;
        }

        let text = process_token(&mut chars);

        // A lone quote at the very end of the line leaves nothing behind.
        if !text.is_empty() {
            token_list.push(text);
        }
    }

    token_list
}
