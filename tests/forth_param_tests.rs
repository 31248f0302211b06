// Parameterized stack effect tests using test-case


use nforth::lang::source_location::SourceLocation;
use nforth::runtime::built_ins::base_words::register_base_words;
use nforth::runtime::built_ins::io_words::{register_io_words, ReaderSource};
use nforth::runtime::error::{ErrorKind, Result};
use nforth::runtime::interpreter::nforth_interpreter::NforthInterpreter;
use nforth::runtime::interpreter::{CodeManagement, InterpreterStack};
use test_case::test_case;

fn eval_and_stack(line: &str, init_stack: &[f64]) -> Result<Vec<f64>> {
    let input = ReaderSource::new(&b""[..]);
    let mut interp = NforthInterpreter::with_io(Box::new(input), Box::new(Vec::<u8>::new()));
    register_base_words(&mut interp);
    register_io_words(&mut interp);
    for &v in init_stack {
        interp.push(v);
    }
    interp.process_line(SourceLocation::new("<test>", 1), line)?;
    Ok(interp.stack().clone())
}

fn eval_error(line: &str, init_stack: &[f64]) -> ErrorKind {
    match eval_and_stack(line, init_stack) {
        Ok(stack) => panic!("'{}' should have failed, left {:?}", line, stack),
        Err(error) => error.kind().clone(),
    }
}


// --- Literals ---
#[test_case("0", &[], &[0.0]; "zero")]
#[test_case("42", &[], &[42.0]; "number")]
#[test_case("-5 2.5e1 .5", &[], &[-5.0, 25.0, 0.5]; "number forms")]
#[test_case("+7 1E2", &[], &[7.0, 100.0]; "signs and exponents")]
#[test_case("\"abc\" 1", &[], &[1.0]; "strings stay off the operand stack")]
// --- Stack primitives ---
#[test_case("drop", &[1.0, 2.0], &[1.0]; "drop")]
#[test_case("0 pick", &[10.0, 20.0, 30.0], &[10.0, 20.0, 30.0, 30.0]; "pick top")]
#[test_case("1 pick", &[10.0, 20.0, 30.0], &[10.0, 20.0, 30.0, 20.0]; "pick second")]
#[test_case("2 pick", &[10.0, 20.0, 30.0], &[10.0, 20.0, 30.0, 10.0]; "pick bottom")]
#[test_case("1.7 pick", &[10.0, 20.0, 30.0], &[10.0, 20.0, 30.0, 20.0]; "pick truncates index")]
#[test_case("0 roll", &[10.0, 20.0, 30.0], &[10.0, 20.0, 30.0]; "roll top is a no-op")]
#[test_case("1 roll", &[10.0, 20.0, 30.0], &[10.0, 30.0, 20.0]; "roll second")]
#[test_case("2 roll", &[10.0, 20.0, 30.0], &[20.0, 30.0, 10.0]; "roll bottom")]
#[test_case("depth", &[], &[0.0]; "depth of empty")]
#[test_case("depth", &[1.0, 2.0], &[1.0, 2.0, 2.0]; "depth")]
// --- Definitions ---
#[test_case(": dup 0 pick ; dup", &[7.0], &[7.0, 7.0]; "dup")]
#[test_case(": over 1 pick ; over", &[1.0, 2.0], &[1.0, 2.0, 1.0]; "over")]
#[test_case(": swap 1 roll ; swap", &[1.0, 2.0], &[2.0, 1.0]; "swap")]
#[test_case(": rot 2 roll ; rot", &[1.0, 2.0, 3.0], &[2.0, 3.0, 1.0]; "rot")]
#[test_case(": ten 10 ; ten ten", &[], &[10.0, 10.0]; "number body")]
#[test_case(": sq 0 pick ; : two sq sq ; two", &[3.0], &[3.0, 3.0, 3.0]; "nested words")]
#[test_case(": a 1 ; : a 2 ; a", &[], &[2.0]; "redefinition replaces")]
#[test_case(": a b ; : b 5 ; a", &[], &[5.0]; "late binding")]
#[test_case(": x 1 ;", &[], &[]; "definition alone does nothing")]
// --- Comments ---
#[test_case("1 ( 2 3 ) 4", &[], &[1.0, 4.0]; "comment")]
#[test_case("1 ( 2 3", &[], &[1.0]; "unclosed comment")]
#[test_case("1 \\ 2 3", &[], &[1.0]; "line comment")]
#[test_case(": c ( ignored ) 9 ; c", &[], &[9.0]; "comment inside definition")]
#[test_case("1 ( ( 2 ) 3", &[], &[1.0, 3.0]; "inner open paren is swallowed")]
// --- Loops ---
#[test_case("0 while 99 ;", &[], &[]; "while false skips body")]
#[test_case("1 while drop ;", &[0.0, 5.0, 6.0, 7.0], &[]; "while drops to zero")]
#[test_case("1 while ;", &[], &[]; "while stops on empty stack")]
#[test_case("1 while 0 ; 8", &[], &[8.0]; "while runs once")]
fn stack_effect(line: &str, init_stack: &[f64], expected: &[f64]) {
    let result = eval_and_stack(line, init_stack).unwrap();
    assert_eq!(result, expected.to_vec());
}


#[test_case("drop", &[] => matches ErrorKind::StackUnderflow(_); "drop on empty")]
#[test_case("pick", &[] => matches ErrorKind::StackUnderflow(_); "pick without index")]
#[test_case("3 pick", &[1.0, 2.0, 3.0] => matches ErrorKind::StackUnderflow(_); "pick past bottom")]
#[test_case("-1 pick", &[1.0] => matches ErrorKind::StackUnderflow(_); "negative pick")]
#[test_case("5 roll", &[1.0] => matches ErrorKind::StackUnderflow(_); "roll past bottom")]
#[test_case("load", &[] => matches ErrorKind::StackUnderflow(_); "load without a path")]
#[test_case("oops", &[] => ErrorKind::InvalidIdentifier("oops".to_string()); "unbound word")]
#[test_case("1e400", &[] => ErrorKind::InvalidIdentifier("1e400".to_string()); "overflowing number")]
#[test_case(": x ;", &[] => ErrorKind::MalformedDefinition("x".to_string()); "empty body")]
#[test_case(": x 1", &[] => ErrorKind::MalformedDefinition("x".to_string()); "too short")]
#[test_case(": x 1 2", &[] => ErrorKind::MalformedDefinition("x".to_string()); "no terminator")]
#[test_case(":", &[] => ErrorKind::MalformedDefinition(":".to_string()); "no name")]
#[test_case(": 5 1 ;", &[] => ErrorKind::MalformedDefinition("5".to_string()); "number as name")]
#[test_case("1 while drop", &[] => ErrorKind::MalformedDefinition("while".to_string()); "unterminated while")]
#[test_case("1 ( 2 ( 3 ) 4 ) 5", &[] => ErrorKind::InvalidIdentifier(")".to_string()); "comments do not nest")]
fn error_kind(line: &str, init_stack: &[f64]) -> ErrorKind {
    eval_error(line, init_stack)
}
