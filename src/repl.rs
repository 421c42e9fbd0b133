use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{eval, interpreter::environment::Environment, parse};

/// Printed before reading each line.
pub const PROMPT: &str = ">> ";

/// Runs the loop until `input` is exhausted.
///
/// Lines are read as bytes; invalid UTF-8 is replaced rather than ending the
/// session. Each line is parsed on its own. If it has syntax errors they are written
/// one per line, indented by a tab, and nothing is evaluated. Otherwise the
/// line is evaluated in an environment shared by the whole session and its
/// value is written.
///
/// # Errors
/// Fails only if reading `input` or writing `output` fails.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// let mut output = Vec::new();
/// quill::repl::start(Cursor::new("let a = 2;\na * 21\n"), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), ">> 2\n>> 42\n>> ");
/// ```
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let env = Environment::new();
    let mut buffer = Vec::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buffer);
        let (program, errors) = parse(&line);
        if !errors.is_empty() {
            debug!(count = errors.len(), "line rejected");
            for error in &errors {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        writeln!(output, "{}", eval(&program, &env))?;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    fn run(session: &str) -> String {
        let mut output = Vec::new();
        start(Cursor::new(session), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn bindings_persist_between_lines() {
        let output = run("let add = fn(a, b) { a + b };\nadd(2, 3)\n");

        assert_eq!(output, ">> fn(a, b) { (a + b) }\n>> 5\n>> ");
    }

    #[test]
    fn syntax_errors_are_tab_indented_and_skip_evaluation() {
        let output = run("let x 5;\nx\n");

        assert_eq!(output,
                   ">> \tline 1: expected next token to be =, got INT instead\n>> ERROR: identifier \
                    not found: x\n>> ");
    }

    #[test]
    fn runtime_errors_are_printed_as_values() {
        assert_eq!(run("1 / 0\n"), ">> ERROR: division by zero\n>> ");
    }

    #[test]
    fn invalid_utf8_does_not_end_the_session() {
        let mut output = Vec::new();
        start(Cursor::new(b"\xff\n1 + 1\n".as_slice()), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(),
                   ">> \tline 1: no prefix parse function for ILLEGAL found\n>> 2\n>> ");
    }

    #[test]
    fn empty_input_just_prompts() {
        assert_eq!(run(""), ">> ");
    }
}
