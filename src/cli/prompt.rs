use std::io::{self, BufRead, Write};

/// Asks a yes/no question and reads one line of answer.
///
/// Only `y` or `Y` (surrounding whitespace ignored) counts as yes. Anything
/// else, an empty line and end of input included, is a no.
///
/// # Errors
/// Propagates failures writing the question or reading the answer.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    write!(output, "{} (y/n): ", question)?;
    output.flush()?; // Make sure the prompt is displayed before blocking on input.

    let mut answer = String::new();
    input.read_line(&mut answer)?; // Zero bytes read (EOF) leaves `answer` empty.
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
