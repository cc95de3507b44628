//! One-shot read of the hex byte line from standard input.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Result};

/// Prompt shown before reading.
pub const PROMPT: &str = "Enter space-separated hex bytes (e.g., 4a 21 0f): ";

/// Prints the prompt to `out` and reads one line from `input`.
///
/// The trailing line break is stripped. Bytes that are not UTF-8 become
/// U+FFFD and later parse as zero-valued tokens. An empty line is valid input;
/// end of input before any line, or a read error, is an error.
pub fn read_hex_line<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<String> {
    // The prompt is cosmetic, a closed stdout must not stop the viewer.
    let _ = out.write_all(PROMPT.as_bytes());
    let _ = out.flush();

    let mut raw = Vec::new();
    let read = input
        .read_until(b'\n', &mut raw)
        .map_err(|e| anyhow!("Input error: {}", e))?;
    if read == 0 {
        bail!("Input error: no line available on standard input");
    }

    let mut line = String::from_utf8_lossy(&raw).into_owned();
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Reads the line from the process's standard input.
pub fn read_stdin_line() -> Result<String> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    read_hex_line(&mut stdin.lock(), &mut stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tetsuo::ByteBuffer;

    #[test]
    fn test_reads_first_line_and_prompts() {
        let mut input = Cursor::new("4a 21 0f\nignored\n");
        let mut out = Vec::new();
        let line = read_hex_line(&mut input, &mut out).unwrap();
        assert_eq!(line, "4a 21 0f");
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn test_strips_crlf() {
        let mut input = Cursor::new("ff 00\r\n");
        let line = read_hex_line(&mut input, &mut Vec::new()).unwrap();
        assert_eq!(line, "ff 00");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = Cursor::new("01 02");
        let line = read_hex_line(&mut input, &mut Vec::new()).unwrap();
        assert_eq!(line, "01 02");
    }

    #[test]
    fn test_empty_line_is_not_an_error() {
        let mut input = Cursor::new("\n");
        let line = read_hex_line(&mut input, &mut Vec::new()).unwrap();
        assert!(line.is_empty());
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut input = Cursor::new("");
        let err = read_hex_line(&mut input, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("Input error"));
    }

    #[test]
    fn test_non_utf8_bytes_become_zero_tokens() {
        let mut input = Cursor::new(vec![b'4', b'a', b' ', 0xe9, b'\n']);
        let line = read_hex_line(&mut input, &mut Vec::new()).unwrap();
        assert_eq!(ByteBuffer::parse(&line).as_slice(), &[0x4a, 0x00]);

        let mut input = Cursor::new(b"4a 21 0f \xe9\n".to_vec());
        let line = read_hex_line(&mut input, &mut Vec::new()).unwrap();
        assert_eq!(ByteBuffer::parse(&line).as_slice(), &[0x4a, 0x21, 0x0f, 0x00]);
    }
}
