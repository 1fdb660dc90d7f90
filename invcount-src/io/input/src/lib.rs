//! Reading a sequence of non-negative integers from one line of text.
//!
//! Integers are written in decimal and separated by spaces (or tabs). The
//! sequence ends at the first line break or at the end of the input.
//!
//! # Examples
//! ```
//! use input::{parse_sequence, read_nonempty_sequence, InputError};
//!
//! assert_eq!(parse_sequence("2 4 1 3 5 \n").unwrap(), [2, 4, 1, 3, 5]);
//! assert_eq!(parse_sequence("1 2\n3 4").unwrap(), [1, 2]);
//!
//! let e = read_nonempty_sequence("\n".as_bytes()).unwrap_err();
//! assert!(matches!(e, InputError::Empty));
//! ```

use std::io::BufRead;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid character '{ch}' found at index {index} in input stream.")]
    InvalidCharacter { ch: char, index: usize },
    #[error("Integer starting at index {index} is too large.")]
    Overflow { index: usize },
    #[error("Sequence of integers not received.")]
    Empty,
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads the first line of `source` and parses it as with
/// [`parse_sequence`].
pub fn read_sequence<R: BufRead>(mut source: R) -> Result<Vec<i64>, InputError> {
    let mut line = String::new();
    source.read_line(&mut line)?;
    let res = parse_sequence(&line)?;
    debug!(len = res.len(), "read sequence");
    Ok(res)
}

/// Same as [`read_sequence`], but an empty sequence is an error.
pub fn read_nonempty_sequence<R: BufRead>(
    source: R,
) -> Result<Vec<i64>, InputError> {
    let res = read_sequence(source)?;
    if res.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(res)
}

/// Parses integers up to the first `'\n'` or `'\r'` of `s`.
///
/// `index` in errors counts characters from the start of `s`.
pub fn parse_sequence(s: &str) -> Result<Vec<i64>, InputError> {
    let mut res = vec![];
    // (index of the first digit, value so far)
    let mut current: Option<(usize, i64)> = None;
    for (index, ch) in s.chars().enumerate() {
        match ch {
            '0'..='9' => {
                let digit = i64::from(ch as u8 - b'0');
                let (start, value) = current.unwrap_or((index, 0));
                let value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or(InputError::Overflow { index: start })?;
                current = Some((start, value));
            }
            ' ' | '\t' | '\n' | '\r' => {
                res.extend(current.take().map(|(_, value)| value));
                if ch == '\n' || ch == '\r' {
                    return Ok(res);
                }
            }
            _ => return Err(InputError::InvalidCharacter { ch, index }),
        }
    }
    res.extend(current.map(|(_, value)| value));
    Ok(res)
}

#[test]
fn sanity_check() {
    assert_eq!(parse_sequence("").unwrap(), Vec::<i64>::new());
    assert_eq!(parse_sequence("\n").unwrap(), Vec::<i64>::new());
    assert_eq!(parse_sequence("   ").unwrap(), Vec::<i64>::new());
    assert_eq!(parse_sequence("7").unwrap(), [7]);
    assert_eq!(parse_sequence("2 4 1 3 5 ").unwrap(), [2, 4, 1, 3, 5]);
    assert_eq!(parse_sequence("  10   20\t30\r\n").unwrap(), [10, 20, 30]);
    assert_eq!(parse_sequence("007 0").unwrap(), [7, 0]);
    assert_eq!(parse_sequence("1 2\n3 4\n").unwrap(), [1, 2]);
    assert_eq!(parse_sequence("1 2\r3 4").unwrap(), [1, 2]);
    assert_eq!(
        parse_sequence("9223372036854775807").unwrap(),
        [i64::MAX]
    );
}

#[test]
fn invalid() {
    let e = parse_sequence("1 2 x 4").unwrap_err();
    assert!(matches!(e, InputError::InvalidCharacter { ch: 'x', index: 4 }));
    assert_eq!(
        e.to_string(),
        "Invalid character 'x' found at index 4 in input stream."
    );

    // negative numbers are not accepted
    let e = parse_sequence("3 -1").unwrap_err();
    assert!(matches!(e, InputError::InvalidCharacter { ch: '-', index: 2 }));

    let e = parse_sequence("1,2").unwrap_err();
    assert!(matches!(e, InputError::InvalidCharacter { ch: ',', index: 1 }));

    // only the first line is looked at
    assert_eq!(parse_sequence("1\nx").unwrap(), [1]);

    let e = parse_sequence("5 9223372036854775808").unwrap_err();
    assert!(matches!(e, InputError::Overflow { index: 2 }));
}

#[test]
fn from_reader() {
    let src = "2 4 1 3 5 \nignored".as_bytes();
    assert_eq!(read_sequence(src).unwrap(), [2, 4, 1, 3, 5]);

    assert_eq!(read_sequence("".as_bytes()).unwrap(), Vec::<i64>::new());
    assert!(matches!(
        read_nonempty_sequence("".as_bytes()),
        Err(InputError::Empty)
    ));
    assert!(matches!(
        read_nonempty_sequence("  \r\n".as_bytes()),
        Err(InputError::Empty)
    ));
    assert_eq!(InputError::Empty.to_string(), "Sequence of integers not received.");

    let invalid_utf8: &[u8] = &[b'1', b' ', 0xFF, b'\n'];
    assert!(matches!(read_sequence(invalid_utf8), Err(InputError::Io(_))));
}
