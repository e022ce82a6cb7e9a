/*!
 * Positional line reader for the PGO format.
 *
 * Every line is trimmed before it is handed out. Each read advances the
 * cursor by one line, and every failure reports the 1-based line number.
 */

use std::str::{FromStr, Lines};

use crate::errors::PgoError;

/// Cursor over the lines of a PGO file
pub struct LineReader<'a> {
    lines: Lines<'a>,
    // @field: Number of lines consumed so far
    consumed: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines(),
            consumed: 0,
        }
    }

    /// 1-based number of the line the next read will return
    pub fn line_number(&self) -> usize {
        self.consumed + 1
    }

    /// Next trimmed line; `field` names what is expected, for the error
    pub fn next_line(&mut self, field: &str) -> Result<&'a str, PgoError> {
        let line = self.lines.next().ok_or_else(|| PgoError::UnexpectedEof {
            line: self.line_number(),
            expected: field.to_string(),
        })?;
        self.consumed += 1;
        Ok(line.trim())
    }

    /// Next line parsed as a single integer
    pub fn next_int<T: FromStr>(&mut self, field: &str) -> Result<T, PgoError> {
        let line = self.next_line(field)?;
        parse_int(line, self.consumed, field)
    }

    /// Next line split on whitespace, requiring at least `names.len()` tokens.
    ///
    /// Extra trailing tokens are ignored.
    pub fn next_fields(&mut self, names: &[&str]) -> Result<Vec<&'a str>, PgoError> {
        let expected = names.join(" ");
        let line = self.next_line(&expected)?;
        let tokens: Vec<&'a str> = line.split_whitespace().collect();

        if let Some(missing) = names.get(tokens.len()) {
            return Err(PgoError::MissingField {
                line: self.consumed,
                field: (*missing).to_string(),
            });
        }

        Ok(tokens)
    }

    /// Lines that were never consumed
    pub fn remaining(&mut self) -> usize {
        self.lines.by_ref().filter(|l| !l.trim().is_empty()).count()
    }
}

/// Parse one token as an integer, reporting `line` and `field` on failure
pub fn parse_int<T: FromStr>(token: &str, line: usize, field: &str) -> Result<T, PgoError> {
    token.parse::<T>().map_err(|_| PgoError::InvalidInteger {
        line,
        field: field.to_string(),
        value: token.to_string(),
    })
}
