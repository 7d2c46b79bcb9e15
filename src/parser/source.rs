//! Character sources feeding the scanner

use std::fs;
use std::io;
use std::path::Path;

/// Sentinel returned once the input is exhausted.
pub const EOT: char = '\0';

/// Supplies one character at a time.
///
/// After the last character every call to [`next_char`](CharSource::next_char)
/// returns [`EOT`]. `mark`/`reset` let the scanner rewind after a speculative read.
pub trait CharSource {
    fn next_char(&mut self) -> char;

    /// Opaque read position; the next `next_char` call resumes from here.
    fn mark(&self) -> usize;

    /// Rewind to a position previously returned by [`mark`](CharSource::mark).
    fn reset(&mut self, mark: usize);
}

/// In-memory source over a decoded string.
#[derive(Debug, Clone)]
pub struct StrSource {
    input: Vec<char>,
    position: usize,
}

impl StrSource {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Read a whole file into memory.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::new(&fs::read_to_string(path)?))
    }
}

impl CharSource for StrSource {
    fn next_char(&mut self) -> char {
        match self.input.get(self.position) {
            Some(&ch) => {
                self.position += 1;
                ch
            }
            None => EOT,
        }
    }

    fn mark(&self) -> usize {
        self.position
    }

    fn reset(&mut self, mark: usize) {
        self.position = mark.min(self.input.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_repeats() {
        let mut source = StrSource::new("ab");
        assert_eq!(source.next_char(), 'a');
        assert_eq!(source.next_char(), 'b');
        assert_eq!(source.next_char(), EOT);
        assert_eq!(source.next_char(), EOT);
    }

    #[test]
    fn test_mark_and_reset() {
        let mut source = StrSource::new("xyz");
        source.next_char();
        let mark = source.mark();
        assert_eq!(source.next_char(), 'y');
        assert_eq!(source.next_char(), 'z');
        source.reset(mark);
        assert_eq!(source.next_char(), 'y');
    }
}
