//! Peekable character cursor over a byte stream
//!
//! Decodes UTF-8 one character at a time and keeps a single lookahead slot, so
//! the parser can inspect the next character and leave it in place when it
//! belongs to the next token. Works on any `Read`, including pipes and
//! sockets that cannot seek backwards.
//!
//! # Read Granularity
//!
//! Every character costs between one and four `read` calls of one byte each.
//! Wrap slow sources in a `BufReader` to keep the same external behaviour
//! with fewer system calls.

use std::io::{self, Read};

/// Character cursor with a one-character pushback slot
#[derive(Debug)]
pub struct CharStream<R> {
    inner: R,
    /// `Some(None)` holds a peeked end of stream
    peeked: Option<Option<char>>,
}

impl<R: Read> CharStream<R> {
    /// Create a cursor positioned at the start of `inner`
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
        }
    }

    /// Read and consume the next character
    ///
    /// Returns `Ok(None)` once the stream is exhausted. A character left in
    /// the lookahead slot by [`peek`](Self::peek) is returned first.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        match self.peeked.take() {
            Some(peeked) => Ok(peeked),
            None => self.decode_char(),
        }
    }

    /// Look at the next character without consuming it
    ///
    /// End of stream is remembered too: the following
    /// [`next_char`](Self::next_char) returns `Ok(None)` without another read.
    pub fn peek(&mut self) -> io::Result<Option<char>> {
        match self.peeked {
            Some(peeked) => Ok(peeked),
            None => {
                let next = self.decode_char()?;
                self.peeked = Some(next);
                Ok(next)
            }
        }
    }

    /// Drop the character returned by the last [`peek`](Self::peek)
    pub fn consume(&mut self) {
        self.peeked = None;
    }

    /// Get a reference to the underlying reader
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the underlying reader
    ///
    /// A character held in the lookahead slot is lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn decode_char(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };
        if first.is_ascii() {
            return Ok(Some(char::from(first)));
        }

        let width = utf8_width(first)
            .ok_or_else(|| invalid_data(format!("invalid UTF-8 lead byte 0x{:02x}", first)))?;

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self
                .read_byte()?
                .ok_or_else(|| invalid_data("stream ended inside a UTF-8 sequence".to_string()))?;
        }

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(|| invalid_data(format!("invalid UTF-8 sequence {:02x?}", &buf[..width])))
    }
}

/// Encoded length of a UTF-8 sequence given its non-ASCII lead byte
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}
