//! Minimal JavaScript-family lexer used to bound call argument lists.
//!
//! It does not tokenize. It only walks the source byte by byte and reports the
//! positions of bytes that are *code*: bytes inside string literals, comments and
//! the text parts of template literals are skipped, while `${ ... }`
//! interpolations are code again. Regex literals are not recognized.
//!
//! All structural characters are ASCII, so every reported position is a UTF-8
//! character boundary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// Code, with the number of `{` opened since the frame started.
    Code { braces: usize },
    /// Text part of a template literal.
    Template,
}

/// Iterator over `(position, byte)` pairs of code bytes.
pub struct CodeLexer<'a> {
    bytes: &'a [u8],
    pos: usize,
    frames: Vec<Frame>,
}

impl<'a> CodeLexer<'a> {
    pub fn new(source: &'a str, start: usize) -> Self {
        Self {
            bytes: source.as_bytes(),
            pos: start,
            frames: vec![Frame::Code { braces: 0 }],
        }
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Advance over template text until the closing backtick or an interpolation.
    fn step_template(&mut self, byte: u8) {
        match byte {
            b'\\' => self.pos += 2,
            b'`' => {
                self.frames.pop();
                self.pos += 1;
            }
            b'$' if self.peek(1) == Some(b'{') => {
                self.frames.push(Frame::Code { braces: 0 });
                self.pos += 2;
            }
            _ => self.pos += 1,
        }
    }
}

impl Iterator for CodeLexer<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.pos;
            let byte = *self.bytes.get(start)?;

            if matches!(self.frames.last(), Some(Frame::Template)) {
                self.step_template(byte);
                continue;
            }

            match byte {
                b'\'' | b'"' => {
                    self.pos = skip_string(self.bytes, start);
                    continue;
                }
                b'`' => {
                    self.frames.push(Frame::Template);
                    self.pos += 1;
                    continue;
                }
                b'/' if self.peek(1) == Some(b'/') => {
                    self.pos = skip_line_comment(self.bytes, start);
                    continue;
                }
                b'/' if self.peek(1) == Some(b'*') => {
                    self.pos = skip_block_comment(self.bytes, start);
                    continue;
                }
                b'{' => {
                    if let Some(Frame::Code { braces }) = self.frames.last_mut() {
                        *braces += 1;
                    }
                }
                b'}' => {
                    if let Some(Frame::Code { braces }) = self.frames.last_mut()
                        && *braces > 0
                    {
                        *braces -= 1;
                    } else if self.frames.len() > 1 {
                        // end of a `${ ... }` interpolation
                        self.frames.pop();
                        self.pos += 1;
                        continue;
                    }
                }
                _ => {}
            }

            self.pos += 1;
            return Some((start, byte));
        }
    }
}

/// Skip a quoted string starting at `start`. An unterminated string ends at the
/// line break, which keeps a stray apostrophe in JSX text from hiding the rest
/// of the file.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |offset| start + offset)
}

fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start + 2..]
        .windows(2)
        .position(|w| w == b"*/")
        .map_or(bytes.len(), |offset| start + 2 + offset + 2)
}

/// Find the end (exclusive) of the parenthesized list opening at `open`.
///
/// Returns `None` when the parentheses are still unbalanced at end of input.
pub fn find_closing_paren(source: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (pos, byte) in CodeLexer::new(source, open) {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(pos + 1);
                }
            }
            _ => {}
        }
    }
    None
}
