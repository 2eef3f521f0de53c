use crate::error::ParseError;

pub(crate) type ParseResult = Result<Cursor, ParseError>;

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) struct Cursor(pub usize);

impl Cursor {
    #[inline]
    pub fn eof(&self, input: &[u8]) -> bool {
        self.0 >= input.len()
    }

    #[inline]
    pub fn peek(&self, input: &[u8]) -> Option<u8> {
        input.get(self.0).copied()
    }

    #[inline]
    pub fn advanced(&self, n: usize) -> Self {
        Self(self.0 + n)
    }

    /// Returns the text between `self` and `end`.
    ///
    /// The combinators below only ever step over ASCII bytes, so both cursors
    /// sit on char boundaries.
    #[inline]
    pub fn slice<'a>(&self, input: &'a str, end: Cursor) -> &'a str {
        &input[self.0..end.0]
    }

    #[inline]
    pub fn error(&self) -> ParseError {
        ParseError { position: self.0 }
    }
}

pub(crate) fn byte(b: u8) -> impl Fn(&[u8], Cursor) -> ParseResult {
    move |input: &[u8], c: Cursor| match c.peek(input) {
        Some(b2) if b2 == b => Ok(c.advanced(1)),
        _ => Err(c.error()),
    }
}

fn match_one_or_more<F>(pred: F) -> impl Fn(&[u8], Cursor) -> ParseResult
where
    F: Fn(u8) -> bool,
{
    move |input: &[u8], c: Cursor| {
        let c2 = match_zero_or_more(&pred)(input, c)?;
        if c2.0 > c.0 {
            Ok(c2)
        } else {
            Err(c.error())
        }
    }
}

fn match_zero_or_more<F>(pred: F) -> impl Fn(&[u8], Cursor) -> ParseResult
where
    F: Fn(u8) -> bool,
{
    move |input: &[u8], c: Cursor| {
        let mut c = c;
        while let Some(b) = c.peek(input) {
            if !pred(b) {
                break;
            }
            c = c.advanced(1);
        }
        Ok(c)
    }
}

pub(crate) fn pair(
    parser1: impl Fn(&[u8], Cursor) -> ParseResult,
    parser2: impl Fn(&[u8], Cursor) -> ParseResult,
) -> impl Fn(&[u8], Cursor) -> ParseResult {
    move |input: &[u8], c: Cursor| {
        let c = parser1(input, c)?;
        parser2(input, c)
    }
}

pub(crate) fn alt(
    parser1: impl Fn(&[u8], Cursor) -> ParseResult,
    parser2: impl Fn(&[u8], Cursor) -> ParseResult,
) -> impl Fn(&[u8], Cursor) -> ParseResult {
    move |input: &[u8], c: Cursor| parser1(input, c).or_else(|_| parser2(input, c))
}

/// Consumes normal characters and escape sequences until neither applies.
///
/// An escape character must be followed by an escapable character, otherwise
/// the whole run fails at the offending byte.
fn escaped<F, G>(
    is_normal_char: F,
    escape_char: u8,
    is_escapable_char: G,
) -> impl Fn(&[u8], Cursor) -> ParseResult
where
    F: Fn(u8) -> bool,
    G: Fn(u8) -> bool,
{
    move |input: &[u8], c: Cursor| {
        let mut c = c;
        while let Some(b) = c.peek(input) {
            if b == escape_char {
                let escaped_at = c.advanced(1);
                match escaped_at.peek(input) {
                    Some(b2) if is_escapable_char(b2) => c = escaped_at.advanced(1),
                    _ => return Err(escaped_at.error()),
                }
            } else if is_normal_char(b) {
                c = c.advanced(1);
            } else {
                break;
            }
        }
        Ok(c)
    }
}

// separators = "(" | ")" | "<" | ">" | "@" | "," | ";" | ":" | "\" | <">
//            | "/" | "[" | "]" | "?" | "=" | "{" | "}" | SP | HT
const SEPARATORS: &[u8] = b"()<>@,;:\\\"/[]?={} \t";

const fn is_ctl(c: u8) -> bool {
    c < 32 || c == 127
}

const fn build_token_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut c = 0;
    while c < 128 {
        table[c] = !is_ctl(c as u8);
        c += 1;
    }
    let mut i = 0;
    while i < SEPARATORS.len() {
        table[SEPARATORS[i] as usize] = false;
        i += 1;
    }
    table
}

const fn build_qdtext_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut c = 0;
    while c < 128 {
        table[c] = !is_ctl(c as u8) && c != b'"' as usize && c != b'\\' as usize;
        c += 1;
    }
    table
}

// token = 1*<any CHAR except CTLs or separators>
const TOKEN_TABLE: [bool; 256] = build_token_table();

// qdtext = <any CHAR except CTLs or <">>, with "\" reserved for quoted-pair
const QDTEXT_TABLE: [bool; 256] = build_qdtext_table();

#[inline]
fn is_token_char(c: u8) -> bool {
    TOKEN_TABLE[c as usize]
}

#[inline]
fn is_qdtext(c: u8) -> bool {
    QDTEXT_TABLE[c as usize]
}

// quoted-pair = "\" CHAR
#[inline]
fn is_quoted_pair_char(c: u8) -> bool {
    c.is_ascii()
}

pub(crate) fn token(input: &[u8], c: Cursor) -> ParseResult {
    match_one_or_more(is_token_char)(input, c)
}

pub(crate) fn is_token(s: &str) -> bool {
    let input = s.as_bytes();
    matches!(token(input, Cursor(0)), Ok(c) if c.eof(input))
}

/// Matches a complete quoted string including both quote characters.
pub(crate) fn quoted_string(input: &[u8], c: Cursor) -> ParseResult {
    let c = byte(b'"')(input, c)?;
    let c = escaped(is_qdtext, b'\\', is_quoted_pair_char)(input, c)?;
    byte(b'"')(input, c)
}

pub(crate) fn ows(input: &[u8], c: Cursor) -> ParseResult {
    match_zero_or_more(|b| b == b' ' || b == b'\t')(input, c)
}

pub(crate) fn ows_byte_ows(b: u8) -> impl Fn(&[u8], Cursor) -> ParseResult {
    move |input: &[u8], c: Cursor| pair(pair(ows, byte(b)), ows)(input, c)
}
