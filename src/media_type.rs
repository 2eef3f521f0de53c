use std::collections::BTreeMap;
use std::fmt;

use crate::{
    error::Result,
    lexer::{self, Cursor},
    quality::Quality,
};

/// The wildcard accepted for a type or subtype in a media range.
pub const WILDCARD: &str = "*";

/// Parameter attribute to value, keyed case-sensitively.
///
/// Quoted values are stored without the surrounding quotes but with any
/// backslash escapes left in place.
pub type Parameters<'a> = BTreeMap<&'a str, &'a str>;

/// A single `type/subtype;attr=value` expression as written.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MediaType<'a> {
    pub type_: &'a str,
    pub subtype: &'a str,
    pub params: Parameters<'a>,
}

/// A media type whose `q` parameter has been normalized into `quality`.
///
/// `params` never contains the `q` key.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MediaRange<'a> {
    pub type_: &'a str,
    pub subtype: &'a str,
    pub params: Parameters<'a>,
    pub quality: Quality,
}

impl<'a> MediaType<'a> {
    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params.get(name).copied()
    }
}

impl<'a> MediaRange<'a> {
    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params.get(name).copied()
    }

    /// Whether this range and `other` agree on type and subtype, letting a
    /// wildcard on either side stand for anything.
    pub fn overlaps(&self, other: &MediaRange<'_>) -> bool {
        (self.type_ == other.type_ || self.type_ == WILDCARD || other.type_ == WILDCARD)
            && (self.subtype == other.subtype
                || self.subtype == WILDCARD
                || other.subtype == WILDCARD)
    }
}

impl<'a> From<MediaType<'a>> for MediaRange<'a> {
    fn from(media_type: MediaType<'a>) -> Self {
        let MediaType {
            type_,
            subtype,
            mut params,
        } = media_type;
        let quality = Quality::from_param(params.remove("q"));
        Self {
            type_,
            subtype,
            params,
            quality,
        }
    }
}

fn fmt_params(f: &mut fmt::Formatter<'_>, params: &Parameters<'_>) -> fmt::Result {
    for (name, value) in params {
        if lexer::is_token(value) {
            write!(f, ";{name}={value}")?;
        } else {
            write!(f, ";{name}=\"{value}\"")?;
        }
    }
    Ok(())
}

impl fmt::Display for MediaType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;
        fmt_params(f, &self.params)
    }
}

impl fmt::Display for MediaRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;
        fmt_params(f, &self.params)?;
        write!(f, ";q={}", self.quality)
    }
}

/// Parses exactly one media type, e.g. `text/html;charset=utf-8`.
///
/// The whole input must be consumed and surrounding whitespace is not
/// allowed. A `q` parameter is kept as a plain string; use
/// [`parse_media_range`] to normalize it.
pub fn parse_mime_type(input: &str) -> Result<MediaType<'_>> {
    let bytes = input.as_bytes();
    let (c, media_type) = media_type(input, Cursor(0))?;
    end_of_input(bytes, c)?;
    Ok(media_type)
}

/// Parses one media type and normalizes its quality.
pub fn parse_media_range(input: &str) -> Result<MediaRange<'_>> {
    parse_mime_type(input).map(MediaRange::from)
}

/// Parses a comma separated list of media ranges such as an `Accept` value.
///
/// Whitespace is only allowed around the separating commas. Fails as a whole
/// if any element is malformed.
pub fn parse_media_ranges(input: &str) -> Result<Vec<MediaRange<'_>>> {
    let bytes = input.as_bytes();
    let (mut c, first) = media_type(input, Cursor(0))?;
    let mut ranges = vec![MediaRange::from(first)];
    while let Ok(c2) = lexer::ows_byte_ows(b',')(bytes, c) {
        let (c3, next) = media_type(input, c2)?;
        ranges.push(MediaRange::from(next));
        c = c3;
    }
    end_of_input(bytes, c)?;
    Ok(ranges)
}

// media-type = token "/" token *( ";" parameter )
fn media_type(input: &str, c: Cursor) -> Result<(Cursor, MediaType<'_>)> {
    let bytes = input.as_bytes();
    let type_end = lexer::token(bytes, c)?;
    let subtype_start = lexer::byte(b'/')(bytes, type_end)?;
    let subtype_end = lexer::token(bytes, subtype_start)?;

    let mut params = Parameters::new();
    let mut c2 = subtype_end;
    while let Ok(param_start) = lexer::byte(b';')(bytes, c2) {
        let (param_end, name, value) = parameter(input, param_start)?;
        params.insert(name, value);
        c2 = param_end;
    }

    Ok((
        c2,
        MediaType {
            type_: c.slice(input, type_end),
            subtype: subtype_start.slice(input, subtype_end),
            params,
        },
    ))
}

// parameter = attribute "=" ( token / quoted-string )
fn parameter(input: &str, c: Cursor) -> Result<(Cursor, &str, &str)> {
    let bytes = input.as_bytes();
    let name_end = lexer::token(bytes, c)?;
    let value_start = lexer::byte(b'=')(bytes, name_end)?;
    let name = c.slice(input, name_end);

    let value_end = lexer::alt(lexer::token, lexer::quoted_string)(bytes, value_start)?;
    let value = value_start.slice(input, value_end);
    // tokens never contain quotes
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    Ok((value_end, name, value))
}

fn end_of_input(input: &[u8], c: Cursor) -> Result<()> {
    if c.eof(input) {
        Ok(())
    } else {
        Err(c.error())
    }
}
