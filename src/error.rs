use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// The input does not match the media-type grammar.
///
/// `position` is the byte offset at which matching stopped. Trailing input
/// after an otherwise complete media type is reported at the first byte that
/// could not be consumed.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("malformed media type at byte {position}")]
pub struct ParseError {
    pub position: usize,
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("quality value must be between 0 and 1")]
pub struct InvalidQualityError;
