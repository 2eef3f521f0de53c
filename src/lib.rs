//! HTTP content negotiation over `Accept` header values.
//!
//! Media types and media ranges are parsed with the RFC 2616 grammar
//! (`type "/" subtype *( ";" attribute "=" value )`), then candidates are
//! scored against the ranges by fitness and quality.
//!
//! ```
//! let header = "text/*;q=0.5, */*;q=0.1";
//! assert_eq!(
//!     Some("text/xml"),
//!     mimeparse::best_match(&["application/xbel+xml", "text/xml"], header)
//! );
//! assert_eq!(0.1, mimeparse::quality("image/png", header));
//! ```

pub mod c;
mod error;
mod lexer;
mod matcher;
mod media_type;
mod quality;
#[cfg(test)]
mod testing;

pub use error::{InvalidQualityError, ParseError, Result};
pub use matcher::{
    best_match, fitness_and_quality_parsed, quality, quality_parsed, FitnessAndQuality,
};
pub use media_type::{
    parse_media_range, parse_media_ranges, parse_mime_type, MediaRange, MediaType, Parameters,
    WILDCARD,
};
pub use quality::Quality;
