use quickcheck::{Arbitrary, Gen};

const TYPES: &[&str] = &["text", "application", "image", "*"];
const SUBTYPES: &[&str] = &["html", "xml", "json", "plain", "*"];
const PARAM_NAMES: &[&str] = &["level", "charset", "q"];
const PARAM_VALUES: &[&str] = &["1", "2", "utf-8", "0", "0.5", "\"a b\"", "\"x\\\"y\""];
const TOKEN_CHARS: &[u8] = b"abxyz019+-.!~";

fn pick(g: &mut Gen, items: &[&'static str]) -> &'static str {
    g.choose(items).copied().unwrap_or("x")
}

fn random_token(g: &mut Gen) -> String {
    let len = usize::arbitrary(g) % 6 + 1;
    (0..len)
        .map(|_| *g.choose(TOKEN_CHARS).unwrap_or(&b'x') as char)
        .collect()
}

/// Newtype generating well-formed `type/subtype;name=value` strings, mostly
/// drawn from a small vocabulary so that candidates and ranges overlap.
#[derive(Clone, Debug)]
pub(crate) struct MediaTypeGen(pub String);

impl Arbitrary for MediaTypeGen {
    fn arbitrary(g: &mut Gen) -> Self {
        let type_ = if bool::arbitrary(g) {
            pick(g, TYPES).to_owned()
        } else {
            random_token(g)
        };
        let mut s = format!("{type_}/{}", pick(g, SUBTYPES));
        for _ in 0..usize::arbitrary(g) % 3 {
            s.push(';');
            s.push_str(pick(g, PARAM_NAMES));
            s.push('=');
            s.push_str(pick(g, PARAM_VALUES));
        }
        Self(s)
    }
}

/// Newtype generating well-formed accept header values.
#[derive(Clone, Debug)]
pub(crate) struct AcceptGen(pub String);

impl Arbitrary for AcceptGen {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 4 + 1;
        let ranges: Vec<String> = (0..count).map(|_| MediaTypeGen::arbitrary(g).0).collect();
        let sep = if bool::arbitrary(g) { ", " } else { "," };
        Self(ranges.join(sep))
    }
}
