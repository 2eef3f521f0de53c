use std::{ffi::c_char, slice, str};

use crate::{best_match, quality};

pub const MP_NO_MATCH: isize = -1;

/// A borrowed string passed in from C.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct MpStr {
    pub ptr: *const c_char,
    pub len: usize,
}

impl MpStr {
    /// # Safety
    ///
    /// `ptr` must point to `len` readable bytes that outlive `'a`. It may be
    /// null when `len` is 0.
    unsafe fn as_str<'a>(self) -> Option<&'a str> {
        if self.len == 0 {
            return Some("");
        }
        let bytes = slice::from_raw_parts(self.ptr as *const u8, self.len);
        str::from_utf8(bytes).ok()
    }
}

/// Quality of `candidate` for an accept header value, 0 for no match.
///
/// Input that is not valid UTF-8 is malformed and yields 0.
///
/// # Safety
///
/// Both pointers must reference the given number of readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mp_quality(
    candidate: *const c_char,
    candidate_len: usize,
    header_value: *const c_char,
    header_value_len: usize,
) -> f64 {
    let candidate = MpStr {
        ptr: candidate,
        len: candidate_len,
    };
    let header_value = MpStr {
        ptr: header_value,
        len: header_value_len,
    };
    match (candidate.as_str(), header_value.as_str()) {
        (Some(candidate), Some(header_value)) => quality(candidate, header_value),
        _ => 0.0,
    }
}

/// Index of the best of `count` candidates for an accept header value, or
/// [`MP_NO_MATCH`].
///
/// Candidates that are not valid UTF-8 never match.
///
/// # Safety
///
/// `candidates` must point to `count` valid `MpStr` values and
/// `header_value` to `header_value_len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn mp_best_match(
    candidates: *const MpStr,
    count: usize,
    header_value: *const c_char,
    header_value_len: usize,
) -> isize {
    let header_value = match (MpStr {
        ptr: header_value,
        len: header_value_len,
    })
    .as_str()
    {
        Some(header_value) => header_value,
        None => return MP_NO_MATCH,
    };
    let candidates = if count == 0 {
        &[][..]
    } else {
        slice::from_raw_parts(candidates, count)
    };
    // Undecodable candidates stay in place as empty strings so the index
    // maps back to the caller's array.
    let decoded: Vec<&str> = candidates
        .iter()
        .map(|candidate| candidate.as_str().unwrap_or(""))
        .collect();
    best_match(&decoded, header_value)
        .and_then(|found| {
            decoded
                .iter()
                .rposition(|candidate| std::ptr::eq(*candidate, found))
        })
        .map_or(MP_NO_MATCH, |index| index as isize)
}
