use crate::{
    media_type::{parse_media_range, parse_media_ranges, MediaRange},
    quality::Quality,
};

/// How well a candidate matched a set of media ranges.
///
/// `fitness` rewards an exact type (100), an exact subtype (10) and each
/// candidate parameter whose value the range repeats (1). Results order by
/// fitness first, then quality.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct FitnessAndQuality {
    pub fitness: i32,
    pub quality: Quality,
}

impl FitnessAndQuality {
    pub const NO_MATCH: FitnessAndQuality = FitnessAndQuality {
        fitness: -1,
        quality: Quality::ZERO,
    };

    pub fn is_match(&self) -> bool {
        self.fitness >= 0
    }
}

impl Default for FitnessAndQuality {
    fn default() -> Self {
        Self::NO_MATCH
    }
}

/// Scores `candidate` against already parsed ranges.
///
/// A candidate that does not parse, or an empty range list, yields
/// [`FitnessAndQuality::NO_MATCH`].
pub fn fitness_and_quality_parsed(candidate: &str, ranges: &[MediaRange<'_>]) -> FitnessAndQuality {
    match parse_media_range(candidate) {
        Ok(target) => RangeMatcher::new(ranges).match_range(&target),
        Err(err) => {
            tracing::debug!(candidate, %err, "candidate is not a valid media type");
            FitnessAndQuality::NO_MATCH
        }
    }
}

pub fn quality_parsed(candidate: &str, ranges: &[MediaRange<'_>]) -> f64 {
    fitness_and_quality_parsed(candidate, ranges).quality.into()
}

/// Returns the quality `header` assigns to `candidate`, or 0 when no range
/// matches or the header is malformed.
pub fn quality(candidate: &str, header: &str) -> f64 {
    quality_parsed(candidate, &parse_header(header))
}

/// Picks the candidate that best fits an `Accept` header value.
///
/// Candidates are listed in ascending order of preference: when fitness and
/// quality tie, the later one wins. Returns `None` if no candidate has a
/// nonzero quality.
pub fn best_match<'c>(candidates: &[&'c str], header: &str) -> Option<&'c str> {
    let ranges = parse_header(header);
    let (result, _, candidate) = candidates
        .iter()
        .enumerate()
        .map(|(position, candidate)| {
            (
                fitness_and_quality_parsed(candidate, &ranges),
                position,
                *candidate,
            )
        })
        .max_by_key(|(result, position, _)| (*result, *position))?;

    if result.quality == Quality::ZERO {
        tracing::trace!(header, "no acceptable candidate");
        return None;
    }
    tracing::trace!(header, candidate, ?result, "selected best match");
    Some(candidate)
}

fn parse_header(header: &str) -> Vec<MediaRange<'_>> {
    parse_media_ranges(header).unwrap_or_else(|err| {
        tracing::debug!(header, %err, "ignoring malformed accept header");
        Vec::new()
    })
}

struct RangeMatcher<'r, 'a> {
    ranges: &'r [MediaRange<'a>],
    best_result: FitnessAndQuality,
}

impl<'r, 'a> RangeMatcher<'r, 'a> {
    fn new(ranges: &'r [MediaRange<'a>]) -> Self {
        Self {
            ranges,
            best_result: FitnessAndQuality::NO_MATCH,
        }
    }

    fn match_range(mut self, target: &MediaRange<'_>) -> FitnessAndQuality {
        for range in self.ranges {
            if !range.overlaps(target) {
                continue;
            }
            let cur_result = FitnessAndQuality {
                fitness: fitness(range, target),
                quality: range.quality,
            };
            self.may_update_best_result(cur_result);
        }
        self.best_result
    }

    // Only a strictly higher fitness replaces the best result, so among equally
    // fit ranges the first one listed decides the quality.
    fn may_update_best_result(&mut self, cur_result: FitnessAndQuality) {
        if cur_result.fitness > self.best_result.fitness {
            tracing::trace!(?cur_result, "better range");
            self.best_result = cur_result;
        }
    }
}

/// Parameters only count from the target's side: a range parameter the
/// target does not carry adds nothing.
fn fitness(range: &MediaRange<'_>, target: &MediaRange<'_>) -> i32 {
    let mut fitness = 0;
    if range.type_ == target.type_ {
        fitness += 100;
    }
    if range.subtype == target.subtype {
        fitness += 10;
    }
    for (name, value) in &target.params {
        if range.param(name) == Some(*value) {
            fitness += 1;
        }
    }
    fitness
}
