//! Range notation parser
//!
//! Turns field values such as `"1,5,10-12"` into an ordered, de-duplicated
//! set of ids. Grammar:
//!
//! ```text
//! field := token (',' token)*
//! token := WS* (single | range) WS*
//! single := DIGIT+
//! range := DIGIT+ '-' DIGIT+
//! ```
//!
//! Bad tokens are dropped one at a time; the rest of the field still applies.
//! Ranges stay as bounds until a consumer clamps them, so `1-99999999999`
//! costs nothing until it meets a category table.

use crate::error::{NotationError, Result};
use equipskill_types::SkillId;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::ops::RangeInclusive;
use tracing::warn;

const DELIMITER: char = ',';

/// Where a field value came from, for diagnostics
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    /// Owning skill record
    pub skill_id: SkillId,
    /// Metadata key the value was read from
    pub field: &'a str,
}

impl<'a> ParseContext<'a> {
    /// Create a context for one field of one record
    pub fn new(skill_id: SkillId, field: &'a str) -> Self {
        Self { skill_id, field }
    }
}

/// One successfully parsed token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdToken {
    /// `N`
    Single(u32),
    /// `N-M`, inclusive, `N <= M`; an end past `u32::MAX` is held as `u32::MAX`
    Range(u32, u32),
    /// Well-formed, but every id it names is beyond the id space
    OutOfBounds,
}

impl IdToken {
    /// Ids covered by this token in ascending order
    pub fn ids(self) -> RangeInclusive<u32> {
        match self {
            IdToken::Single(id) => id..=id,
            IdToken::Range(start, end) => start..=end,
            IdToken::OutOfBounds => empty_range(),
        }
    }

    /// Ids covered by this token that are below `bound`
    pub fn ids_below(self, bound: usize) -> RangeInclusive<u32> {
        let Some(last) = bound.checked_sub(1) else {
            return empty_range();
        };
        let last = u32::try_from(last).unwrap_or(u32::MAX);
        let ids = self.ids();
        let (start, end) = (*ids.start(), *ids.end());
        if ids.is_empty() || start > last {
            return empty_range();
        }
        start..=end.min(last)
    }
}

fn empty_range() -> RangeInclusive<u32> {
    1..=0
}

/// Ordered set of ids named by a field, kept as parsed tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdList {
    tokens: Vec<IdToken>,
}

impl IdList {
    /// The accepted tokens in field order
    pub fn tokens(&self) -> &[IdToken] {
        &self.tokens
    }

    /// True when the field names no id at all
    pub fn is_empty(&self) -> bool {
        self.tokens.iter().all(|token| token.ids().is_empty())
    }

    /// True when `id` is named by any token
    pub fn contains(&self, id: u32) -> bool {
        self.tokens.iter().any(|token| token.ids().contains(&id))
    }

    /// De-duplicated ids below `bound`, in first-occurrence order
    pub fn ids_below(&self, bound: usize) -> Vec<u32> {
        let mut seen = HashSet::new();
        self.tokens
            .iter()
            .flat_map(|token| token.ids_below(bound))
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Every id, de-duplicated in first-occurrence order
    ///
    /// Expands ranges in full; prefer [`IdList::ids_below`] for open-ended input.
    pub fn to_vec(&self) -> Vec<u32> {
        self.ids_below(usize::MAX)
    }
}

/// Result of parsing a whole field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedIdList {
    /// Accepted ids
    pub ids: IdList,
    /// Tokens that were skipped
    pub errors: Vec<NotationError>,
}

impl ParsedIdList {
    /// True when every token parsed
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a field value, logging every rejected token with its context
pub fn parse_id_list(raw: &str, ctx: &ParseContext<'_>) -> IdList {
    let parsed = parse_id_list_detailed(raw);

    for error in &parsed.errors {
        warn!(
            skill_id = %ctx.skill_id,
            field = ctx.field,
            raw,
            "Invalid equip id list: {}",
            error
        );
    }

    parsed.ids
}

/// Parse a field value without logging
///
/// Empty or whitespace-only input is an absent field and yields nothing.
pub fn parse_id_list_detailed(raw: &str) -> ParsedIdList {
    let mut parsed = ParsedIdList::default();
    if raw.trim().is_empty() {
        return parsed;
    }

    for token in raw.split(DELIMITER) {
        match parse_token(token) {
            Ok(token) => parsed.ids.tokens.push(token),
            Err(e) => parsed.errors.push(e),
        }
    }

    parsed
}

/// Parse one comma-separated token; surrounding whitespace is ignored
pub fn parse_token(token: &str) -> Result<IdToken> {
    let token = token.trim();

    if is_digits(token) {
        return Ok(to_id(token).map_or(IdToken::OutOfBounds, IdToken::Single));
    }

    if let Some((start, end)) = token.split_once('-') {
        if is_digits(start) && is_digits(end) {
            if compare_digits(start, end) == Ordering::Greater {
                return Err(NotationError::InvertedRange {
                    start: start.to_string(),
                    end: end.to_string(),
                });
            }
            return Ok(match (to_id(start), to_id(end)) {
                (Some(start), Some(end)) => IdToken::Range(start, end),
                (Some(start), None) => IdToken::Range(start, u32::MAX),
                (None, _) => IdToken::OutOfBounds,
            });
        }
    }

    Err(NotationError::Malformed {
        token: token.to_string(),
    })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// `None` when the digits exceed the id space
fn to_id(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

/// Numeric comparison of two ASCII digit strings of any length
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
