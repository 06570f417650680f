//! Interval notation for hand lists ("AKs", "AQs", "AJs" <-> "AKs-AJs")

use std::cmp::Reverse;

use crate::error::{Error, Result};
use crate::models::HandCode;

/// Compress hand-code strings into range tokens
///
/// Invalid codes are skipped. See [`compress_codes`].
pub fn compress<I, S>(hands: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let codes: Vec<HandCode> = hands
        .into_iter()
        .filter_map(|h| h.as_ref().parse().ok())
        .collect();
    compress_codes(&codes)
}

/// Merge runs of hands that share a first rank and kind and whose second
/// rank steps down by one
///
/// Output is sorted by kind (pairs, suited, offsuit), then first rank and
/// second rank descending. A run of one is emitted as the bare code.
pub fn compress_codes(hands: &[HandCode]) -> Vec<String> {
    let mut sorted = hands.to_vec();
    sorted.sort_by_key(|h| (h.kind, Reverse(h.high), Reverse(h.low)));
    sorted.dedup();

    let mut tokens = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(mut start) = iter.next() else {
        return tokens;
    };
    let mut tail = start;

    for hand in iter {
        let extends = hand.kind == tail.kind
            && hand.high == tail.high
            && tail.low.below() == Some(hand.low);
        if extends {
            tail = hand;
        } else {
            tokens.push(token(start, tail));
            start = hand;
            tail = hand;
        }
    }
    tokens.push(token(start, tail));
    tokens
}

fn token(start: HandCode, end: HandCode) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    }
}

/// Expand a range token back into hand codes
///
/// Accepts a single code ("77") or a run ("AKs-AJs") whose ends share a
/// first rank and kind, with the end's second rank not above the start's.
pub fn expand(token: &str) -> Result<Vec<HandCode>> {
    let invalid = || Error::InvalidRange(token.to_string());

    let Some((first, last)) = token.split_once('-') else {
        return Ok(vec![token.parse().map_err(|_| invalid())?]);
    };
    let start: HandCode = first.parse().map_err(|_| invalid())?;
    let end: HandCode = last.parse().map_err(|_| invalid())?;

    if start == end {
        return Ok(vec![start]);
    }
    if start.is_pair() || start.kind != end.kind || start.high != end.high || end.low > start.low {
        return Err(invalid());
    }

    let mut codes = vec![start];
    let mut low = start.low;
    while low != end.low {
        low = low.below().ok_or_else(invalid)?;
        codes.push(HandCode { low, ..start });
    }
    Ok(codes)
}

/// Expand a list of tokens, concatenating the results
pub fn expand_all<I, S>(tokens: I) -> Result<Vec<HandCode>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut codes = Vec::new();
    for token in tokens {
        codes.extend(expand(token.as_ref())?);
    }
    Ok(codes)
}
