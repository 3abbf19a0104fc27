//! Numeric-aware string ordering, so that `"2"` sorts before `"10"`.
//!
//! Names are split into maximal runs of ASCII digits and non-digits. Digit runs compare by their
//! numeric value, other runs compare case-insensitively with punctuation before digits and digits
//! before letters. Names that are still equal are ordered lowercase first, then by code point.

use std::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    // Digits with leading zeros removed.
    Number(&'a str),
    Text(&'a str),
}

fn chunks(value: &str) -> impl Iterator<Item = Chunk<'_>> {
    let mut rest = value;
    std::iter::from_fn(move || {
        let is_digit = rest.chars().next()?.is_ascii_digit();
        let end = rest.find(|c: char| c.is_ascii_digit() != is_digit).unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        rest = tail;
        Some(if is_digit {
            Chunk::Number(chunk.trim_start_matches('0'))
        } else {
            Chunk::Text(chunk)
        })
    })
}

fn rank(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    let key = |c: char| (rank(c), c);
    a.chars()
        .flat_map(char::to_lowercase)
        .map(key)
        .cmp(b.chars().flat_map(char::to_lowercase).map(key))
}

fn compare_chunk(a: &Chunk<'_>, b: &Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Number(a), Chunk::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (Chunk::Text(a), Chunk::Text(b)) => compare_text(a, b),
        (Chunk::Number(_), Chunk::Text(b)) => compare_text("0", b),
        (Chunk::Text(a), Chunk::Number(_)) => compare_text(a, "0"),
    }
}

fn tie_break(a: &str, b: &str) -> Ordering {
    let key = |c: char| (c.is_uppercase(), c);
    a.chars().map(key).cmp(b.chars().map(key))
}

pub fn compare(a: &str, b: &str) -> Ordering {
    chunks(a)
        .zip_longest(chunks(b))
        .map(|pair| match pair {
            EitherOrBoth::Both(a, b) => compare_chunk(&a, &b),
            EitherOrBoth::Left(_) => Ordering::Greater,
            EitherOrBoth::Right(_) => Ordering::Less,
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
        .then_with(|| tie_break(a, b))
}
