//! Separator normalization primitives.
//!
//! This module provides the text-scanning functions behind prefix joining:
//! - Collapsing runs of a separator down to a single occurrence
//! - Preserving the doubled separator after a colon (`"http://"` stays intact)
//! - Stripping and prepending leading separators
//!
//! The scan works on separator occurrences, not characters, so multi-byte
//! and multi-character separators behave the same as `"/"`.

/// Collapse every run of two or more separators to a single occurrence.
///
/// A run immediately preceded by a colon keeps exactly two occurrences, so
/// URL-style authority markers survive joining. An empty separator has no
/// occurrences to collapse and the input is returned unchanged.
pub(crate) fn collapse_runs(input: &str, separator: &str) -> String {
    if separator.is_empty() {
        return input.to_owned();
    }

    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    // Character immediately before the current scan position in the input.
    let mut prev: Option<char> = None;

    loop {
        if let Some(mut tail) = rest.strip_prefix(separator) {
            let mut run = 1_usize;
            while let Some(next) = tail.strip_prefix(separator) {
                tail = next;
                run += 1;
            }

            let keep = if run >= 2 && prev == Some(':') { 2 } else { 1 };
            for _ in 0..keep {
                output.push_str(separator);
            }

            prev = separator.chars().last();
            rest = tail;
        } else {
            match rest.chars().next() {
                Some(c) => {
                    output.push(c);
                    prev = Some(c);
                    rest = &rest[c.len_utf8()..];
                }
                None => break,
            }
        }
    }

    output
}

/// Collapse separator runs and strip the leading separator, if any.
///
/// The collapse pass leaves at most one leading occurrence; the result
/// never begins with the separator.
pub(crate) fn relativize(input: &str, separator: &str) -> String {
    let mut collapsed = collapse_runs(input, separator);
    if !separator.is_empty() && collapsed.starts_with(separator) {
        collapsed.drain(..separator.len());
    }
    collapsed
}

/// Prepend the separator unless the text already begins with it.
pub(crate) fn absolutize(mut relative: String, separator: &str) -> String {
    if !relative.starts_with(separator) {
        relative.insert_str(0, separator);
    }
    relative
}
