use crate::ranges::Range;
use itertools::Itertools;
use log::debug;
use std::cmp::Ordering;

/// Merge an arbitrary collection of ranges into the minimal set of mutually
/// disjoint ranges covering the same values, ordered by ascending start.
///
/// Ranges that merely touch, one ending exactly where the next starts, fuse
/// into a single piece even though they do not overlap.  The input is left
/// untouched; the sweep works on its own copies.
pub fn sum(ranges: &[Range]) -> Vec<Range> {
    let mut ordered = ranges.to_vec();
    ordered.sort_by(|a, b| match a.start().compare(&b.start()) {
        Some(Ordering::Less) => Ordering::Less,
        Some(Ordering::Greater) => Ordering::Greater,
        Some(Ordering::Equal) | None => {
            a.end().compare(&b.end()).unwrap_or(Ordering::Equal)
        }
    });

    let mut merged: Vec<Range> = Vec::new();
    for range in ordered {
        //  Every piece already emitted that the incoming range touches or
        //  overlaps.  With well-ordered input there is at most one; several
        //  can only show up for inverted inputs, and then only the piece
        //  reaching furthest may grow.  The other matched pieces stay put,
        //  even once the extension subsumes them.
        let furthest = merged
            .iter()
            .enumerate()
            .filter(|(_, piece)| {
                piece.end() == range.start() || piece.overlaps(&range)
            })
            .max_by(|(_, a), (_, b)| {
                a.end().compare(&b.end()).unwrap_or(Ordering::Equal)
            })
            .map(|(index, _)| index);
        match furthest {
            None => merged.push(range),
            Some(index) => {
                if let Some(piece) = merged.get_mut(index) {
                    if piece.end() < range.end() {
                        piece.extend_to(range.end());
                    }
                }
            }
        }
    }
    debug!("merged {} ranges into {} pieces", ranges.len(), merged.len());
    merged
}

/// The gaps separating the merged pieces of the given ranges: one fresh
/// range per pair of consecutive pieces.  Empty when everything merges into
/// a single piece, or when there was nothing to merge.
pub fn inverse(ranges: &[Range]) -> Vec<Range> {
    sum(ranges)
        .iter()
        .tuple_windows()
        .map(|(before, after)| Range::unchecked(before.end(), after.start()))
        .collect()
}
