use crate::errors::Error;
use crate::merge;
use crate::scalars::{Scalar, ScalarKind};
use serde::{Deserialize, Serialize};

/// A range of scalar values `[start, end)`, both endpoints holding the same
/// kind of scalar.
///
/// A range is a plain value object: the predicates and `subtract` never
/// change one, and the merge sweep only rewrites its own working copies.
/// Nothing requires `start <= end`; an inverted range can be built, and what
/// the predicates make of it is unspecified.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Range {
    start: Scalar,
    end: Scalar,
}

impl Range {
    /// Build a range over two endpoints of the same kind.
    pub fn new(start: Scalar, end: Scalar) -> Result<Self, Error> {
        if start.kind() != end.kind() {
            return Err(Error::KindMismatch(start.kind(), end.kind()));
        }
        Ok(Range { start, end })
    }

    /// Build a range from endpoints that may be absent.  Both are required;
    /// a zero endpoint is a value like any other.
    pub fn from_parts(
        start: Option<Scalar>,
        end: Option<Scalar>,
    ) -> Result<Self, Error> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            (None, _) | (_, None) => Err(Error::MissingEndpoint),
        }
    }

    //  For endpoints already known to share a kind (taken from constructed
    //  ranges).
    pub(crate) fn unchecked(start: Scalar, end: Scalar) -> Self {
        Range { start, end }
    }

    pub fn start(&self) -> Scalar {
        self.start
    }

    pub fn end(&self) -> Scalar {
        self.end
    }

    /// The kind both endpoints hold.
    pub fn kind(&self) -> ScalarKind {
        self.start.kind()
    }

    //  Only the merge sweep moves an endpoint, and only on pieces of its own
    //  working list.
    pub(crate) fn extend_to(&mut self, end: Scalar) {
        self.end = end;
    }

    /// Whether both endpoints are equal.  Ranges of different kinds are
    /// never equal.
    pub fn equals(&self, other: &Range) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Whether `inner` lies within self, endpoints included.  A range does
    /// not contain an equal range; that relation is [`Range::equals`].
    pub fn contains(&self, inner: &Range) -> bool {
        !self.equals(inner)
            && self.start <= inner.start
            && self.end >= inner.end
    }

    /// Whether the two ranges have values in common.  Two ranges that only
    /// touch, one ending exactly where the other starts, share no value and
    /// do not overlap (the merge sweep still fuses them).
    pub fn overlaps(&self, other: &Range) -> bool {
        self.equals(other)
            || self.contains(other)
            || other.contains(self)
            || (self.start < other.start && self.end > other.start)
            || (other.start < self.start && other.end > self.start)
    }

    /// Remove `diff` from self.  Yields nothing when `diff` covers self,
    /// self unchanged when the two do not overlap, and otherwise the left
    /// and/or right remainder, in that order.
    pub fn subtract(&self, diff: &Range) -> Vec<Range> {
        if self.equals(diff) || diff.contains(self) {
            return Vec::new();
        }
        if !self.overlaps(diff) {
            //  A diff lying entirely past one of our endpoints would
            //  otherwise leak a widened candidate through the filter below.
            return vec![*self];
        }
        let parts = [
            Range::unchecked(self.start, diff.start),
            Range::unchecked(diff.end, self.end),
        ];
        parts.into_iter().filter(|part| part.end > part.start).collect()
    }

    /// Merge self with one other range: sugar for [`merge::sum`] over the
    /// pair.
    pub fn add(&self, other: &Range) -> Vec<Range> {
        merge::sum(&[*self, *other])
    }
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
