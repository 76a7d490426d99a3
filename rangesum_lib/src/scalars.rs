use crate::errors::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Which kind of endpoint a scalar holds.  The kind is fixed when the value
/// is built; every later comparison dispatches on it, so the value is never
/// probed again.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ScalarKind {
    Number,
    Instant,
    Int64,
}

/// One endpoint of a range: a plain number, an absolute instant in time, or
/// a signed 64-bit integer.
///
/// Instants compare by their epoch offset alone; whatever offset an instant
/// was written with is normalized away when parsing.  64-bit integers
/// compare exactly over the full signed range, including magnitudes a float
/// cannot tell apart.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Scalar {
    Number(f64),
    Instant(DateTime<Utc>),
    Int64(i64),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Number(_) => ScalarKind::Number,
            Scalar::Instant(_) => ScalarKind::Instant,
            Scalar::Int64(_) => ScalarKind::Int64,
        }
    }

    /// Three-way ordering between two endpoints of the same kind.
    ///
    /// There is no ordering across kinds, nor against a NaN number; the
    /// predicates built on top all read the absence of an ordering as plain
    /// false.
    pub fn compare(&self, other: &Scalar) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Number(a), Scalar::Number(b)) => a.partial_cmp(b),
            (Scalar::Instant(a), Scalar::Instant(b)) => Some(a.cmp(b)),
            (Scalar::Int64(a), Scalar::Int64(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int64(value)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(value: DateTime<Utc>) -> Self {
        Scalar::Instant(value)
    }
}

impl FromStr for Scalar {
    type Err = Error;

    /// Detect the kind from the text itself: a decimal integer becomes an
    /// Int64 (round-tripping exactly), an RFC-3339 timestamp an Instant, a
    /// float literal a Number.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = text.parse::<i64>() {
            return Ok(Scalar::Int64(value));
        }
        if let Ok(value) = DateTime::parse_from_rfc3339(text) {
            return Ok(Scalar::Instant(value.with_timezone(&Utc)));
        }
        if let Ok(value) = text.parse::<f64>() {
            return Ok(Scalar::Number(value));
        }
        Err(Error::UnknownScalar(text.to_string()))
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Number(value) => write!(f, "{}", value),
            Scalar::Instant(value) => write!(f, "{}", value.to_rfc3339()),
            Scalar::Int64(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Scalar::from(1.5).kind(), ScalarKind::Number);
        assert_eq!(Scalar::from(3_i64).kind(), ScalarKind::Int64);
        assert_eq!(
            Scalar::from(Utc::now()).kind(),
            ScalarKind::Instant,
        );
    }

    #[test]
    fn test_compare_numbers() {
        let one = Scalar::from(1.0);
        let two = Scalar::from(2.0);
        assert_eq!(one.compare(&two), Some(Ordering::Less));
        assert_eq!(two.compare(&one), Some(Ordering::Greater));
        assert_eq!(one.compare(&Scalar::from(1.0)), Some(Ordering::Equal));
        assert!(one < two);
        assert!(one == Scalar::from(1.0));

        //  NaN never orders against anything, itself included
        let nan = Scalar::from(f64::NAN);
        assert_eq!(nan.compare(&one), None);
        assert_eq!(one.compare(&nan), None);
        assert_eq!(nan.compare(&nan), None);
        assert!(nan != nan);
    }

    #[test]
    fn test_compare_instants() {
        //  Two spellings of the same instant, written with different offsets
        let a: Scalar = "2024-01-01T00:00:00+02:00".parse().unwrap();
        let b: Scalar = "2023-12-31T22:00:00Z".parse().unwrap();
        assert_eq!(a.compare(&b), Some(Ordering::Equal));
        assert!(a == b);

        let later: Scalar = "2024-01-01T00:00:00Z".parse().unwrap();
        assert_eq!(a.compare(&later), Some(Ordering::Less));
        assert!(a < later);
    }

    #[test]
    fn test_compare_int64_exact() {
        //  Adjacent integers above 2^53 collapse to one value as floats;
        //  the Int64 kind must still tell them apart.
        let a = Scalar::from(9_007_199_254_740_993_i64);
        let b = Scalar::from(9_007_199_254_740_994_i64);
        assert_eq!(a.compare(&b), Some(Ordering::Less));
        assert!(a != b);
        assert_eq!(
            Scalar::from(9_007_199_254_740_993.0_f64)
                .compare(&Scalar::from(9_007_199_254_740_994.0_f64)),
            Some(Ordering::Equal),
        );

        assert_eq!(
            Scalar::from(i64::MIN).compare(&Scalar::from(i64::MAX)),
            Some(Ordering::Less),
        );
    }

    #[test]
    fn test_compare_across_kinds() {
        let number = Scalar::from(1.0);
        let int = Scalar::from(1_i64);
        let instant = Scalar::from(Utc::now());
        assert_eq!(number.compare(&int), None);
        assert_eq!(int.compare(&number), None);
        assert_eq!(number.compare(&instant), None);
        assert_eq!(instant.compare(&int), None);
        assert!(number != int);
        assert!(!(number < int));
        assert!(!(number > int));
    }

    #[test]
    fn test_parse() {
        assert_eq!("20000001".parse::<Scalar>().unwrap(), Scalar::from(20000001_i64));
        assert_eq!("-7".parse::<Scalar>().unwrap(), Scalar::from(-7_i64));
        assert_eq!("2.5".parse::<Scalar>().unwrap(), Scalar::from(2.5));
        assert_eq!("1e3".parse::<Scalar>().unwrap(), Scalar::from(1000.0));
        assert_eq!(
            "2024-03-01T12:00:00Z".parse::<Scalar>().unwrap().kind(),
            ScalarKind::Instant,
        );
        assert!(matches!(
            "giraffe".parse::<Scalar>(),
            Err(Error::UnknownScalar(_)),
        ));
    }

    #[test]
    fn test_int64_round_trip() {
        let text = "9007199254740993";
        let parsed: Scalar = text.parse().unwrap();
        assert_eq!(parsed, Scalar::from(9_007_199_254_740_993_i64));
        assert_eq!(parsed.to_string(), text);

        let negative: Scalar = "-9223372036854775808".parse().unwrap();
        assert_eq!(negative, Scalar::from(i64::MIN));
        assert_eq!(negative.to_string(), "-9223372036854775808");
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::from(2.0).to_string(), "2");
        assert_eq!(Scalar::from(2.5).to_string(), "2.5");
        assert_eq!(Scalar::from(42_i64).to_string(), "42");
        let instant: Scalar = "2024-01-01T00:00:00+02:00".parse().unwrap();
        assert_eq!(instant.to_string(), "2023-12-31T22:00:00+00:00");
    }
}
