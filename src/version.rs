//! Version tuples used to order distribution series
//!
//! A series such as `"22.04"` is split on `.` and every component that parses
//! as an integer is kept as a number, so `"9.1" < "10.1"` holds even though the
//! strings sort the other way. Components that are not integers (`"10-buster"`,
//! `"rc1"`) are kept as text and compared lexically.
//!
//! When a number and a text component meet at the same position the number
//! sorts first. Tuples of different lengths compare element by element and the
//! shorter one wins a tie (`"20" < "20.04"`).

use std::cmp::Ordering;
use std::fmt;

/// One dot-separated component of a series
///
/// Integers that do not fit in an `i64` are kept as a [`VersionToken::BigNumber`]
/// so that they still order numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionToken {
    Number(i64),
    /// Magnitude digits without leading zeros, always outside the `i64` range
    BigNumber { negative: bool, digits: String },
    Text(String),
}

impl VersionToken {
    /// Parse a single component, keeping the raw string when it is not an integer
    pub fn parse(component: &str) -> Self {
        let trimmed = component.trim();
        if let Ok(number) = trimmed.parse::<i64>() {
            return VersionToken::Number(number);
        }

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return VersionToken::BigNumber {
                negative,
                digits: digits.trim_start_matches('0').to_string(),
            };
        }

        VersionToken::Text(component.to_string())
    }

    pub fn is_number(&self) -> bool {
        !matches!(self, VersionToken::Text(_))
    }
}

fn cmp_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for VersionToken {
    fn cmp(&self, other: &Self) -> Ordering {
        use VersionToken::{BigNumber, Number, Text};

        match (self, other) {
            (Number(a), Number(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (BigNumber { negative, .. }, Number(_)) => {
                if *negative {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (Number(_), BigNumber { .. }) => other.cmp(self).reverse(),
            (
                BigNumber {
                    negative: a_neg,
                    digits: a,
                },
                BigNumber {
                    negative: b_neg,
                    digits: b,
                },
            ) => match (*a_neg, *b_neg) {
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (false, false) => cmp_magnitude(a, b),
                (true, true) => cmp_magnitude(a, b).reverse(),
            },
            // Numbers sort before text
            (Text(_), _) => Ordering::Greater,
            (_, Text(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for VersionToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionToken::Number(n) => write!(f, "{}", n),
            VersionToken::BigNumber { negative, digits } => {
                write!(f, "{}{}", if *negative { "-" } else { "" }, digits)
            }
            VersionToken::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for VersionToken {
    fn from(value: i64) -> Self {
        VersionToken::Number(value)
    }
}

impl From<&str> for VersionToken {
    fn from(value: &str) -> Self {
        VersionToken::Text(value.to_string())
    }
}

/// Ordered sort key derived from a series string
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTuple(Vec<VersionToken>);

impl VersionTuple {
    pub fn parse(version: &str) -> Self {
        Self(version.split('.').map(VersionToken::parse).collect())
    }

    pub fn tokens(&self) -> &[VersionToken] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<VersionToken>> for VersionTuple {
    fn from(tokens: Vec<VersionToken>) -> Self {
        Self(tokens)
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, token) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", token)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

/// Convert a series string into its comparable tuple form
pub fn version_tuple(version: &str) -> VersionTuple {
    VersionTuple::parse(version)
}
