//! Passenger age.

use std::fmt;

/// Error returned when an age is zero or negative.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid age: {reason}")]
pub struct InvalidAge {
    reason: &'static str,
}

/// A passenger's age in whole years. Always at least 1.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Age;
///
/// assert_eq!(Age::new(10).unwrap().value(), 10);
/// assert!(Age::new(0).is_err());
/// assert!(Age::new(-2).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u16);

impl Age {
    pub fn new(years: i64) -> Result<Self, InvalidAge> {
        if years <= 0 {
            return Err(InvalidAge {
                reason: "age must be greater than zero",
            });
        }
        let years = u16::try_from(years).map_err(|_| InvalidAge {
            reason: "age is too large",
        })?;
        Ok(Age(years))
    }

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Age({})", self.0)
    }
}
