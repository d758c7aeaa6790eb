//! Section distance type.

use std::fmt;

/// Error returned when a distance would be zero or negative.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance: {reason}")]
pub struct InvalidDistance {
    reason: &'static str,
}

impl InvalidDistance {
    /// Returns the reason the distance was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A distance between stations, in kilometres.
///
/// Every `Distance` handed out by [`Distance::new`] is strictly positive.
/// The only way to hold a zero distance is [`Distance::zero`], which exists
/// as an accumulator seed when summing the sections of a route.
///
/// A single section is at most `u32::MAX` km, but sums are held in 64 bits
/// so merged sections, whole lines and long routes keep their exact length.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let ten = Distance::new(10).unwrap();
/// let three = Distance::new(3).unwrap();
/// assert_eq!(ten.subtract(three).unwrap().value(), 7);
/// assert_eq!(ten.add(three).value(), 13);
///
/// // Non-positive values are rejected
/// assert!(Distance::new(0).is_err());
/// assert!(Distance::new(-4).is_err());
///
/// // Subtraction must leave something behind
/// assert!(three.subtract(ten).is_err());
/// assert!(three.subtract(three).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u64);

impl Distance {
    /// Create a distance from a raw kilometre count.
    ///
    /// The value must be greater than zero.
    pub fn new(km: i64) -> Result<Self, InvalidDistance> {
        if km <= 0 {
            return Err(InvalidDistance {
                reason: "distance must be greater than zero",
            });
        }
        let km = u32::try_from(km).map_err(|_| InvalidDistance {
            reason: "distance is too large",
        })?;
        Ok(Distance(u64::from(km)))
    }

    /// The zero distance, for summing.
    pub const fn zero() -> Self {
        Distance(0)
    }

    /// Returns true if this is the zero accumulator.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Sum of two distances.
    #[must_use]
    pub fn add(self, other: Distance) -> Distance {
        Distance(self.0.saturating_add(other.0))
    }

    /// Remaining distance after taking `other` away.
    ///
    /// Fails unless `other` is strictly shorter than `self`, so a split
    /// section never ends up with a zero or negative length.
    pub fn subtract(self, other: Distance) -> Result<Distance, InvalidDistance> {
        if other.0 >= self.0 {
            return Err(InvalidDistance {
                reason: "resulting distance must remain positive",
            });
        }
        Ok(Distance(self.0 - other.0))
    }

    /// Returns the distance in kilometres.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}km", self.0)
    }
}
