//! Age-based fare discounts.
//!
//! Applied to the fare a route costs, after distance and surcharge. The
//! route search itself never looks at passenger age.

use crate::domain::Age;

/// Part of every fare that is never discounted.
const DEDUCTIBLE: u64 = 350;

/// Fare band a passenger falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    /// 6 to 12 years: half price on the part above the deductible.
    Child,
    /// 13 to 18 years: 20% off the part above the deductible.
    Teenager,
    /// Everyone else pays full fare.
    Adult,
}

impl AgeGroup {
    pub fn of(age: Age) -> Self {
        match age.value() {
            6..=12 => AgeGroup::Child,
            13..=18 => AgeGroup::Teenager,
            _ => AgeGroup::Adult,
        }
    }

    /// Percentage taken off the discountable part of the fare.
    fn discount_percent(self) -> u64 {
        match self {
            AgeGroup::Child => 50,
            AgeGroup::Teenager => 20,
            AgeGroup::Adult => 0,
        }
    }

    /// What a passenger in this group pays for a `fare` trip.
    ///
    /// The percentage is split over whole hundreds and the remainder so the
    /// product cannot overflow for any fare.
    pub fn apply(self, fare: u64) -> u64 {
        let discountable = fare.saturating_sub(DEDUCTIBLE);
        let pct = self.discount_percent();
        let discount = discountable / 100 * pct + discountable % 100 * pct / 100;
        fare - discount
    }
}

/// What a passenger of `age` pays for a `fare` trip.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Age;
/// use subway_server::fare::discounted_fare;
///
/// let age = |n| Age::new(n).unwrap();
/// assert_eq!(discounted_fare(1250, age(8)), 800);
/// assert_eq!(discounted_fare(1250, age(15)), 1070);
/// assert_eq!(discounted_fare(1250, age(30)), 1250);
/// ```
pub fn discounted_fare(fare: u64, age: Age) -> u64 {
    AgeGroup::of(age).apply(fare)
}
