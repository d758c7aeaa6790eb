//! Distance-based tariff.

use crate::domain::Distance;

/// Tariff parameters.
///
/// The fare is `base_fare` up to `base_km`, then `unit_fare` per started
/// `mid_unit_km` up to `far_km`, then `unit_fare` per started `far_unit_km`
/// beyond that. The most expensive line surcharge on the route is added on
/// top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarePolicy {
    /// Flat fare for short trips.
    pub base_fare: u32,

    /// Distance covered by the flat fare (km).
    pub base_km: u32,

    /// Where the middle band ends and the far band starts (km).
    pub far_km: u32,

    /// Step length in the middle band (km).
    pub mid_unit_km: u32,

    /// Step length in the far band (km).
    pub far_unit_km: u32,

    /// Price of each started step.
    pub unit_fare: u32,
}

impl FarePolicy {
    /// Create a policy with the given parameters.
    ///
    /// Step lengths of zero are treated as one so the tariff never divides
    /// by zero.
    pub fn new(
        base_fare: u32,
        base_km: u32,
        far_km: u32,
        mid_unit_km: u32,
        far_unit_km: u32,
        unit_fare: u32,
    ) -> Self {
        Self {
            base_fare,
            base_km,
            far_km: far_km.max(base_km),
            mid_unit_km: mid_unit_km.max(1),
            far_unit_km: far_unit_km.max(1),
            unit_fare,
        }
    }

    /// Fare for `distance` before any surcharge.
    pub fn base(&self, distance: Distance) -> u64 {
        let d = distance.value();
        let base_km = u64::from(self.base_km);
        let far_km = u64::from(self.far_km);

        let mid = d.min(far_km).saturating_sub(base_km);
        let far = d.saturating_sub(far_km);

        let mid_steps = mid.div_ceil(u64::from(self.mid_unit_km));
        let far_steps = far.div_ceil(u64::from(self.far_unit_km));
        let unit = u64::from(self.unit_fare);

        u64::from(self.base_fare)
            .saturating_add(unit.saturating_mul(mid_steps))
            .saturating_add(unit.saturating_mul(far_steps))
    }

    /// Fare for a route of `distance` over lines with the given surcharges.
    ///
    /// Only the largest surcharge is charged, not their sum.
    pub fn fare(&self, distance: Distance, surcharges: impl IntoIterator<Item = u32>) -> u64 {
        let surcharge = surcharges.into_iter().max().unwrap_or(0);
        self.base(distance).saturating_add(u64::from(surcharge))
    }
}

impl Default for FarePolicy {
    fn default() -> Self {
        Self {
            base_fare: 1250,
            base_km: 10,
            far_km: 50,
            mid_unit_km: 5,
            far_unit_km: 8,
            unit_fare: 100,
        }
    }
}

/// Fare under the default tariff.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
/// use subway_server::fare::fare;
///
/// let km = |n| Distance::new(n).unwrap();
/// assert_eq!(fare(km(10), []), 1250);
/// assert_eq!(fare(km(15), []), 1350);
/// assert_eq!(fare(km(60), []), 2250);
/// assert_eq!(fare(km(4), [300, 900]), 2150);
/// ```
pub fn fare(distance: Distance, surcharges: impl IntoIterator<Item = u32>) -> u64 {
    FarePolicy::default().fare(distance, surcharges)
}
