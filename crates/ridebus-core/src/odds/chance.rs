use core::cmp::Ordering;
use core::fmt;

/// Exact probability as a count of favorable cards over a pool of unseen
/// cards. Comparisons cross-multiply in u64 so an exact tie is detected as
/// `Ordering::Equal` with no float rounding involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chance {
    favorable: u32,
    pool: u32,
}

impl Chance {
    pub const fn new(favorable: u32, pool: u32) -> Self {
        Self { favorable, pool }
    }

    pub const fn favorable(self) -> u32 {
        self.favorable
    }

    pub const fn pool(self) -> u32 {
        self.pool
    }

    /// Not an Ord impl: 1/2 and 2/4 compare equal here while the derived
    /// Eq treats them as distinct values.
    pub fn compare(self, other: Chance) -> Ordering {
        let lhs = u64::from(self.favorable) * u64::from(other.pool);
        let rhs = u64::from(other.favorable) * u64::from(self.pool);
        lhs.cmp(&rhs)
    }

    /// Approximate value, for display and telemetry only.
    pub fn as_f64(self) -> f64 {
        if self.pool == 0 {
            return 0.0;
        }
        f64::from(self.favorable) / f64::from(self.pool)
    }
}

impl fmt::Display for Chance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.favorable, self.pool)
    }
}
