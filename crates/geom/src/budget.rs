use crate::SampleError;

/// Upper bound on the number of points a sampling run may produce.
///
/// Sampling loops reserve their point count before allocating anything, so a
/// tiny density on a huge shape fails fast instead of exhausting memory. The
/// run is aborted as a whole: a partially sampled shape would be geometrically
/// wrong.
///
/// ## Example
///
/// ```
/// use svg_points_geom::{PointBudget, SampleError};
///
/// let mut budget = PointBudget::new(10);
/// budget.reserve(8).unwrap();
/// assert_eq!(budget.remaining(), 2);
/// assert_eq!(budget.reserve(3), Err(SampleError::TooManyPoints { limit: 10 }));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PointBudget {
    limit: usize,
    used: usize,
}

impl PointBudget {
    pub const DEFAULT_LIMIT: usize = 1_000_000;

    pub const DEFAULT: Self = PointBudget {
        limit: Self::DEFAULT_LIMIT,
        used: 0,
    };

    /// No ceiling at all. Sampling huge shapes at a small density then
    /// allocates without bound.
    pub const UNLIMITED: Self = PointBudget {
        limit: usize::MAX,
        used: 0,
    };

    pub fn new(limit: usize) -> Self {
        PointBudget { limit, used: 0 }
    }

    /// Account for `count` more points, or fail if that would exceed the limit.
    ///
    /// A failed reservation does not consume anything.
    pub fn reserve(&mut self, count: usize) -> Result<(), SampleError> {
        match self.used.checked_add(count) {
            Some(total) if total <= self.limit => {
                self.used = total;
                Ok(())
            }
            _ => Err(SampleError::TooManyPoints { limit: self.limit }),
        }
    }

    /// Give back points that were reserved but not emitted.
    pub fn release(&mut self, count: usize) {
        self.used = self.used.saturating_sub(count);
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    pub fn used(&self) -> usize {
        self.used
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit - self.used
    }
}

impl Default for PointBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn overflowing_reservation() {
    let mut budget = PointBudget::new(usize::MAX);
    budget.reserve(usize::MAX - 1).unwrap();
    assert!(budget.reserve(usize::MAX).is_err());
    assert_eq!(budget.used(), usize::MAX - 1);
    budget.reserve(1).unwrap();
    assert_eq!(budget.remaining(), 0);
}

#[test]
fn default_budget_is_bounded() {
    let mut budget = PointBudget::default();
    assert_eq!(budget.limit(), 1_000_000);
    assert!(budget.reserve(1_000_000).is_ok());
    assert_eq!(
        budget.reserve(1),
        Err(SampleError::TooManyPoints { limit: 1_000_000 })
    );
    assert_eq!(PointBudget::UNLIMITED.limit(), usize::MAX);
}

#[test]
fn release_gives_points_back() {
    let mut budget = PointBudget::new(5);
    budget.reserve(5).unwrap();
    budget.release(2);
    assert_eq!(budget.remaining(), 2);
    budget.release(10);
    assert_eq!(budget.used(), 0);
}
