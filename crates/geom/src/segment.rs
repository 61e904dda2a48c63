use crate::Point;

/// Common APIs to segment types.
pub trait Segment: Copy + Sized {
    /// Start of the curve.
    fn from(&self) -> Point;

    /// End of the curve.
    fn to(&self) -> Point;

    /// Sample the curve at t (expecting t between 0 and 1).
    fn sample(&self, t: f64) -> Point;

    /// Number of steps used to sample the segment at a given density.
    fn num_steps(&self, density: f64) -> usize;

    /// Returns an iterator over `num_steps(density) + 1` points evenly spaced
    /// in t, starting exactly at `from()` and ending exactly at `to()`.
    fn sampled(&self, density: f64) -> FixedStep<Self> {
        FixedStep::new(*self, self.num_steps(density))
    }
}

/// An iterator sampling a segment at `t = i / steps` for `i` in `0..=steps`.
///
/// The first and last points are the segment's endpoints, bit for bit, so
/// vertices never drift regardless of rounding in the interior samples. With
/// zero steps only the start point is produced.
#[derive(Clone, Debug)]
pub struct FixedStep<S> {
    segment: S,
    steps: usize,
    i: usize,
    done: bool,
}

impl<S: Segment> FixedStep<S> {
    pub fn new(segment: S, steps: usize) -> Self {
        FixedStep {
            segment,
            steps,
            i: 0,
            done: false,
        }
    }

    /// Total number of points this iterator produces from the start.
    pub fn num_points(&self) -> usize {
        self.steps.saturating_add(1)
    }
}

impl<S: Segment> Iterator for FixedStep<S> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let i = self.i;
        let p = if i == 0 {
            self.segment.from()
        } else if i == self.steps {
            self.segment.to()
        } else {
            self.segment.sample(i as f64 / self.steps as f64)
        };

        if i == self.steps {
            self.done = true;
        } else {
            self.i += 1;
        }

        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let n = (self.steps - self.i).saturating_add(1);
        (n, Some(n))
    }
}
