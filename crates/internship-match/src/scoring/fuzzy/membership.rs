use serde::Serialize;

/// Triangular membership over breakpoints `a <= b <= c`.
///
/// Degree rises linearly from 0 at `a` to 1 at `b` and falls back to 0 at `c`.
/// `a == b` yields a left shoulder and `b == c` a right shoulder; outside
/// `[a, c]` the degree is 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Triangular {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Triangular {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        debug_assert!(a <= b && b <= c, "triangular breakpoints must be ordered");
        Self { a, b, c }
    }

    pub fn degree(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;

        if x == b {
            1.0
        } else if a < x && x < b {
            (x - a) / (b - a)
        } else if b < x && x < c {
            (c - x) / (c - b)
        } else {
            0.0
        }
    }
}

/// Bounded numeric range sampled at a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Universe {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Universe {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Sample points `min, min + step, ..., max`. Empty when the range or step is unusable.
    pub fn points(&self) -> Vec<f64> {
        let usable = self.step > 0.0 && self.max >= self.min;
        if !usable {
            return Vec::new();
        }

        let count = ((self.max - self.min) / self.step).round() as usize + 1;
        (0..count)
            .map(|index| self.min + index as f64 * self.step)
            .collect()
    }
}
