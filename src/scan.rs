use crate::engine::CompiledExpr;
use crate::error::{EvalError, IntervalError};
use log::trace;
use std::str::FromStr;

/// Upper bound on the number of points a single [`Scan`] produces.
pub const MAX_SAMPLES: usize = u32::MAX as usize;

/// A closed range `[from, to]` for the free variable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub from: f64,
    pub to: f64,
}

impl Interval {
    pub fn new(from: f64, to: f64) -> Result<Self, IntervalError> {
        for bound in [from, to] {
            if !bound.is_finite() {
                return Err(IntervalError::Bound(bound.to_string()));
            }
        }
        if from > to {
            return Err(IntervalError::Reversed { from, to });
        }
        Ok(Self { from, to })
    }

    pub fn width(&self) -> f64 {
        self.to - self.from
    }

    /// Step that splits the interval into `segments` equal parts.
    pub fn step_for(&self, segments: usize) -> f64 {
        self.width() / segments.max(1) as f64
    }
}

/// Parses `"[from;to]"`. Brackets are optional and whitespace is ignored.
impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);
        let (from, to) = inner
            .split_once(';')
            .ok_or_else(|| IntervalError::Syntax(s.to_string()))?;
        let bound = |part: &str| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|_| IntervalError::Bound(part.to_string()))
        };
        Interval::new(bound(from)?, bound(to)?)
    }
}

/// One sample of a scan. A failed evaluation is reported, not skipped, so a
/// plotter can lift the pen at `x` and carry on.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: Result<f64, EvalError>,
}

/// Evaluates a compiled expression at `from, from + step, ...` up to and
/// including `to`.
///
/// Points are computed as `from + i * step` rather than accumulated, so long
/// scans do not drift.
pub struct Scan<'a> {
    expr: &'a CompiledExpr,
    from: f64,
    step: f64,
    next: usize,
    len: usize,
}

impl<'a> Scan<'a> {
    pub(crate) fn new(
        expr: &'a CompiledExpr,
        interval: Interval,
        step: f64,
    ) -> Result<Self, IntervalError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(IntervalError::Step(step));
        }
        let too_many = || IntervalError::TooManySamples {
            width: interval.width(),
            step,
            limit: MAX_SAMPLES,
        };
        // tolerate rounding so that e.g. [0;1] with step 0.1 still ends at 1
        let segments = (interval.width() / step + 1e-9).floor();
        if !segments.is_finite() || segments >= MAX_SAMPLES as f64 {
            return Err(too_many());
        }
        let len = (segments as usize).checked_add(1).ok_or_else(too_many)?;
        Ok(Self {
            expr,
            from: interval.from,
            step,
            next: 0,
            len,
        })
    }
}

impl Iterator for Scan<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.next >= self.len {
            return None;
        }
        let x = self.from + self.next as f64 * self.step;
        self.next += 1;
        let y = self.expr.eval(x);
        if let Err(e) = &y {
            trace!("lifting pen at x={}: {}", x, e);
        }
        Some(Sample { x, y })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Scan<'_> {}
