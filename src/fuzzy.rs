//! Fuzzy classification of a numeric cell difference.
//!
//! The difference between two cell values is fuzzified against two fixed
//! triangular sets, `identical` (feet at -1 and 1) and `different` (feet at
//! -100 and 100), both sampled on the integer universe `-100..=100`. Each set
//! fires one rule whose consequent lives on the same universe: "identical"
//! pulls the output to the negative side, "different" to the positive side.
//! The clipped consequents are aggregated with `max` and defuzzified by
//! centroid; the sign of the centroid gives the label.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNIVERSE_MIN: i32 = -100;
pub const UNIVERSE_MAX: i32 = 100;

/// Triangular membership function with feet `a`, `c` and peak `b`.
///
/// `a == b` or `b == c` gives a shoulder that is fully on at the peak.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Triangle {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Triangle { a, b, c }
    }

    pub fn membership(&self, x: f64) -> f64 {
        if x == self.b {
            1.0
        } else if x > self.a && x < self.b {
            (x - self.a) / (self.b - self.a)
        } else if x > self.b && x < self.c {
            (self.c - x) / (self.c - self.b)
        } else {
            0.0
        }
    }
}

pub const IDENTICAL: Triangle = Triangle::new(-1.0, 0.0, 1.0);
pub const DIFFERENT: Triangle = Triangle::new(-100.0, 0.0, 100.0);

const IDENTICAL_OUT: Triangle = Triangle::new(-100.0, -100.0, 0.0);
const DIFFERENT_OUT: Triangle = Triangle::new(0.0, 100.0, 100.0);

/// Evenly spaced sample points the fuzzy sets are defined on.
#[derive(Clone, Debug, PartialEq)]
pub struct Universe {
    points: Vec<f64>,
}

impl Universe {
    /// Integer samples from `min` to `max`, inclusive.
    pub fn new(min: i32, max: i32) -> Self {
        Universe {
            points: (min..=max).map(f64::from).collect(),
        }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Sample a triangle on this universe.
    pub fn sample(&self, triangle: &Triangle) -> FuzzySet {
        FuzzySet {
            degrees: self.points.iter().map(|&x| triangle.membership(x)).collect(),
        }
    }

    /// Degree of membership of `x` in `set`, interpolated between samples.
    ///
    /// Points beyond the universe take the degree of the nearest end sample.
    /// NaN belongs to nothing.
    pub fn interp_membership(&self, set: &FuzzySet, x: f64) -> f64 {
        let points = &self.points;
        let degrees = &set.degrees;
        // NaN also comes from inf - inf, so two infinite cells never match
        if x.is_nan() || points.is_empty() {
            return 0.0;
        }

        let last = points.len() - 1;
        if x <= points[0] {
            return degrees[0];
        }
        if x >= points[last] {
            return degrees[last];
        }

        // Samples are one unit apart
        let i = ((x - points[0]).floor() as usize).min(last - 1);
        let t = x - points[i];
        degrees[i] + t * (degrees[i + 1] - degrees[i])
    }

    /// Centroid of `set` over this universe, or `None` when its area is zero.
    pub fn centroid(&self, set: &FuzzySet) -> Option<f64> {
        let n = self.points.len();
        let mut moment = 0.0;
        let mut area = 0.0;

        // Mirrored samples are summed together so a set that is symmetric
        // about zero has a moment of exactly zero.
        for i in 0..n.div_ceil(2) {
            let j = n - 1 - i;
            if i == j {
                moment += self.points[i] * set.degrees[i];
                area += set.degrees[i];
            } else {
                moment += self.points[i] * set.degrees[i] + self.points[j] * set.degrees[j];
                area += set.degrees[i] + set.degrees[j];
            }
        }

        if area == 0.0 {
            None
        } else {
            Some(moment / area)
        }
    }
}

/// Membership degrees of a fuzzy set, one per universe sample.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzySet {
    degrees: Vec<f64>,
}

impl FuzzySet {
    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }

    /// Mamdani implication: cap every degree at `level`.
    pub fn clip(&self, level: f64) -> FuzzySet {
        FuzzySet {
            degrees: self.degrees.iter().map(|&d| d.min(level)).collect(),
        }
    }

    /// Pointwise maximum of two sets on the same universe.
    pub fn union(&self, other: &FuzzySet) -> FuzzySet {
        FuzzySet {
            degrees: self
                .degrees
                .iter()
                .zip(&other.degrees)
                .map(|(a, b)| a.max(*b))
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Similarity {
    Identical,
    Different,
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Similarity::Identical => write!(f, "Identical"),
            Similarity::Different => write!(f, "Different"),
        }
    }
}

/// Outcome of classifying one difference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Assessment {
    pub identical_level: f64,
    pub different_level: f64,
    /// Defuzzified output; `None` when neither rule fired.
    pub score: Option<f64>,
    pub similarity: Similarity,
}

/// The fixed fuzzy system: two input sets, two output sets, one universe.
#[derive(Clone, Debug)]
pub struct Classifier {
    universe: Universe,
    identical: FuzzySet,
    different: FuzzySet,
    identical_out: FuzzySet,
    different_out: FuzzySet,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        let universe = Universe::new(UNIVERSE_MIN, UNIVERSE_MAX);
        Classifier {
            identical: universe.sample(&IDENTICAL),
            different: universe.sample(&DIFFERENT),
            identical_out: universe.sample(&IDENTICAL_OUT),
            different_out: universe.sample(&DIFFERENT_OUT),
            universe,
        }
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Classify `value1 - value2`.
    ///
    /// A score at or below zero is `Identical`; a positive score, or no
    /// score at all because the difference is outside both input sets, is
    /// `Different`.
    ///
    /// The identical set never rises above the different set, so the two
    /// levels only tie at a zero difference or when neither fires. Within
    /// double precision of the peak both levels round to 1.0; a tie at a
    /// nonzero difference is that rounding and still counts as `Different`.
    pub fn assess(&self, difference: f64) -> Assessment {
        let identical_level = self.universe.interp_membership(&self.identical, difference);
        let different_level = self.universe.interp_membership(&self.different, difference);

        let aggregate = self
            .identical_out
            .clip(identical_level)
            .union(&self.different_out.clip(different_level));
        let score = self.universe.centroid(&aggregate);

        let rounded_tie = difference != 0.0 && identical_level == different_level;
        let similarity = match score {
            Some(s) if s <= 0.0 && !rounded_tie => Similarity::Identical,
            _ => Similarity::Different,
        };

        Assessment {
            identical_level,
            different_level,
            score,
            similarity,
        }
    }

    pub fn classify(&self, difference: f64) -> Similarity {
        self.assess(difference).similarity
    }
}
