use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    IntoStaticStr,
    EnumString,
    EnumIter,
)]
#[repr(u8)]
pub enum Grade {
    #[default]
    U = 0,
    E = 1,
    D = 2,
    C = 3,
    B = 4,
    A = 5,
    S = 6,
}

/// A curve band: scores at or above `mean + offset * std_dev` earn `grade`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveBand {
    pub grade: Grade,
    pub offset: f64,
}

impl CurveBand {
    pub fn threshold(&self, mean: f64, std_dev: f64) -> f64 {
        mean + self.offset * std_dev
    }
}

/// Curve bands in evaluation order, highest first. Anything below the last
/// band is `U`.
pub const CURVE: [CurveBand; 6] = [
    CurveBand { grade: Grade::S, offset: 1.65 },
    CurveBand { grade: Grade::A, offset: 0.85 },
    CurveBand { grade: Grade::B, offset: 0.12 },
    CurveBand { grade: Grade::C, offset: -0.65 },
    CurveBand { grade: Grade::D, offset: -1.04 },
    CurveBand { grade: Grade::E, offset: -1.23 },
];

/// Minimum mean grade point for each overall grade, highest first.
pub const OVERALL_THRESHOLDS: [(Grade, f64); 6] = [
    (Grade::S, 9.0),
    (Grade::A, 8.0),
    (Grade::B, 7.0),
    (Grade::C, 6.0),
    (Grade::D, 5.0),
    (Grade::E, 4.0),
];

impl Grade {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Grade point carried by this letter (0 for `U`, 5..=10 otherwise)
    pub fn point(&self) -> u8 {
        match self {
            Self::S => 10,
            Self::A => 9,
            Self::B => 8,
            Self::C => 7,
            Self::D => 6,
            Self::E => 5,
            Self::U => 0,
        }
    }

    /// Classify a score against the class curve. First matching band wins and
    /// comparisons are inclusive, so a zero deviation puts every score in `S`.
    pub fn from_curve(score: f64, mean: f64, std_dev: f64) -> Self {
        CURVE
            .iter()
            .find(|band| score >= band.threshold(mean, std_dev))
            .map(|band| band.grade)
            .unwrap_or(Self::U)
    }

    /// Overall grade for a mean grade point
    pub fn from_mean_point(mean_point: f64) -> Self {
        OVERALL_THRESHOLDS
            .iter()
            .find(|(_, min)| mean_point >= *min)
            .map(|(grade, _)| *grade)
            .unwrap_or(Self::U)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
