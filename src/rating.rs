use serde::{Serialize, Serializer};

/// Qualitative bucket for how much floor stays open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CirculationRating {
    Poor,
    Tight,
    Adequate,
    Good,
    Excellent,
}

impl CirculationRating {
    /// Classify an unrounded open-space percent; bands are inclusive at their lower bound.
    pub fn from_open_percent(percent: f64) -> Self {
        if percent >= 70.0 {
            CirculationRating::Excellent
        } else if percent >= 60.0 {
            CirculationRating::Good
        } else if percent >= 50.0 {
            CirculationRating::Adequate
        } else if percent >= 40.0 {
            CirculationRating::Tight
        } else {
            CirculationRating::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CirculationRating::Excellent => "Excellent - Very spacious",
            CirculationRating::Good => "Good - Comfortable circulation",
            CirculationRating::Adequate => "Adequate - Functional but cozy",
            CirculationRating::Tight => "Tight - May feel cramped",
            CirculationRating::Poor => "Poor - Too crowded",
        }
    }
}

impl std::fmt::Display for CirculationRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CirculationRating {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
