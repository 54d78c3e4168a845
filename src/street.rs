//! Master street plan classification.

/// Right-of-way width, in feet, for a classification the plan does not list.
pub const DEFAULT_RIGHT_OF_WAY: u32 = 50;

const RIGHT_OF_WAY: &[(&str, u32)] = &[
    ("minor residential", 45),
    ("residential", 50),
    ("collector", 60),
    ("commercial", 60),
    ("minor arterial", 90),
    ("principal arterial", 110),
];

const STATE_HIGHWAYS: &[&str] = &[
    "INTERSTATE 30",
    "INTERSTATE 430",
    "INTERSTATE 440",
    "INTERSTATE 530",
    "INTERSTATE 630",
    "CANTRELL RD",
    "BROADWAY ST",
    "W ROOSEVELT RD",
    "S UNIVERSITY AVE",
    "N UNIVERSITY AVE",
    "BASELINE RD",
    "S ARCH ST",
    "STAGECOACH RD",
    "COLONEL GLENN RD",
];

/// A street near a parcel, as classified by the master street plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Street {
    pub name: String,
    /// Lower-cased plan classification, e.g. `"minor arterial"`.
    pub classification: String,
    /// Required right-of-way width in feet.
    pub row: u32,
    /// Built to an alternative design standard.
    pub alt: bool,
    /// Maintained by the state highway department.
    pub state: bool,
}

impl Street {
    /// Classifies a street from its plan attributes.
    #[must_use]
    pub fn classify(name: impl Into<String>, classification: &str, alt: bool) -> Self {
        let name = name.into();
        let classification = classification.to_lowercase();
        Self {
            row: right_of_way(&classification),
            state: is_state_highway(&name),
            name,
            classification,
            alt,
        }
    }
}

/// Right-of-way width for a plan classification, case-insensitive.
#[must_use]
pub fn right_of_way(classification: &str) -> u32 {
    let classification = classification.to_lowercase();
    RIGHT_OF_WAY
        .iter()
        .find(|(name, _)| *name == classification)
        .map_or(DEFAULT_RIGHT_OF_WAY, |&(_, row)| row)
}

/// Whether `name` is on the state highway list. Names are matched exactly as
/// the plan spells them.
#[must_use]
pub fn is_state_highway(name: &str) -> bool {
    STATE_HIGHWAYS.contains(&name)
}
