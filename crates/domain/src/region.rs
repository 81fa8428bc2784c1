//! Mapping between the clickable regions of the body diagram and muscles.
//!
//! Clicks are resolved through a many-to-one alias table. Highlighting uses a separately authored
//! one-to-many table, because a selected muscle may need to light up more (or other) regions than
//! the ones that select it.

use std::collections::BTreeSet;

use derive_more::Display;
use log::debug;

use crate::MuscleID;

#[derive(Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RegionToken(String);

impl AsRef<str> for RegionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RegionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum View {
    #[default]
    Anterior,
    Posterior,
}

impl View {
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            View::Anterior => View::Posterior,
            View::Posterior => View::Anterior,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            View::Anterior => "Front",
            View::Posterior => "Back",
        }
    }

    fn regions(self) -> &'static [&'static str] {
        match self {
            View::Anterior => &ANTERIOR_REGIONS,
            View::Posterior => &POSTERIOR_REGIONS,
        }
    }

    fn running_regions(self) -> &'static [&'static str] {
        match self {
            View::Anterior => &RUNNING_ANTERIOR_REGIONS,
            View::Posterior => &RUNNING_POSTERIOR_REGIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionInfo {
    pub token: RegionToken,
    pub muscle: Option<MuscleID>,
    pub running_relevant: bool,
}

// Folding of overlapping regions (e.g. head into neck) happens here, never at lookup time.
static ALIASES: [(&str, MuscleID); 20] = [
    ("quadriceps", MuscleID::Quadriceps),
    ("hamstring", MuscleID::Hamstrings),
    ("gluteal", MuscleID::Glutes),
    ("calves", MuscleID::Calves),
    ("adductor", MuscleID::Adductors),
    ("lower-back", MuscleID::LowerBack),
    ("obliques", MuscleID::Core),
    ("abs", MuscleID::Core),
    ("trapezius", MuscleID::Trapezius),
    ("upper-back", MuscleID::UpperBack),
    ("chest", MuscleID::Chest),
    ("biceps", MuscleID::Biceps),
    ("triceps", MuscleID::Triceps),
    ("forearm", MuscleID::Forearm),
    ("front-deltoids", MuscleID::Deltoids),
    ("back-deltoids", MuscleID::Deltoids),
    ("abductors", MuscleID::Abductors),
    ("neck", MuscleID::Neck),
    ("head", MuscleID::Neck),
    (KNEE_ZONE, MuscleID::Knee),
];

const KNEE_ZONE: &str = "knee";

/// Selectable zones provided by the application itself, shown in every view.
const APPLICATION_ZONES: [&str; 1] = [KNEE_ZONE];

const ANTERIOR_REGIONS: [&str; 14] = [
    "trapezius",
    "chest",
    "biceps",
    "triceps",
    "forearm",
    "front-deltoids",
    "abs",
    "obliques",
    "adductor",
    "quadriceps",
    "abductors",
    "calves",
    "head",
    "neck",
];

const POSTERIOR_REGIONS: [&str; 12] = [
    "trapezius",
    "upper-back",
    "lower-back",
    "biceps",
    "triceps",
    "forearm",
    "back-deltoids",
    "gluteal",
    "hamstring",
    "calves",
    "head",
    "neck",
];

const RUNNING_ANTERIOR_REGIONS: [&str; 12] = [
    "quadriceps",
    "calves",
    "adductor",
    "abs",
    "obliques",
    "chest",
    "front-deltoids",
    "trapezius",
    "biceps",
    "triceps",
    "forearm",
    "neck",
];

const RUNNING_POSTERIOR_REGIONS: [&str; 11] = [
    "hamstring",
    "gluteal",
    "calves",
    "lower-back",
    "upper-back",
    "trapezius",
    "back-deltoids",
    "biceps",
    "triceps",
    "forearm",
    "neck",
];

fn highlighted_regions(muscle: MuscleID) -> &'static [&'static str] {
    #[allow(clippy::match_same_arms)]
    match muscle {
        MuscleID::Quadriceps => &["quadriceps"],
        MuscleID::Hamstrings => &["hamstring"],
        MuscleID::Glutes => &["gluteal"],
        MuscleID::Calves => &["calves"],
        // Hip flexors are not drawn separately
        MuscleID::HipFlexors => &["adductor"],
        MuscleID::Adductors => &["adductor"],
        MuscleID::LowerBack => &["lower-back"],
        MuscleID::Core => &["obliques", "abs"],
        MuscleID::Trapezius => &["trapezius"],
        MuscleID::UpperBack => &["upper-back"],
        MuscleID::Chest => &["chest"],
        MuscleID::Biceps => &["biceps"],
        MuscleID::Triceps => &["triceps"],
        MuscleID::Forearm => &["forearm"],
        MuscleID::Deltoids => &["front-deltoids", "back-deltoids"],
        MuscleID::Abductors => &["abductors"],
        MuscleID::Neck => &["neck", "head"],
        // Knee overlaps the quadriceps visually
        MuscleID::Knee => &["quadriceps", KNEE_ZONE],
    }
}

/// Resolves a region token from the diagram to a muscle.
///
/// Only exact matches resolve. `None` means the region is not mapped; callers should leave the
/// current selection untouched.
#[must_use]
pub fn resolve(token: &str) -> Option<MuscleID> {
    let muscle = ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, muscle)| *muscle);
    if muscle.is_none() {
        debug!("region not mapped to muscle: {token}");
    }
    muscle
}

/// Returns all regions to highlight for a muscle, regardless of the view.
#[must_use]
pub fn expand(muscle: MuscleID) -> BTreeSet<RegionToken> {
    highlighted_regions(muscle)
        .iter()
        .map(|region| RegionToken::from(*region))
        .collect()
}

/// Returns the regions to highlight for a muscle that are drawable in the given view.
///
/// The result may be empty, e.g. for hip flexors in the posterior view.
#[must_use]
pub fn expand_in_view(muscle: MuscleID, view: View) -> BTreeSet<RegionToken> {
    highlighted_regions(muscle)
        .iter()
        .filter(|region| is_drawable(region, view))
        .map(|region| RegionToken::from(*region))
        .collect()
}

#[must_use]
pub fn is_drawable(token: &str, view: View) -> bool {
    view.regions().contains(&token) || APPLICATION_ZONES.contains(&token)
}

/// Lists the regions drawn by the diagram in the given view.
#[must_use]
pub fn regions(view: View) -> Vec<RegionInfo> {
    view.regions()
        .iter()
        .map(|region| RegionInfo {
            token: RegionToken::from(*region),
            muscle: ALIASES
                .iter()
                .find(|(alias, _)| alias == region)
                .map(|(_, muscle)| *muscle),
            running_relevant: view.running_regions().contains(region),
        })
        .collect()
}

/// Lists the zones the application adds next to the diagram.
#[must_use]
pub fn zones() -> Vec<RegionInfo> {
    APPLICATION_ZONES
        .iter()
        .map(|zone| RegionInfo {
            token: RegionToken::from(*zone),
            muscle: resolve(zone),
            running_relevant: true,
        })
        .collect()
}

pub fn aliases() -> impl Iterator<Item = (&'static str, MuscleID)> {
    ALIASES.iter().copied()
}
