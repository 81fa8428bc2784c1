use std::collections::BTreeSet;

use log::debug;

use crate::{
    AdviceRecord, MuscleID, advice,
    region::{self, RegionToken, View},
};

/// Session state of the body diagram.
///
/// The state is a plain value: every transition returns the new state and leaves the old one
/// untouched, so the owner decides when to notify the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub muscle: Option<MuscleID>,
    pub view: View,
}

impl Selection {
    /// Applies a click on a diagram region. Unmapped regions leave the selection unchanged.
    #[must_use]
    pub fn click(self, token: &str) -> Self {
        match region::resolve(token) {
            Some(muscle) => self.select(muscle),
            None => {
                debug!("ignoring click on unmapped region {token}");
                self
            }
        }
    }

    #[must_use]
    pub fn select(self, muscle: MuscleID) -> Self {
        Self {
            muscle: Some(muscle),
            ..self
        }
    }

    #[must_use]
    pub fn clear(self) -> Self {
        Self {
            muscle: None,
            ..self
        }
    }

    #[must_use]
    pub fn flip_view(self) -> Self {
        Self {
            view: self.view.flip(),
            ..self
        }
    }

    #[must_use]
    pub fn is_selected(&self, muscle: MuscleID) -> bool {
        self.muscle == Some(muscle)
    }

    /// Regions to highlight in the current view.
    #[must_use]
    pub fn highlighted(&self) -> BTreeSet<RegionToken> {
        self.muscle
            .map(|muscle| region::expand_in_view(muscle, self.view))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn advice(&self) -> Option<&'static AdviceRecord> {
        advice::lookup(self.muscle)
    }
}
