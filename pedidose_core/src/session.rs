//! Session state for one interactive run.
//!
//! The session owns everything mutable: the current patient weight, the
//! dose history, and the last status message. It is passed explicitly to
//! the command handlers; the computation modules stay pure and take no
//! implicit state.

use crate::engine::kg_from_lb;
use crate::history::DoseHistory;
use crate::{Status, StatusLevel};

/// Weight band outside which an accepted weight is flagged with a caution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightBounds {
    pub caution_min_kg: f64,
    pub caution_max_kg: f64,
}

impl Default for WeightBounds {
    fn default() -> Self {
        Self {
            caution_min_kg: 5.0,
            caution_max_kg: 99.0,
        }
    }
}

impl WeightBounds {
    /// Classify an already-validated (positive) weight.
    ///
    /// Out-of-band weights are advisory only: the value is still accepted.
    pub fn classify(&self, weight_kg: f64) -> StatusLevel {
        if weight_kg < self.caution_min_kg || weight_kg > self.caution_max_kg {
            StatusLevel::Caution
        } else {
            StatusLevel::Success
        }
    }
}

/// All mutable state for one interactive session. Lost on exit.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub weight_kg: Option<f64>,
    pub history: DoseHistory,
    pub status: Option<Status>,
    pub bounds: WeightBounds,
}

impl Session {
    pub fn new(bounds: WeightBounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Record a new patient weight in kilograms.
    ///
    /// The caller has already rejected non-positive input; this only
    /// classifies the value against the caution band and updates status.
    pub fn set_weight_kg(&mut self, weight_kg: f64) -> &Status {
        self.weight_kg = Some(weight_kg);
        let status = match self.bounds.classify(weight_kg) {
            StatusLevel::Caution => Status::caution(format!(
                "Weight {}kg is outside the usual {}-{}kg range; double-check before dosing",
                weight_kg, self.bounds.caution_min_kg, self.bounds.caution_max_kg
            )),
            _ => Status::success(format!("Weight set to {}kg", weight_kg)),
        };
        self.set_status(status)
    }

    /// Record a new patient weight entered in pounds (converted at 2dp).
    pub fn set_weight_lb(&mut self, weight_lb: f64) -> &Status {
        let weight_kg = kg_from_lb(weight_lb);
        self.weight_kg = Some(weight_kg);
        let status = match self.bounds.classify(weight_kg) {
            StatusLevel::Caution => Status::caution(format!(
                "{}lb = {}kg is outside the usual {}-{}kg range; double-check before dosing",
                weight_lb, weight_kg, self.bounds.caution_min_kg, self.bounds.caution_max_kg
            )),
            _ => Status::success(format!("Weight set to {}kg ({}lb)", weight_kg, weight_lb)),
        };
        self.set_status(status)
    }

    /// Replace the one-line status message.
    pub fn set_status(&mut self, status: Status) -> &Status {
        self.status.insert(status)
    }

    /// Drop all history and reset the status accordingly.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.status = Some(Status::success("History cleared"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_inside_band_is_success() {
        let mut session = Session::default();
        let status = session.set_weight_kg(10.0);
        assert_eq!(status.level, StatusLevel::Success);
        assert_eq!(session.weight_kg, Some(10.0));
    }

    #[test]
    fn test_weight_outside_band_accepted_with_caution() {
        let mut session = Session::default();
        let status = session.set_weight_kg(120.0);
        assert_eq!(status.level, StatusLevel::Caution);
        // Advisory only: the value is still in effect
        assert_eq!(session.weight_kg, Some(120.0));
    }

    #[test]
    fn test_band_edges_are_not_cautions() {
        let bounds = WeightBounds::default();
        assert_eq!(bounds.classify(5.0), StatusLevel::Success);
        assert_eq!(bounds.classify(99.0), StatusLevel::Success);
        assert_eq!(bounds.classify(4.99), StatusLevel::Caution);
        assert_eq!(bounds.classify(99.01), StatusLevel::Caution);
    }

    #[test]
    fn test_pound_entry_converts_at_two_decimals() {
        let mut session = Session::default();
        session.set_weight_lb(22.0);
        assert_eq!(session.weight_kg, Some(10.0));

        session.set_weight_lb(10.0);
        assert_eq!(session.weight_kg, Some(4.55));
    }

    #[test]
    fn test_pound_entry_caution_uses_converted_weight() {
        let mut session = Session::default();
        let status = session.set_weight_lb(4.4); // 2kg
        assert_eq!(status.level, StatusLevel::Caution);
    }

    #[test]
    fn test_clear_history_resets_status() {
        let mut session = Session::default();
        session.set_status(Status::error("boom"));
        session.clear_history();
        assert_eq!(session.status.as_ref().unwrap().level, StatusLevel::Success);
        assert!(session.history.is_empty());
    }
}
