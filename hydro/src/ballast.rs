use serde::{Deserialize, Serialize};

use crate::VerticalSpec;

/// Discrete ballast the trainee trims with, one unit per adjust action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ballast {
    units: u32,
    step_kg: f32,
}

impl Ballast {
    pub fn new(units: u32, step_kg: f32) -> Self {
        Self { units, step_kg: step_kg.max(0.0) }
    }

    pub fn from_spec(spec: &VerticalSpec) -> Self {
        Self::new(spec.initial_ballast_units, spec.ballast_step_kg)
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    pub fn mass_kg(&self) -> f32 {
        self.units as f32 * self.step_kg
    }

    pub fn add_unit(&mut self) {
        self.units = self.units.saturating_add(1);
    }

    /// Removing from an empty rig is a no-op.
    pub fn remove_unit(&mut self) {
        self.units = self.units.saturating_sub(1);
    }

    /// Set from an untrusted count; negatives clamp to zero.
    pub fn set_units(&mut self, units: i64) {
        self.units = units.clamp(0, u32::MAX as i64) as u32;
    }

    /// Apply a signed number of adjust actions.
    pub fn adjust(&mut self, delta: i32) {
        self.set_units(self.units as i64 + delta as i64);
    }
}
