use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected tunables. Step functions never return these; they are raised
/// when a configuration is loaded, before any simulation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be non-negative and finite (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{what}: minimum {min} exceeds maximum {max}")]
    InvertedBounds { what: &'static str, min: f32, max: f32 },
    #[error("unknown stage `{0}`")]
    UnknownStage(String),
}

pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// Body, suit and fluid parameters for the vertical buoyancy model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerticalSpec {
    /// Fluid density (kg/m³). Fresh water at pool temperature.
    pub rho: f32,
    pub g: f32,
    pub astronaut_mass: f32,
    pub suit_mass: f32,
    pub equipment_mass: f32,
    /// Mass of one ballast unit (kg).
    pub ballast_step_kg: f32,
    /// Ballast units fitted when a stage starts.
    pub initial_ballast_units: u32,
    /// Displaced volume of body + suit + equipment (m³). `None` derives a
    /// near-neutral volume from astronaut and suit mass.
    pub rigid_volume_m3: Option<f32>,
    pub cd: f32,
    /// Cross-section presented to vertical motion (m²).
    pub area: f32,
    /// Added-mass coefficient.
    pub ca: f32,
    /// Linear damping (N·s/m).
    pub linear_damp: f32,
    pub micro_buoyancy_liters: f32,
    pub micro_hz: f32,
}

impl VerticalSpec {
    pub fn body_mass(&self) -> f32 {
        self.astronaut_mass + self.suit_mass + self.equipment_mass
    }

    pub fn rigid_volume(&self) -> f32 {
        self.rigid_volume_m3
            .unwrap_or((self.astronaut_mass + self.suit_mass) / self.rho)
    }

    /// Ballast mass that exactly cancels the static buoyancy imbalance.
    /// Negative when the body is already too heavy to float.
    pub fn neutral_ballast_kg(&self) -> f32 {
        self.rho * self.rigid_volume() - self.body_mass()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("vertical.rho", self.rho)?;
        require_positive("vertical.g", self.g)?;
        require_non_negative("vertical.astronaut_mass", self.astronaut_mass)?;
        require_non_negative("vertical.suit_mass", self.suit_mass)?;
        require_non_negative("vertical.equipment_mass", self.equipment_mass)?;
        require_non_negative("vertical.ballast_step_kg", self.ballast_step_kg)?;
        require_positive("vertical.rigid_volume", self.rigid_volume())?;
        require_non_negative("vertical.cd", self.cd)?;
        require_positive("vertical.area", self.area)?;
        require_non_negative("vertical.ca", self.ca)?;
        require_non_negative("vertical.linear_damp", self.linear_damp)?;
        require_non_negative("vertical.micro_buoyancy_liters", self.micro_buoyancy_liters)?;
        require_non_negative("vertical.micro_hz", self.micro_hz)?;
        Ok(())
    }
}

impl Default for VerticalSpec {
    fn default() -> Self {
        presets::emu_nbl_vertical()
    }
}

/// Procedural ambient current parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentSpec {
    /// Constant flow speed (m/s).
    pub base: f32,
    /// Amplitude of the slow gust oscillation (m/s).
    pub gust: f32,
    /// Gust frequency (Hz).
    pub freq: f32,
    pub gust_phase: f32,
    /// Lattice scale applied to world coordinates before noise lookup.
    pub noise_scale: f32,
    /// Perpendicular swirl gain applied to a centred second noise sample.
    pub swirl: f32,
    /// Distance over which flow ramps up from a wall (m).
    pub wall_damp_dist: f32,
    /// Fraction of flow that survives at a wall.
    pub wall_floor: f32,
}

impl CurrentSpec {
    /// Calm water: no ambient flow at all.
    pub fn still() -> Self {
        Self { base: 0.0, gust: 0.0, swirl: 0.0, ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("current.base", self.base)?;
        require_non_negative("current.gust", self.gust)?;
        require_non_negative("current.freq", self.freq)?;
        require_positive("current.noise_scale", self.noise_scale)?;
        require_non_negative("current.swirl", self.swirl)?;
        require_positive("current.wall_damp_dist", self.wall_damp_dist)?;
        if !(0.0..=1.0).contains(&self.wall_floor) {
            return Err(ConfigError::Negative { field: "current.wall_floor", value: self.wall_floor });
        }
        Ok(())
    }
}

impl Default for CurrentSpec {
    fn default() -> Self {
        Self {
            base: 0.12,
            gust: 0.1,
            freq: 0.03,
            gust_phase: 1.3,
            noise_scale: 0.18,
            swirl: 0.07,
            wall_damp_dist: 1.0,
            wall_floor: 0.08,
        }
    }
}

/// Planar propulsion and hydrodynamic parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizontalSpec {
    /// Fluid density for planar drag and added mass (kg/m³). Independent of
    /// `VerticalSpec::rho`; override both to move the trainee to other water.
    pub rho: f32,
    /// Mass used when the host supplies no coupled mass (kg).
    pub mass: f32,
    pub volume: f32,
    pub cd_fwd: f32,
    pub area_fwd: f32,
    pub cd_side: f32,
    pub area_side: f32,
    pub ca_fwd: f32,
    pub ca_side: f32,
    /// Nominal propulsive force (N).
    pub thrust_n: f32,
    pub boost: f32,
    /// Thrust smoothing time constant (s).
    pub thrust_rise_tau: f32,
    /// Drag gain per rad/s of yaw rate.
    pub turn_damp_k: f32,
    /// Blend applied to the tracked heading each step.
    pub heading_blend: f32,
    pub vmax_fwd: f32,
    pub vmax_side: f32,
    pub deadband_v: f32,
    pub current: CurrentSpec,
}

impl HorizontalSpec {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("horizontal.rho", self.rho)?;
        require_positive("horizontal.mass", self.mass)?;
        require_positive("horizontal.volume", self.volume)?;
        require_non_negative("horizontal.cd_fwd", self.cd_fwd)?;
        require_positive("horizontal.area_fwd", self.area_fwd)?;
        require_non_negative("horizontal.cd_side", self.cd_side)?;
        require_positive("horizontal.area_side", self.area_side)?;
        require_non_negative("horizontal.ca_fwd", self.ca_fwd)?;
        require_non_negative("horizontal.ca_side", self.ca_side)?;
        require_non_negative("horizontal.thrust_n", self.thrust_n)?;
        require_positive("horizontal.boost", self.boost)?;
        require_positive("horizontal.thrust_rise_tau", self.thrust_rise_tau)?;
        require_non_negative("horizontal.turn_damp_k", self.turn_damp_k)?;
        require_non_negative("horizontal.heading_blend", self.heading_blend)?;
        require_positive("horizontal.vmax_fwd", self.vmax_fwd)?;
        require_positive("horizontal.vmax_side", self.vmax_side)?;
        require_non_negative("horizontal.deadband_v", self.deadband_v)?;
        self.current.validate()
    }
}

impl Default for HorizontalSpec {
    fn default() -> Self {
        presets::emu_nbl_horizontal()
    }
}

/// How the vertical model's total mass feeds the horizontal model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouplingSpec {
    pub coefficient: f32,
    pub floor_kg: f32,
}

impl CouplingSpec {
    pub fn coupled_mass(&self, total_mass: f32) -> f32 {
        (total_mass * self.coefficient).max(self.floor_kg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("coupling.coefficient", self.coefficient)?;
        require_positive("coupling.floor_kg", self.floor_kg)
    }
}

impl Default for CouplingSpec {
    fn default() -> Self {
        Self { coefficient: 1.0, floor_kg: 100.0 }
    }
}

/// Complete physics configuration for one stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydroConfig {
    pub vertical: VerticalSpec,
    pub horizontal: HorizontalSpec,
    pub coupling: CouplingSpec,
}

impl HydroConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vertical.validate()?;
        self.horizontal.validate()?;
        self.coupling.validate()
    }
}

pub mod presets {
    use super::*;

    // Suited trainee in the pool: fresh water, unweighted near-neutral trim.
    pub fn emu_nbl_vertical() -> VerticalSpec {
        VerticalSpec {
            rho: 996.5,
            g: 9.81,
            astronaut_mass: 82.9,
            suit_mass: 145.0,
            equipment_mass: 0.0,
            ballast_step_kg: 1.0,
            initial_ballast_units: 0,
            rigid_volume_m3: None,
            cd: 1.0,
            area: 0.35,
            ca: 0.18,
            linear_damp: 6.0,
            micro_buoyancy_liters: 0.4,
            micro_hz: 0.06,
        }
    }

    pub fn emu_nbl_horizontal() -> HorizontalSpec {
        HorizontalSpec {
            rho: 1000.0,
            mass: 114.0,
            volume: 0.09,
            cd_fwd: 0.9,
            area_fwd: 0.35,
            cd_side: 1.2,
            area_side: 0.55,
            ca_fwd: 0.15,
            ca_side: 0.25,
            // Enough to reach vmax_fwd against an opposing current.
            thrust_n: 600.0,
            boost: 1.6,
            thrust_rise_tau: 0.08,
            turn_damp_k: 0.6,
            heading_blend: 0.6,
            vmax_fwd: 1.5,
            vmax_side: 1.1,
            deadband_v: 0.015,
            current: CurrentSpec::default(),
        }
    }
}
