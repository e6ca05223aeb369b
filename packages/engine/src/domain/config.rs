//! Physics configuration
//!
//! One value built at startup (or loaded from JSON) and passed by reference to
//! everything that needs a tuning constant. Units are world units and ticks.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsConfig {
    /// Outward offset applied after every snap, and the "close enough" threshold.
    pub epsilon: f64,
    /// Downward acceleration per tick.
    pub gravity: f64,
    pub max_fall_speed: f64,
    /// Lips up to `height * tier1` are stepped over at full speed.
    pub tier1_max_height_factor: f64,
    /// Lips up to `height * tier2` are stepped over with `tier2_friction`.
    pub tier2_max_height_factor: f64,
    pub tier2_friction: f64,
    pub water_gravity_factor: f64,
    pub water_damping: f64,
    pub ground_damping: f64,
    /// How far below the feet the ground confirmation probe looks.
    pub ground_probe_distance: f64,
    /// Max gap between feet and surface for the probe to count as ground.
    pub ground_snap_tolerance: f64,
    /// Fraction of body height (from the top) sampled for submersion.
    pub submerged_sample_factor: f64,
    pub separation_strength: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-4,
            gravity: 0.4,
            max_fall_speed: 12.0,
            tier1_max_height_factor: 0.25,
            tier2_max_height_factor: 0.5,
            tier2_friction: 0.5,
            water_gravity_factor: 0.35,
            water_damping: 0.85,
            ground_damping: 0.8,
            ground_probe_distance: 1.0,
            ground_snap_tolerance: 1.0,
            submerged_sample_factor: 0.5,
            separation_strength: 0.25,
        }
    }
}

impl PhysicsConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let cfg: PhysicsConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        let finite = [
            ("epsilon", self.epsilon),
            ("gravity", self.gravity),
            ("maxFallSpeed", self.max_fall_speed),
            ("tier1MaxHeightFactor", self.tier1_max_height_factor),
            ("tier2MaxHeightFactor", self.tier2_max_height_factor),
            ("tier2Friction", self.tier2_friction),
            ("waterGravityFactor", self.water_gravity_factor),
            ("waterDamping", self.water_damping),
            ("groundDamping", self.ground_damping),
            ("groundProbeDistance", self.ground_probe_distance),
            ("groundSnapTolerance", self.ground_snap_tolerance),
            ("submergedSampleFactor", self.submerged_sample_factor),
            ("separationStrength", self.separation_strength),
        ];
        for (name, v) in finite.iter() {
            if !v.is_finite() {
                return Err(format!("{} must be finite, got {}", name, v));
            }
        }

        if self.epsilon <= 0.0 {
            return Err(format!("epsilon must be > 0, got {}", self.epsilon));
        }
        if self.max_fall_speed <= 0.0 {
            return Err(format!("maxFallSpeed must be > 0, got {}", self.max_fall_speed));
        }
        if self.tier1_max_height_factor <= 0.0
            || self.tier1_max_height_factor > self.tier2_max_height_factor
        {
            return Err(format!(
                "step tiers must satisfy 0 < tier1 <= tier2 (tier1={}, tier2={})",
                self.tier1_max_height_factor, self.tier2_max_height_factor
            ));
        }

        let unit = [
            ("tier2Friction", self.tier2_friction),
            ("waterDamping", self.water_damping),
            ("groundDamping", self.ground_damping),
            ("submergedSampleFactor", self.submerged_sample_factor),
        ];
        for (name, v) in unit.iter() {
            if !(0.0..=1.0).contains(v) {
                return Err(format!("{} must be within [0, 1], got {}", name, v));
            }
        }

        if self.ground_probe_distance <= 0.0 || self.ground_snap_tolerance <= 0.0 {
            return Err("ground probe distance and snap tolerance must be > 0".to_string());
        }
        Ok(())
    }
}
