use serde::Serialize;

/// How a lip was stepped over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepTier {
    /// Low lip: horizontal velocity kept as is.
    Effortless,
    /// Taller lip: horizontal velocity scaled by `tier2_friction`.
    Slowed,
}

/// What happened during one `resolve` call
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CollisionResult {
    /// Horizontal motion was stopped by a wall (not set when the wall was stepped over)
    pub collided_x: bool,
    /// Vertical motion was stopped by a floor or ceiling
    pub collided_y: bool,
    /// Ground contact confirmed this tick
    pub is_on_ground: bool,
    pub did_step_up: bool,
    pub step_tier: Option<StepTier>,
}

impl CollisionResult {
    #[inline]
    pub fn no_move() -> Self {
        Self::default()
    }

    #[inline]
    pub fn any_collision(&self) -> bool {
        self.collided_x || self.collided_y
    }
}

/// Earliest solid cell found by a sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Hit {
    /// Fraction of the requested displacement travelled before contact, in [0, 1)
    pub toi: f64,
    pub col: i32,
    pub row: i32,
    /// World coordinate of the block face that was reached
    pub face: f64,
}
