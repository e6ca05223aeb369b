use serde::Serialize;

/// Axis-aligned body. `(x, y)` is the top-left corner; y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsBody {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Velocity in world units per tick
    pub vx: f64,
    pub vy: f64,
    /// Resting on a surface. Persisted across ticks.
    pub on_ground: bool,
}

impl PhysicsBody {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
        }
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.width * 0.5
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y + self.height * 0.5
    }

    /// Finite coordinates and velocity, strictly positive size.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.vx.is_finite()
            && self.vy.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// True if the two boxes overlap by more than `eps` on both axes.
    pub fn overlaps(&self, other: &PhysicsBody, eps: f64) -> bool {
        self.left() < other.right() - eps
            && other.left() < self.right() - eps
            && self.top() < other.bottom() - eps
            && other.top() < self.bottom() - eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_follow_top_left_origin() {
        let b = PhysicsBody::new(10.0, 20.0, 4.0, 8.0);
        assert_eq!(b.right(), 14.0);
        assert_eq!(b.bottom(), 28.0);
        assert_eq!(b.center_x(), 12.0);
        assert_eq!(b.center_y(), 24.0);
    }

    #[test]
    fn invalid_geometry_is_detected() {
        assert!(PhysicsBody::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!PhysicsBody::new(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!PhysicsBody::new(0.0, 0.0, 1.0, -2.0).is_valid());
        assert!(!PhysicsBody::new(f64::NAN, 0.0, 1.0, 1.0).is_valid());
        assert!(!PhysicsBody::new(0.0, 0.0, 1.0, 1.0).with_velocity(f64::INFINITY, 0.0).is_valid());
    }

    #[test]
    fn touching_boxes_do_not_overlap() {
        let a = PhysicsBody::new(0.0, 0.0, 10.0, 10.0);
        let b = PhysicsBody::new(10.0, 0.0, 10.0, 10.0);
        let c = PhysicsBody::new(5.0, 5.0, 10.0, 10.0);
        assert!(!a.overlaps(&b, 1e-4));
        assert!(a.overlaps(&c, 1e-4));
    }
}
