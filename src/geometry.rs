use glam::Vec2;

/// Axis-aligned layout box as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Square box of side `size` centered on `center`.
    #[cfg(test)]
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self::new(center.x - size * 0.5, center.y - size * 0.5, size, size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// Circular drop zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// The circle inscribed across an anchor's width: centered on the box,
    /// radius half the box width.
    #[inline]
    pub fn from_anchor(rect: &Rect) -> Self {
        Self {
            center: rect.center(),
            radius: rect.width * 0.5,
        }
    }

    #[inline]
    pub fn distance_to(&self, p: Vec2) -> f32 {
        self.center.distance(p)
    }

    // Points on the boundary count as inside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.distance_to(p) <= self.radius
    }
}
