use glam::Vec2;

/// Last known window size, used to keep the portrait's resting spot in the
/// same relative place when the window changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scale `pos` from this viewport into `next`, per axis. An axis whose
    /// previous extent is not positive keeps its coordinate.
    pub fn rescale(&self, pos: Vec2, next: &Viewport) -> Vec2 {
        Vec2::new(
            rescale_axis(pos.x, self.width, next.width),
            rescale_axis(pos.y, self.height, next.height),
        )
    }
}

#[inline]
fn rescale_axis(value: f32, old_extent: f32, new_extent: f32) -> f32 {
    if old_extent > 0.0 && old_extent != new_extent {
        value * new_extent / old_extent
    } else {
        value
    }
}
