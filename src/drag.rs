use crate::advisory::Advisory;
use crate::constants::SNAP_THRESHOLD;
use crate::geometry::{Circle, Rect};
use crate::viewport::Viewport;
use glam::Vec2;

/// One of the two drop zones. `A` is checked first everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    A,
    B,
}

impl Target {
    #[inline]
    pub fn image(self) -> ImageVariant {
        match self {
            Target::A => ImageVariant::TargetA,
            Target::B => ImageVariant::TargetB,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageVariant {
    #[default]
    Default,
    TargetA,
    TargetB,
}

/// What a drop resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Navigate(Target),
    Reset,
}

/// Per-gesture bookkeeping, alive only while dragging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    /// Pointer minus entity center at the moment of the grab.
    pub offset: Vec2,
    pub moved: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(Session),
}

/// Layout queries and visual side effects the controller needs from the page.
///
/// Queries return `None` when the element is missing; the controller then
/// skips whatever depended on it.
pub trait Stage {
    fn entity_rect(&self) -> Option<Rect>;
    fn target_rect(&self, target: Target) -> Option<Rect>;

    fn set_entity_position(&mut self, pos: Vec2);
    fn set_entity_image(&mut self, image: ImageVariant);
    fn set_grabbing(&mut self, grabbing: bool);
    fn set_targets_armed(&mut self, armed: bool);
    fn set_advisory_visible(&mut self, visible: bool);
    fn navigate(&mut self, target: Target);
}

#[inline]
fn target_circle<S: Stage + ?Sized>(stage: &S, target: Target) -> Option<Circle> {
    stage.target_rect(target).map(|r| Circle::from_anchor(&r))
}

/// Magnetic snap: pull `desired` onto a target center when it is within
/// `SNAP_THRESHOLD`. A wins when it is at least as close as B.
pub fn snap_position(desired: Vec2, a: Option<&Circle>, b: Option<&Circle>) -> Vec2 {
    let da = a.map_or(f32::INFINITY, |c| c.distance_to(desired));
    let db = b.map_or(f32::INFINITY, |c| c.distance_to(desired));
    match (a, b) {
        (Some(ca), _) if da < SNAP_THRESHOLD && da <= db => ca.center,
        (_, Some(cb)) if db < SNAP_THRESHOLD => cb.center,
        _ => desired,
    }
}

/// Which target's circle contains `point`, checking A before B.
pub fn containing_target(point: Vec2, a: Option<&Circle>, b: Option<&Circle>) -> Option<Target> {
    if a.is_some_and(|c| c.contains(point)) {
        Some(Target::A)
    } else if b.is_some_and(|c| c.contains(point)) {
        Some(Target::B)
    } else {
        None
    }
}

/// Owns all transient interaction state for the page: the drag state machine,
/// the portrait's position and image, the advisory message and the viewport.
#[derive(Debug)]
pub struct DragController {
    phase: DragPhase,
    position: Vec2,
    image: ImageVariant,
    viewport: Viewport,
    advisory: Advisory,
    stationary_release: bool,
}

impl DragController {
    pub fn new(rest_position: Vec2, viewport: Viewport) -> Self {
        Self {
            phase: DragPhase::Idle,
            position: rest_position,
            image: ImageVariant::Default,
            viewport,
            advisory: Advisory::default(),
            stationary_release: false,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    #[cfg(test)]
    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[cfg(test)]
    #[inline]
    pub fn image(&self) -> ImageVariant {
        self.image
    }

    #[cfg(test)]
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[cfg(test)]
    #[inline]
    pub fn advisory_visible(&self) -> bool {
        self.advisory.is_visible()
    }

    /// True when the last finished gesture was a press and release with no
    /// movement in between.
    #[inline]
    pub fn released_without_moving(&self) -> bool {
        self.stationary_release
    }

    /// Idle -> Dragging. Ignored while a session is already active or when
    /// the entity cannot be measured.
    pub fn begin<S: Stage + ?Sized>(&mut self, pointer: Vec2, stage: &mut S) {
        if self.is_dragging() {
            return;
        }
        let Some(rect) = stage.entity_rect() else {
            log::warn!("[drag] begin skipped: entity not measurable");
            return;
        };
        let offset = pointer - rect.center();
        self.phase = DragPhase::Dragging(Session {
            offset,
            moved: false,
        });
        self.stationary_release = false;
        stage.set_grabbing(true);
        stage.set_targets_armed(true);
        log::info!(
            "[drag] begin at ({:.1},{:.1}) offset=({:.1},{:.1})",
            pointer.x,
            pointer.y,
            offset.x,
            offset.y
        );
    }

    /// Dragging -> Dragging. Moves the entity (snapping onto a close target)
    /// and refreshes the image. Returns the applied position.
    pub fn update<S: Stage + ?Sized>(&mut self, pointer: Vec2, stage: &mut S) -> Option<Vec2> {
        let DragPhase::Dragging(session) = &mut self.phase else {
            return None;
        };
        session.moved = true;
        let desired = pointer - session.offset;

        let a = target_circle(stage, Target::A);
        let b = target_circle(stage, Target::B);
        let pos = snap_position(desired, a.as_ref(), b.as_ref());
        self.position = pos;
        stage.set_entity_position(pos);

        let hit = stage
            .entity_rect()
            .and_then(|r| containing_target(r.center(), a.as_ref(), b.as_ref()));
        self.show_image(hit.map_or(ImageVariant::Default, Target::image), stage);
        log::debug!("[drag] move to ({:.1},{:.1}) hit={:?}", pos.x, pos.y, hit);
        Some(pos)
    }

    /// Dragging -> Idle. Navigates when released over a target, otherwise
    /// resets the image and leaves the entity where it was dropped.
    pub fn end<S: Stage + ?Sized>(&mut self, stage: &mut S) -> Option<DropOutcome> {
        let DragPhase::Dragging(session) = self.phase else {
            return None;
        };
        let a = target_circle(stage, Target::A);
        let b = target_circle(stage, Target::B);
        let hit = stage
            .entity_rect()
            .and_then(|r| containing_target(r.center(), a.as_ref(), b.as_ref()));

        self.phase = DragPhase::Idle;
        self.stationary_release = !session.moved;
        stage.set_grabbing(false);
        stage.set_targets_armed(false);

        let outcome = match hit {
            Some(target) => {
                stage.navigate(target);
                DropOutcome::Navigate(target)
            }
            None => {
                self.show_image(ImageVariant::Default, stage);
                DropOutcome::Reset
            }
        };
        log::info!("[drag] drop -> {:?}", outcome);
        Some(outcome)
    }

    /// Dragging -> Idle without a drop: the gesture was interrupted, so the
    /// image resets and nothing navigates, wherever the entity is.
    pub fn cancel<S: Stage + ?Sized>(&mut self, stage: &mut S) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.phase = DragPhase::Idle;
        self.stationary_release = false;
        stage.set_grabbing(false);
        stage.set_targets_armed(false);
        self.show_image(ImageVariant::Default, stage);
        log::info!("[drag] cancelled");
        true
    }

    /// A click that did not come from a drop: never navigates, shows the
    /// advisory message instead. The returned token is handed back through
    /// `advisory_elapsed` once the hide delay has passed.
    pub fn intercept_click<S: Stage + ?Sized>(&mut self, stage: &mut S) -> u64 {
        let token = self.advisory.trigger();
        stage.set_advisory_visible(true);
        log::info!("[click] intercepted, advisory shown (#{})", token);
        token
    }

    /// Hides the advisory message if `token` belongs to the latest click.
    pub fn advisory_elapsed<S: Stage + ?Sized>(&mut self, token: u64, stage: &mut S) -> bool {
        let hidden = self.advisory.expire(token);
        if hidden {
            stage.set_advisory_visible(false);
        }
        hidden
    }

    /// Keeps the resting spot proportional to the window size.
    pub fn on_resize<S: Stage + ?Sized>(&mut self, next: Viewport, stage: &mut S) {
        let pos = self.viewport.rescale(self.position, &next);
        self.viewport = next;
        if pos != self.position {
            self.position = pos;
            stage.set_entity_position(pos);
        }
    }

    fn show_image<S: Stage + ?Sized>(&mut self, image: ImageVariant, stage: &mut S) {
        if self.image != image {
            self.image = image;
            stage.set_entity_image(image);
        }
    }
}
