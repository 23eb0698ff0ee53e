use crate::constants::{
    ARMED_CLASS, DRAG_SCALE, GRABBING_CLASS, REST_SCALE, SRC_A_ATTR, SRC_B_ATTR, SRC_DEFAULT_ATTR,
};
use crate::dom;
use crate::drag::{ImageVariant, Stage, Target};
use crate::geometry::Rect;
use crate::overlay;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Image sources for the three portrait variants.
#[derive(Clone, Debug, Default)]
pub struct ImageSources {
    pub default: String,
    pub target_a: Option<String>,
    pub target_b: Option<String>,
}

impl ImageSources {
    pub fn from_entity(img: &web::HtmlImageElement) -> Self {
        Self {
            default: img
                .get_attribute(SRC_DEFAULT_ATTR)
                .unwrap_or_else(|| img.src()),
            target_a: img.get_attribute(SRC_A_ATTR),
            target_b: img.get_attribute(SRC_B_ATTR),
        }
    }

    fn get(&self, image: ImageVariant) -> &str {
        let variant = match image {
            ImageVariant::Default => None,
            ImageVariant::TargetA => self.target_a.as_deref(),
            ImageVariant::TargetB => self.target_b.as_deref(),
        };
        variant.unwrap_or(self.default.as_str())
    }
}

/// The live page as seen by the drag controller.
///
/// The portrait is positioned with `left`/`top` on its center
/// (`translate(-50%, -50%)`), so the position written here is the center the
/// controller reasons about.
pub struct DomStage {
    pub entity: web::HtmlImageElement,
    pub target_a: Option<web::HtmlAnchorElement>,
    pub target_b: Option<web::HtmlAnchorElement>,
    pub advisory: Option<web::Element>,
    pub sources: ImageSources,
    scale: f32,
}

impl DomStage {
    pub fn new(
        entity: web::HtmlImageElement,
        target_a: Option<web::HtmlAnchorElement>,
        target_b: Option<web::HtmlAnchorElement>,
        advisory: Option<web::Element>,
    ) -> Self {
        let sources = ImageSources::from_entity(&entity);
        Self {
            entity,
            target_a,
            target_b,
            advisory,
            sources,
            scale: REST_SCALE,
        }
    }

    pub fn anchor(&self, target: Target) -> Option<&web::HtmlAnchorElement> {
        match target {
            Target::A => self.target_a.as_ref(),
            Target::B => self.target_b.as_ref(),
        }
    }

    fn apply_transform(&self) {
        _ = self.entity.style().set_property(
            "transform",
            &format!("translate(-50%, -50%) scale({})", self.scale),
        );
    }
}

impl Stage for DomStage {
    fn entity_rect(&self) -> Option<Rect> {
        self.entity
            .is_connected()
            .then(|| dom::rect_of(&self.entity))
    }

    fn target_rect(&self, target: Target) -> Option<Rect> {
        self.anchor(target).map(|a| dom::rect_of(a))
    }

    fn set_entity_position(&mut self, pos: Vec2) {
        let style = self.entity.style();
        _ = style.set_property("position", "fixed");
        _ = style.set_property("left", &format!("{}px", pos.x));
        _ = style.set_property("top", &format!("{}px", pos.y));
        self.apply_transform();
    }

    fn set_entity_image(&mut self, image: ImageVariant) {
        let src = self.sources.get(image);
        if self.entity.src() != src {
            self.entity.set_src(src);
        }
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        self.scale = if grabbing { DRAG_SCALE } else { REST_SCALE };
        _ = self.entity.class_list().toggle_with_force(GRABBING_CLASS, grabbing);
        _ = self
            .entity
            .style()
            .set_property("cursor", if grabbing { "grabbing" } else { "grab" });
        self.apply_transform();
    }

    fn set_targets_armed(&mut self, armed: bool) {
        for anchor in [&self.target_a, &self.target_b].into_iter().flatten() {
            _ = anchor.class_list().toggle_with_force(ARMED_CLASS, armed);
        }
    }

    fn set_advisory_visible(&mut self, visible: bool) {
        if let Some(el) = &self.advisory {
            overlay::set_visible(el, visible);
        }
    }

    fn navigate(&mut self, target: Target) {
        let Some(href) = self.anchor(target).map(|a| a.href()) else {
            log::warn!("[drag] no anchor for target {:?}, navigation skipped", target);
            return;
        };
        log::info!("[drag] navigate -> {}", href);
        if let Some(window) = web::window() {
            _ = window.location().set_href(&href);
        }
    }
}

/// Cast a queried element to the anchor type, warning when it is missing.
pub fn anchor_from(el: Option<web::Element>, what: &str) -> Option<web::HtmlAnchorElement> {
    let anchor = el.and_then(|e| e.dyn_into::<web::HtmlAnchorElement>().ok());
    if anchor.is_none() {
        log::warn!("[init] missing {}, target disabled", what);
    }
    anchor
}
