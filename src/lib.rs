#![cfg(target_arch = "wasm32")]
use crate::drag::{DragController, Stage};
use crate::events::{InputWiring, Page};
use crate::stage::DomStage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod advisory;
mod constants;
mod dom;
mod drag;
mod events;
mod finger;
mod geometry;
mod overlay;
mod stage;
mod viewport;

use constants::{ADVISORY_ID, ENTITY_ID, TARGET_A_SELECTOR, TARGET_B_SELECTOR};

fn wire_native_drag_suppression(entity: &web::HtmlImageElement) {
    entity.set_draggable(false);
    dom::listen(entity, "dragstart", |ev: web::Event| ev.prevent_default());
}

fn build_stage(document: &web::Document, entity: web::HtmlImageElement) -> DomStage {
    let target_a = stage::anchor_from(dom::query(document, TARGET_A_SELECTOR), TARGET_A_SELECTOR);
    let target_b = stage::anchor_from(dom::query(document, TARGET_B_SELECTOR), TARGET_B_SELECTOR);

    let advisory = document.get_element_by_id(ADVISORY_ID);
    match &advisory {
        Some(el) if !overlay::is_hidden(el) => overlay::hide(el),
        Some(_) => {}
        None => log::warn!("[init] missing #{}, advisory disabled", ADVISORY_ID),
    }
    DomStage::new(entity, target_a, target_b, advisory)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::sync_viewport_height_var(&window, &document);
    events::wire_hover_effects(&document);

    let entity_el = document
        .get_element_by_id(ENTITY_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ENTITY_ID))?;
    let entity: web::HtmlImageElement = entity_el
        .dyn_into::<web::HtmlImageElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not an <img>: {:?}", ENTITY_ID, e)))?;
    wire_native_drag_suppression(&entity);

    let mut stage = build_stage(&document, entity.clone());
    let rest = dom::rect_of(&entity).center();
    let viewport = dom::viewport_of(&window);
    stage.set_entity_position(rest);
    log::info!(
        "[init] portrait at ({:.1},{:.1}) viewport={}x{}",
        rest.x,
        rest.y,
        viewport.width,
        viewport.height
    );

    let page = Rc::new(RefCell::new(Page {
        controller: DragController::new(rest, viewport),
        stage,
    }));
    let advisory_timer: events::AdvisoryTimer = Rc::new(RefCell::new(None));

    let wiring = InputWiring {
        entity: entity.unchecked_into::<web::HtmlElement>(),
        page: page.clone(),
        advisory_timer: advisory_timer.clone(),
    };
    events::wire_input_handlers(wiring.clone());
    events::wire_touch_handlers(wiring);
    events::wire_click_intercepts(&document, &page, &advisory_timer);
    events::wire_resize(&window, &page);

    Ok(())
}
