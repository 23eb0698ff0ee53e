use crate::constants::{HOVER_SCALE, REST_SCALE, TARGET_A_SELECTOR, TARGET_B_SELECTOR};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_scale(el: &web::HtmlElement, scale: f32) {
    _ = el
        .style()
        .set_property("transform", &format!("scale({})", scale));
}

/// Slight grow on the nav links while the mouse is over them.
pub fn wire_hover_effects(document: &web::Document) {
    for selector in [TARGET_A_SELECTOR, TARGET_B_SELECTOR] {
        let Some(link) = dom::query(document, selector)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };

        let enter = link.clone();
        dom::listen(&link, "mouseenter", move |_ev: web::MouseEvent| {
            set_scale(&enter, HOVER_SCALE);
        });
        let leave = link.clone();
        dom::listen(&link, "mouseleave", move |_ev: web::MouseEvent| {
            set_scale(&leave, REST_SCALE);
        });
    }
}
