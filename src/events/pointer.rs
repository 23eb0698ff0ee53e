use super::click::{self, AdvisoryTimer};
use super::{with_page, SharedPage};
use crate::dom;
use glam::Vec2;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub entity: web::HtmlElement,
    pub page: SharedPage,
    pub advisory_timer: AdvisoryTimer,
}

// Mouse and pen go through pointer events; touch has its own handlers in
// `touch.rs` and is ignored here so one finger never drives two sessions.
#[inline]
fn is_touch(ev: &web::PointerEvent) -> bool {
    ev.pointer_type() == "touch"
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let entity = w.entity.clone();

    dom::listen(&entity, "pointerdown", move |ev: web::PointerEvent| {
        if is_touch(&ev) || ev.button() != 0 {
            return;
        }
        with_page(&w.page, |c, s| c.begin(client_pos(&ev), s));
        _ = w.entity.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let Some(wnd) = web::window() else {
        return;
    };

    dom::listen(&wnd, "pointermove", move |ev: web::PointerEvent| {
        if is_touch(&ev) || !w.page.borrow().controller.is_dragging() {
            return;
        }
        with_page(&w.page, |c, s| c.update(client_pos(&ev), s));
        ev.prevent_default();
    });
}

fn wire_pointerup(w: &InputWiring) {
    let Some(wnd) = web::window() else {
        return;
    };

    {
        let w = w.clone();
        dom::listen(&wnd, "pointerup", move |ev: web::PointerEvent| {
            if is_touch(&ev) {
                return;
            }
            click::release(&w.page, &w.advisory_timer);
        });
    }

    let w = w.clone();
    dom::listen(&wnd, "pointercancel", move |ev: web::PointerEvent| {
        if is_touch(&ev) {
            return;
        }
        click::cancel(&w.page);
    });
}
