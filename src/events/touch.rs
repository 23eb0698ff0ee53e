use super::click;
use super::pointer::InputWiring;
use super::with_page;
use crate::dom;
use crate::finger::FingerLock;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn touch_list(list: &web::TouchList) -> impl Iterator<Item = web::Touch> + '_ {
    (0..list.length()).filter_map(move |i| list.get(i))
}

#[inline]
fn touch_pos(t: &web::Touch) -> Vec2 {
    Vec2::new(t.client_x() as f32, t.client_y() as f32)
}

// The finger that grabbed the portrait owns the session; other fingers
// landing, moving or lifting meanwhile are ignored.
pub fn wire_touch_handlers(w: InputWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let lock = Rc::new(RefCell::new(FingerLock::default()));

    {
        let w = w.clone();
        let lock = lock.clone();
        let entity = w.entity.clone();
        dom::listen_active(&entity, "touchstart", move |ev: web::TouchEvent| {
            ev.prevent_default();
            if lock.borrow().owner().is_some() || w.page.borrow().controller.is_dragging() {
                return;
            }
            let Some(touch) = ev.changed_touches().get(0) else {
                return;
            };
            let started = with_page(&w.page, |c, s| {
                c.begin(touch_pos(&touch), s);
                c.is_dragging()
            });
            if started {
                lock.borrow_mut().claim(touch.identifier());
            }
        });
    }

    {
        let w = w.clone();
        let lock = lock.clone();
        dom::listen_active(&document, "touchmove", move |ev: web::TouchEvent| {
            let touches = ev.touches();
            let Some(pos) = lock
                .borrow()
                .pick(touch_list(&touches).map(|t| (t.identifier(), touch_pos(&t))))
            else {
                return;
            };
            with_page(&w.page, |c, s| c.update(pos, s));
            ev.prevent_default();
        });
    }

    {
        let w = w.clone();
        let lock = lock.clone();
        dom::listen(&document, "touchend", move |ev: web::TouchEvent| {
            let lifted = ev.changed_touches();
            if lock
                .borrow_mut()
                .lift(touch_list(&lifted).map(|t| t.identifier()))
            {
                click::release(&w.page, &w.advisory_timer);
            }
        });
    }

    dom::listen(&document, "touchcancel", move |ev: web::TouchEvent| {
        let lifted = ev.changed_touches();
        if lock
            .borrow_mut()
            .lift(touch_list(&lifted).map(|t| t.identifier()))
        {
            click::cancel(&w.page);
        }
    });
}
