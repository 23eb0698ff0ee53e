use super::{with_page, SharedPage};
use crate::dom;
use web_sys as web;

pub fn wire_resize(window: &web::Window, page: &SharedPage) {
    let page = page.clone();
    let wnd = window.clone();
    dom::listen(window, "resize", move |_ev: web::Event| {
        let next = dom::viewport_of(&wnd);
        with_page(&page, |c, s| {
            c.on_resize(next, s);
            let pos = c.position();
            log::debug!(
                "[resize] {}x{} portrait at ({:.1},{:.1})",
                next.width,
                next.height,
                pos.x,
                pos.y
            );
        });
        if let Some(document) = wnd.document() {
            dom::sync_viewport_height_var(&wnd, &document);
        }
    });
}
