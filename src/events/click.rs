use super::{with_page, SharedPage};
use crate::constants::{ADVISORY_VISIBLE_MS, TARGET_A_SELECTOR, TARGET_B_SELECTOR};
use crate::dom;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pending hide of the advisory message. Replacing the value drops, and so
/// cancels, the previous countdown.
pub type AdvisoryTimer = Rc<RefCell<Option<Timeout>>>;

/// Show the advisory message and (re)start its hide countdown.
pub fn show_advisory(page: &SharedPage, timer: &AdvisoryTimer) {
    let token = with_page(page, |c, s| c.intercept_click(s));
    let page_for_hide = page.clone();
    let timeout = Timeout::new(ADVISORY_VISIBLE_MS, move || {
        with_page(&page_for_hide, |c, s| c.advisory_elapsed(token, s));
    });
    *timer.borrow_mut() = Some(timeout);
}

/// End of a press from any input device. A press that never moved counts as
/// a click and gets the advisory message.
pub fn release(page: &SharedPage, timer: &AdvisoryTimer) {
    let (outcome, stationary) = with_page(page, |c, s| {
        let outcome = c.end(s);
        (outcome, c.released_without_moving())
    });
    if outcome.is_some() && stationary {
        show_advisory(page, timer);
    }
}

/// The browser took the gesture away: drop the session without navigating
/// and without the hint.
pub fn cancel(page: &SharedPage) {
    with_page(page, |c, s| c.cancel(s));
}

/// Clicks on the nav links never follow the link; navigation only happens
/// by dropping the portrait on one of them.
pub fn wire_click_intercepts(document: &web::Document, page: &SharedPage, timer: &AdvisoryTimer) {
    for selector in [TARGET_A_SELECTOR, TARGET_B_SELECTOR] {
        let Some(el) = dom::query(document, selector) else {
            continue;
        };
        let page = page.clone();
        let timer = timer.clone();
        dom::listen(&el, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            show_advisory(&page, &timer);
        });
    }
}
