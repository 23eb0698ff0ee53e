use crate::constants::HIDDEN_CLASS;
use web_sys as web;

// Show/hide for the advisory text. Uses the `hidden` class and an inline
// display fallback for pages without the stylesheet.

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    _ = el.remove_attribute("style");
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    _ = el.set_attribute("style", "display:none");
}

#[inline]
pub fn is_hidden(el: &web::Element) -> bool {
    if el.class_list().contains(HIDDEN_CLASS) {
        return true;
    }
    el.get_attribute("style")
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

#[inline]
pub fn set_visible(el: &web::Element, visible: bool) {
    if visible {
        show(el);
    } else {
        hide(el);
    }
}
