pub mod click;
pub mod hover;
pub mod pointer;
pub mod resize;
pub mod touch;

use crate::drag::DragController;
use crate::stage::DomStage;
use std::cell::RefCell;
use std::rc::Rc;

pub use click::{wire_click_intercepts, AdvisoryTimer};
pub use hover::wire_hover_effects;
pub use pointer::{wire_input_handlers, InputWiring};
pub use resize::wire_resize;
pub use touch::wire_touch_handlers;

/// Everything the event handlers share: one controller, one view of the page.
pub struct Page {
    pub controller: DragController,
    pub stage: DomStage,
}

pub type SharedPage = Rc<RefCell<Page>>;

/// Borrow the page once and hand both halves to `f`.
#[inline]
pub fn with_page<R>(page: &SharedPage, f: impl FnOnce(&mut DragController, &mut DomStage) -> R) -> R {
    let mut guard = page.borrow_mut();
    let Page { controller, stage } = &mut *guard;
    f(controller, stage)
}
