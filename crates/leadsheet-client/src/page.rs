//! The page surface the controller drives.
//!
//! A browser binding implements [`Page`] over real DOM handles; tests use an
//! in-memory page. Methods take `&self` because DOM handles are shared and
//! mutated in place.

use crate::notify::{Notice, NoticeStyle};

/// The four contact form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    /// `#name`
    Name,
    /// `#email`
    Email,
    /// `#company`
    Company,
    /// `#message`
    Message,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Company,
        FormField::Message,
    ];
}

/// Page elements whose visual state the controller changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// The menu button
    NavToggle,
    /// The collapsible menu panel
    NavMenu,
    /// The fixed navigation bar
    Navbar,
    /// The document body
    Body,
}

/// How a programmatic scroll should move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump directly
    Instant,
    /// Animate
    Smooth,
}

/// Whether the browser's default action for an event should still run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// The handler took over; suppress the default
    PreventDefault,
    /// Let the default run
    Default,
}

/// DOM operations used by [`SiteController`](crate::SiteController).
pub trait Page {
    /// Current value of a form input.
    fn field_value(&self, field: FormField) -> String;

    /// Clears every form input.
    fn reset_form(&self);

    /// Current label of the submit button.
    fn submit_label(&self) -> String;

    /// Sets the submit button's disabled flag and label.
    fn set_submit_state(&self, disabled: bool, label: &str);

    /// Adds a class to an element.
    fn add_class(&self, element: Element, class: &str);

    /// Removes a class from an element.
    fn remove_class(&self, element: Element, class: &str);

    /// Toggles a class on an element.
    fn toggle_class(&self, element: Element, class: &str);

    /// Vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    /// Document offset of the element an in-page anchor points at, if any.
    fn anchor_offset_top(&self, href: &str) -> Option<f64>;

    /// Scrolls the window to `top`.
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);

    /// Presents a notice in the given style.
    fn show_notice(&self, style: NoticeStyle, notice: &Notice);
}
