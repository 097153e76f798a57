//! Page behaviour for the marketing site.
//!
//! One [`SiteController`] is built when the page loads and owns its page
//! handle, transport, and notifier. Each DOM event is bound to one method.

use std::sync::Arc;

use leadsheet_core::ContactRequest;
use tracing::{debug, error};

use crate::notify::{Notice, Notifier};
use crate::page::{Disposition, Element, FormField, Page, ScrollBehavior};
use crate::transport::ContactTransport;

/// Class marking the open menu and its button.
pub const ACTIVE_CLASS: &str = "active";
/// Class marking the navbar once the page is scrolled.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Class marking the body once the page has loaded.
pub const LOADED_CLASS: &str = "loaded";
/// Submit label while a request is in flight.
pub const SENDING_LABEL: &str = "Sending...";
/// Height of the fixed header that scroll targets must clear.
pub const HEADER_OFFSET: f64 = 80.0;
/// Scroll depth past which the navbar is marked scrolled.
pub const SCROLL_THRESHOLD: f64 = 100.0;

/// How one submit attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored
    Sent,
    /// The service answered and refused it
    Rejected,
    /// No usable answer arrived
    Unavailable,
}

/// Sends `request` through `transport` and tells `notifier` how it went.
///
/// Transport errors are logged and reported with the fixed unavailable
/// notice; they never propagate.
pub async fn deliver<T, N>(transport: &T, request: &ContactRequest, notifier: &N) -> SubmitOutcome
where
    T: ContactTransport + ?Sized,
    N: Notifier + ?Sized,
{
    match transport.submit(request).await {
        Ok(response) => {
            notifier.notify(&Notice::from_response(&response));
            if response.success {
                SubmitOutcome::Sent
            } else {
                SubmitOutcome::Rejected
            }
        }
        Err(e) => {
            error!("Error submitting form: {e}");
            notifier.notify(&Notice::unavailable());
            SubmitOutcome::Unavailable
        }
    }
}

/// Event handlers for the site, bound once at page initialization.
pub struct SiteController<P, T, N> {
    page: Arc<P>,
    transport: T,
    notifier: N,
}

impl<P, T, N> SiteController<P, T, N>
where
    P: Page,
    T: ContactTransport,
    N: Notifier,
{
    /// Creates the controller.
    pub fn new(page: Arc<P>, transport: T, notifier: N) -> Self {
        Self {
            page,
            transport,
            notifier,
        }
    }

    /// The page this controller drives.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// The transport submissions go through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The notifier outcomes are reported to.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Menu button click: open or close the menu.
    pub fn on_nav_toggle(&self) {
        self.page.toggle_class(Element::NavMenu, ACTIVE_CLASS);
        self.page.toggle_class(Element::NavToggle, ACTIVE_CLASS);
    }

    /// Navigation link click: close the menu.
    pub fn on_nav_link_click(&self) {
        self.page.remove_class(Element::NavMenu, ACTIVE_CLASS);
        self.page.remove_class(Element::NavToggle, ACTIVE_CLASS);
    }

    /// In-page anchor click: smooth scroll so the target clears the header.
    ///
    /// The native jump is always suppressed, even when the target is missing.
    pub fn on_anchor_click(&self, href: &str) -> Disposition {
        if let Some(top) = self.page.anchor_offset_top(href) {
            self.page.scroll_to(top - HEADER_OFFSET, ScrollBehavior::Smooth);
        } else {
            debug!(%href, "Anchor target not found");
        }
        Disposition::PreventDefault
    }

    /// Window scroll: mark the navbar once past the threshold.
    pub fn on_scroll(&self) {
        if self.page.scroll_y() > SCROLL_THRESHOLD {
            self.page.add_class(Element::Navbar, SCROLLED_CLASS);
        } else {
            self.page.remove_class(Element::Navbar, SCROLLED_CLASS);
        }
    }

    /// Window load: start the fade-in.
    pub fn on_load(&self) {
        self.page.add_class(Element::Body, LOADED_CLASS);
    }

    /// Form submit: send the fields and report the outcome.
    ///
    /// The binding suppresses native form submission. The submit button is
    /// disabled for the duration of the call and restored however it ends,
    /// including when this future is dropped mid-flight. The form is cleared
    /// only when the submission was stored.
    pub async fn on_submit(&self) -> SubmitOutcome {
        let request = self.read_form();
        let _busy = BusyButton::engage(&*self.page);

        let outcome = deliver(&self.transport, &request, &self.notifier).await;
        if outcome == SubmitOutcome::Sent {
            self.page.reset_form();
        }
        outcome
    }

    fn read_form(&self) -> ContactRequest {
        let [name, email, company, message] = FormField::ALL.map(|f| self.page.field_value(f));
        ContactRequest::new(name, email, company, message)
    }
}

/// Disables the submit button until dropped, then restores its label.
struct BusyButton<'a, P: Page> {
    page: &'a P,
    label: String,
}

impl<'a, P: Page> BusyButton<'a, P> {
    fn engage(page: &'a P) -> Self {
        let label = page.submit_label();
        page.set_submit_state(true, SENDING_LABEL);
        Self { page, label }
    }
}

impl<P: Page> Drop for BusyButton<'_, P> {
    fn drop(&mut self) {
        self.page.set_submit_state(false, &self.label);
    }
}
