//! User-facing outcome notices.

use std::sync::Arc;

use leadsheet_core::ContactResponse;

use crate::page::Page;

/// Shown on success when the service sends no message.
pub const DEFAULT_SUCCESS_MESSAGE: &str =
    "Thank you for your message! We will get back to you soon.";

/// Shown on a rejected submission when the service sends no message.
pub const DEFAULT_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

/// Shown when the service could not be reached at all.
pub const UNAVAILABLE_MESSAGE: &str =
    "Failed to send message. Please make sure the server is running and try again.";

/// What kind of outcome a notice reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// The submission was stored
    Success,
    /// The service answered but refused the submission
    Failure,
    /// No usable answer from the service
    Unavailable,
}

/// A message for the user about one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Outcome category
    pub kind: NoticeKind,
    /// Text to show
    pub message: String,
}

impl Notice {
    /// Notice for a structured service response, applying default text.
    pub fn from_response(response: &ContactResponse) -> Self {
        let (kind, fallback) = if response.success {
            (NoticeKind::Success, DEFAULT_SUCCESS_MESSAGE)
        } else {
            (NoticeKind::Failure, DEFAULT_FAILURE_MESSAGE)
        };
        let message = response
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string();
        Self { kind, message }
    }

    /// Notice for a transport failure.
    pub fn unavailable() -> Self {
        Self {
            kind: NoticeKind::Unavailable,
            message: UNAVAILABLE_MESSAGE.to_string(),
        }
    }
}

/// How a notice is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeStyle {
    /// Blocking modal dialog
    #[default]
    Dialog,
    /// Transient toast
    Toast,
    /// Inline banner next to the form
    Banner,
}

/// Anything that can tell the user how a submission went.
pub trait Notifier {
    /// Presents `notice`.
    fn notify(&self, notice: &Notice);
}

/// Renders notices on a [`Page`] in a fixed style.
pub struct PageNotifier<P> {
    page: Arc<P>,
    style: NoticeStyle,
}

impl<P: Page> PageNotifier<P> {
    /// Notifier drawing on `page` with `style`.
    pub fn new(page: Arc<P>, style: NoticeStyle) -> Self {
        Self { page, style }
    }
}

impl<P: Page> Notifier for PageNotifier<P> {
    fn notify(&self, notice: &Notice) {
        self.page.show_notice(self.style, notice);
    }
}

/// Writes notices to stdout (success) or stderr (everything else).
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => println!("{}", notice.message),
            NoticeKind::Failure | NoticeKind::Unavailable => eprintln!("{}", notice.message),
        }
    }
}
