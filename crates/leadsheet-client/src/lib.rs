//! # leadsheet-client
//!
//! Client side of the contact form.
//!
//! - [`SiteController`]: page behaviour (menu, smooth scroll, navbar shadow,
//!   fade-in, form submission) over a [`Page`] abstraction
//! - [`ContactTransport`] / [`HttpTransport`]: delivery of the payload
//! - [`Notifier`]: how outcomes reach the user (dialog, toast, banner, console)

#![warn(clippy::all)]

pub mod controller;
pub mod error;
pub mod notify;
pub mod page;
pub mod transport;

pub use controller::{deliver, SiteController, SubmitOutcome};
pub use error::{Error, Result};
pub use notify::{ConsoleNotifier, Notice, NoticeKind, NoticeStyle, Notifier, PageNotifier};
pub use page::{Disposition, Element, FormField, Page, ScrollBehavior};
pub use transport::{ContactTransport, HttpTransport};
