//! Common test doubles for controller tests: an in-memory page, a scripted
//! transport, and a notifier that records what it was asked to show.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use leadsheet_client::{
    ContactTransport, Element, Error, FormField, Notice, NoticeStyle, Notifier, Page,
    ScrollBehavior,
};
use leadsheet_core::{ContactRequest, ContactResponse};

/// Observable state of [`MemoryPage`].
#[derive(Debug, Default)]
pub struct PageState {
    pub fields: HashMap<FormField, String>,
    pub submit_label: String,
    pub submit_disabled: bool,
    pub classes: HashMap<Element, HashSet<String>>,
    pub scroll_y: f64,
    pub anchors: HashMap<String, f64>,
    pub scrolls: Vec<(f64, ScrollBehavior)>,
    pub notices: Vec<(NoticeStyle, Notice)>,
}

/// A page held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryPage {
    pub state: Mutex<PageState>,
}

impl MemoryPage {
    /// A page with a "Send Message" button and the given form values.
    pub fn with_form(name: &str, email: &str, company: &str, message: &str) -> Arc<Self> {
        let page = Self::default();
        {
            let mut s = page.state.lock().unwrap();
            s.submit_label = "Send Message".to_string();
            s.fields.insert(FormField::Name, name.to_string());
            s.fields.insert(FormField::Email, email.to_string());
            s.fields.insert(FormField::Company, company.to_string());
            s.fields.insert(FormField::Message, message.to_string());
        }
        Arc::new(page)
    }

    pub fn has_class(&self, element: Element, class: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .classes
            .get(&element)
            .is_some_and(|c| c.contains(class))
    }

    pub fn field(&self, field: FormField) -> String {
        self.field_value(field)
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.state.lock().unwrap().scroll_y = y;
    }

    pub fn add_anchor(&self, href: &str, top: f64) {
        self.state.lock().unwrap().anchors.insert(href.to_string(), top);
    }
}

impl Page for MemoryPage {
    fn field_value(&self, field: FormField) -> String {
        self.state
            .lock()
            .unwrap()
            .fields
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    fn reset_form(&self) {
        for value in self.state.lock().unwrap().fields.values_mut() {
            value.clear();
        }
    }

    fn submit_label(&self) -> String {
        self.state.lock().unwrap().submit_label.clone()
    }

    fn set_submit_state(&self, disabled: bool, label: &str) {
        let mut s = self.state.lock().unwrap();
        s.submit_disabled = disabled;
        s.submit_label = label.to_string();
    }

    fn add_class(&self, element: Element, class: &str) {
        let mut s = self.state.lock().unwrap();
        s.classes.entry(element).or_default().insert(class.to_string());
    }

    fn remove_class(&self, element: Element, class: &str) {
        let mut s = self.state.lock().unwrap();
        s.classes.entry(element).or_default().remove(class);
    }

    fn toggle_class(&self, element: Element, class: &str) {
        let mut s = self.state.lock().unwrap();
        let set = s.classes.entry(element).or_default();
        if !set.remove(class) {
            set.insert(class.to_string());
        }
    }

    fn scroll_y(&self) -> f64 {
        self.state.lock().unwrap().scroll_y
    }

    fn anchor_offset_top(&self, href: &str) -> Option<f64> {
        self.state.lock().unwrap().anchors.get(href).copied()
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.state.lock().unwrap().scrolls.push((top, behavior));
    }

    fn show_notice(&self, style: NoticeStyle, notice: &Notice) {
        self.state.lock().unwrap().notices.push((style, notice.clone()));
    }
}

/// What a [`ScriptedTransport`] answers.
pub enum Reply {
    Answer(ContactResponse),
    Unreachable,
    Hang,
}

/// A transport that answers from a script and records what it saw.
pub struct ScriptedTransport {
    page: Arc<MemoryPage>,
    reply: Reply,
    /// Payloads received, with the button's (disabled, label) at call time
    pub seen: Mutex<Vec<(ContactRequest, bool, String)>>,
}

impl ScriptedTransport {
    pub fn new(page: Arc<MemoryPage>, reply: Reply) -> Self {
        Self {
            page,
            reply,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ContactTransport for ScriptedTransport {
    async fn submit(&self, request: &ContactRequest) -> leadsheet_client::Result<ContactResponse> {
        let (disabled, label) = {
            let s = self.page.state.lock().unwrap();
            (s.submit_disabled, s.submit_label.clone())
        };
        self.seen
            .lock()
            .unwrap()
            .push((request.clone(), disabled, label));
        match &self.reply {
            Reply::Answer(response) => Ok(response.clone()),
            Reply::Unreachable => Err(Error::Unreachable("connection refused".into())),
            Reply::Hang => std::future::pending().await,
        }
    }
}

/// A notifier that keeps every notice.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub notices: Arc<Mutex<Vec<Notice>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
