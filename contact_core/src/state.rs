//! Application state and the reducer that drives it.
//!
//! The UI owns one [`AppState`], feeds it [`Event`]s and carries out the
//! [`Command`]s each event returns. Nothing in here touches the network or a
//! widget, so whole interaction sequences can be replayed in tests.

use std::fmt;
use std::time::Duration;

use crate::api::models::{Contact, NewContact};
use crate::config::Settings;
use crate::error::ApiError;
use crate::flash::Flash;
use crate::form::{ContactForm, Field};
use crate::presenter::{self, ContactCard, SortKey};

pub const SUCCESS_MESSAGE: &str = "Successfully Added!";
pub const SERVER_ERROR: &str = "Server Error";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    Email,
    Phone,
}

/// Identifies one copyable row, rendered as `email-<id>` or `phone-<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyTarget {
    pub kind: CopyKind,
    pub contact_id: String,
}

impl CopyTarget {
    pub fn email(contact_id: impl Into<String>) -> Self {
        Self { kind: CopyKind::Email, contact_id: contact_id.into() }
    }

    pub fn phone(contact_id: impl Into<String>) -> Self {
        Self { kind: CopyKind::Phone, contact_id: contact_id.into() }
    }
}

impl fmt::Display for CopyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            CopyKind::Email => "email",
            CopyKind::Phone => "phone",
        };
        write!(f, "{}-{}", prefix, self.contact_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Copied,
}

#[derive(Debug)]
pub enum Event {
    Started,
    FieldEdited(Field, String),
    SearchEdited(String),
    SortSelected(SortKey),
    SubmitRequested,
    ContactsFetched(Result<Vec<Contact>, ApiError>),
    /// The record is `None` when the backend did not echo it back.
    ContactCreated(Result<Option<Contact>, ApiError>),
    /// Sent once the user has confirmed [`DELETE_PROMPT`].
    DeleteConfirmed(String),
    ContactDeleted { id: String, result: Result<(), ApiError> },
    CopyRequested(CopyTarget),
    FlashExpired(FlashKind, u64),
}

/// Work against the backend; each one answers with exactly one [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchContacts,
    CreateContact(NewContact),
    DeleteContact(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Remote(Request),
    CopyToClipboard(String),
    /// Blocking, modal notice.
    ShowAlert(&'static str),
    ScheduleExpiry { flash: FlashKind, token: u64, after: Duration },
}

#[derive(Debug)]
pub struct AppState {
    contacts: Vec<Contact>,
    search: String,
    sort: SortKey,
    form: ContactForm,
    submitting: bool,
    success: Flash<&'static str>,
    copied: Flash<CopyTarget>,
    success_after: Duration,
    copied_after: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            contacts: Vec::new(),
            search: String::new(),
            sort: SortKey::default(),
            form: ContactForm::new(),
            submitting: false,
            success: Flash::default(),
            copied: Flash::default(),
            success_after: settings.success_banner(),
            copied_after: settings.copied_indicator(),
        }
    }

    pub fn apply(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::Started => vec![Command::Remote(Request::FetchContacts)],
            Event::FieldEdited(field, value) => {
                self.form.set(field, value);
                Vec::new()
            }
            Event::SearchEdited(search) => {
                self.search = search;
                Vec::new()
            }
            Event::SortSelected(sort) => {
                self.sort = sort;
                Vec::new()
            }
            Event::SubmitRequested => {
                if !self.can_submit() {
                    log::debug!("submit ignored, form invalid or already submitting");
                    return Vec::new();
                }
                self.submitting = true;
                vec![Command::Remote(Request::CreateContact(self.form.payload()))]
            }
            Event::ContactsFetched(Ok(contacts)) => {
                self.contacts = contacts;
                Vec::new()
            }
            Event::ContactsFetched(Err(e)) => {
                log::warn!("failed to fetch contacts: {e}");
                Vec::new()
            }
            Event::ContactCreated(Ok(created)) => {
                self.submitting = false;
                match created {
                    Some(contact) => log::info!("created contact {}", contact.id),
                    None => log::info!("created contact"),
                }
                self.form.clear();
                let token = self.success.show(SUCCESS_MESSAGE);
                vec![
                    Command::Remote(Request::FetchContacts),
                    Command::ScheduleExpiry { flash: FlashKind::Success, token, after: self.success_after },
                ]
            }
            Event::ContactCreated(Err(e)) => {
                self.submitting = false;
                log::error!("failed to create contact: {e}");
                vec![Command::ShowAlert(SERVER_ERROR)]
            }
            Event::DeleteConfirmed(id) => vec![Command::Remote(Request::DeleteContact(id))],
            Event::ContactDeleted { id, result: Ok(()) } => {
                log::info!("deleted contact {id}");
                vec![Command::Remote(Request::FetchContacts)]
            }
            Event::ContactDeleted { id, result: Err(e) } => {
                log::error!("failed to delete contact {id}: {e}");
                Vec::new()
            }
            Event::CopyRequested(target) => {
                let Some(contact) = self.contacts.iter().find(|c| c.id == target.contact_id) else {
                    log::debug!("copy target {target} no longer listed");
                    return Vec::new();
                };
                let text = match target.kind {
                    CopyKind::Email => contact.email.clone(),
                    CopyKind::Phone => contact.phone.clone(),
                };
                let token = self.copied.show(target);
                vec![
                    Command::CopyToClipboard(text),
                    Command::ScheduleExpiry { flash: FlashKind::Copied, token, after: self.copied_after },
                ]
            }
            Event::FlashExpired(FlashKind::Success, token) => {
                self.success.expire(token);
                Vec::new()
            }
            Event::FlashExpired(FlashKind::Copied, token) => {
                self.copied.expire(token);
                Vec::new()
            }
        }
    }

    pub fn total(&self) -> usize {
        self.contacts.len()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.form.can_submit()
    }

    pub fn success_message(&self) -> Option<&'static str> {
        self.success.get().copied()
    }

    pub fn is_copied(&self, target: &CopyTarget) -> bool {
        self.copied.get() == Some(target)
    }

    pub fn cards(&self) -> Vec<ContactCard<'_>> {
        presenter::cards(&self.contacts, &self.search, self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldError;

    fn contact(id: &str, name: &str) -> Contact {
        Contact {
            id: id.into(),
            name: name.into(),
            email: format!("{}@example.com", id),
            phone: "1234567890".into(),
            message: None,
            created_at: None,
        }
    }

    fn fill_valid(state: &mut AppState) {
        state.apply(Event::FieldEdited(Field::Name, "Ann Lee".into()));
        state.apply(Event::FieldEdited(Field::Email, "ann@example.com".into()));
        state.apply(Event::FieldEdited(Field::Phone, "1234567890".into()));
    }

    #[test]
    fn start_fetches_contacts() {
        let mut state = AppState::default();
        assert_eq!(state.apply(Event::Started), vec![Command::Remote(Request::FetchContacts)]);
    }

    #[test]
    fn fetch_failure_keeps_previous_list() {
        let mut state = AppState::default();
        state.apply(Event::ContactsFetched(Ok(vec![contact("1", "Ann")])));
        let cmds = state.apply(Event::ContactsFetched(Err(ApiError::Status(reqwest::StatusCode::BAD_GATEWAY))));
        assert!(cmds.is_empty());
        assert_eq!(state.total(), 1);
    }

    #[test]
    fn invalid_email_never_submits() {
        let mut state = AppState::default();
        fill_valid(&mut state);
        state.apply(Event::FieldEdited(Field::Email, "ann@example".into()));
        assert_eq!(state.form().error(Field::Email), Some(FieldError::InvalidEmail));
        assert!(!state.can_submit());
        assert!(state.apply(Event::SubmitRequested).is_empty());
        assert!(!state.is_submitting());
    }

    #[test]
    fn submit_is_single_flight() {
        let mut state = AppState::default();
        fill_valid(&mut state);
        let cmds = state.apply(Event::SubmitRequested);
        assert!(matches!(cmds.as_slice(), [Command::Remote(Request::CreateContact(c))] if c.name == "Ann Lee"));
        assert!(state.is_submitting());
        assert!(state.apply(Event::SubmitRequested).is_empty());
    }

    #[test]
    fn create_success_clears_form_and_refetches() {
        let mut state = AppState::default();
        fill_valid(&mut state);
        state.apply(Event::SubmitRequested);
        let cmds = state.apply(Event::ContactCreated(Ok(Some(contact("9", "Ann Lee")))));

        assert!(!state.is_submitting());
        assert_eq!(state.form(), &ContactForm::default());
        assert_eq!(state.success_message(), Some(SUCCESS_MESSAGE));
        assert_eq!(cmds[0], Command::Remote(Request::FetchContacts));
        let Command::ScheduleExpiry { flash, token, after } = cmds[1] else {
            panic!("expected an expiry, got {:?}", cmds[1]);
        };
        assert_eq!(flash, FlashKind::Success);
        assert_eq!(after, Duration::from_secs(3));

        state.apply(Event::FlashExpired(flash, token));
        assert_eq!(state.success_message(), None);
    }

    #[test]
    fn create_without_echoed_record_still_succeeds() {
        let mut state = AppState::default();
        fill_valid(&mut state);
        state.apply(Event::SubmitRequested);
        let cmds = state.apply(Event::ContactCreated(Ok(None)));

        assert!(!cmds.contains(&Command::ShowAlert(SERVER_ERROR)));
        assert_eq!(cmds[0], Command::Remote(Request::FetchContacts));
        assert_eq!(state.success_message(), Some(SUCCESS_MESSAGE));
        assert_eq!(state.form(), &ContactForm::default());
        assert!(!state.is_submitting());
    }

    #[test]
    fn create_failure_alerts_and_keeps_input() {
        let mut state = AppState::default();
        fill_valid(&mut state);
        state.apply(Event::SubmitRequested);
        let cmds = state.apply(Event::ContactCreated(Err(ApiError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ))));
        assert_eq!(cmds, vec![Command::ShowAlert(SERVER_ERROR)]);
        assert_eq!(state.form().value(Field::Name), "Ann Lee");
        assert!(state.can_submit());
    }

    #[test]
    fn delete_flow() {
        let mut state = AppState::default();
        assert_eq!(
            state.apply(Event::DeleteConfirmed("7".into())),
            vec![Command::Remote(Request::DeleteContact("7".into()))]
        );
        assert_eq!(
            state.apply(Event::ContactDeleted { id: "7".into(), result: Ok(()) }),
            vec![Command::Remote(Request::FetchContacts)]
        );
        let failed = state.apply(Event::ContactDeleted {
            id: "7".into(),
            result: Err(ApiError::Status(reqwest::StatusCode::NOT_FOUND)),
        });
        assert!(failed.is_empty());
    }

    #[test]
    fn copy_marks_field_until_its_own_timer() {
        let mut state = AppState::default();
        state.apply(Event::ContactsFetched(Ok(vec![contact("1", "Ann")])));

        let first = state.apply(Event::CopyRequested(CopyTarget::email("1")));
        assert_eq!(first[0], Command::CopyToClipboard("1@example.com".into()));
        let Command::ScheduleExpiry { token: stale, after, .. } = first[1] else {
            panic!("expected an expiry");
        };
        assert_eq!(after, Duration::from_secs(2));

        let second = state.apply(Event::CopyRequested(CopyTarget::phone("1")));
        assert_eq!(second[0], Command::CopyToClipboard("1234567890".into()));
        assert!(state.is_copied(&CopyTarget::phone("1")));
        assert!(!state.is_copied(&CopyTarget::email("1")));

        state.apply(Event::FlashExpired(FlashKind::Copied, stale));
        assert!(state.is_copied(&CopyTarget::phone("1")));
    }

    #[test]
    fn copy_of_unknown_contact_is_ignored() {
        let mut state = AppState::default();
        assert!(state.apply(Event::CopyRequested(CopyTarget::email("gone"))).is_empty());
    }

    #[test]
    fn copy_target_ids() {
        assert_eq!(CopyTarget::email("42").to_string(), "email-42");
        assert_eq!(CopyTarget::phone("42").to_string(), "phone-42");
    }

    #[test]
    fn cards_follow_search_and_sort() {
        let mut state = AppState::default();
        state.apply(Event::ContactsFetched(Ok(vec![contact("1", "Zed"), contact("2", "amy"), contact("3", "Bob")])));
        state.apply(Event::SortSelected(SortKey::Name));
        let names: Vec<_> = state.cards().iter().map(|c| c.contact.name.clone()).collect();
        assert_eq!(names, ["amy", "Bob", "Zed"]);

        state.apply(Event::SearchEdited("b".into()));
        assert_eq!(state.cards().len(), 1);
        assert_eq!(state.total(), 3);
    }
}
