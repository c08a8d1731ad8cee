//! Derives the visible contact list from the fetched records, the search
//! text and the sort key, plus the per-card display attributes.

use std::cmp::Ordering;

use chrono::{DateTime, Local, TimeZone, Utc};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::api::models::Contact;

pub const EMPTY_TITLE: &str = "No contacts found";
pub const EMPTY_HINT: &str = "Try changing your search term.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Newest,
    Name,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest",
            SortKey::Name => "Name (A-Z)",
        }
    }
}

/// Name and email match case-insensitively, phone matches verbatim.
pub fn matches(contact: &Contact, search: &str) -> bool {
    let needle = search.to_lowercase();
    contact.name.to_lowercase().contains(&needle)
        || contact.email.to_lowercase().contains(&needle)
        || contact.phone.contains(search)
}

fn folded(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}

fn base_letters(s: &str) -> String {
    folded(s).chars().filter(|c| !is_combining_mark(*c)).collect()
}

/// Compares base letters first, so `Émile` sorts with the `e`s. Ties fall to
/// accents (unaccented first) and then case (lowercase first). Letters without
/// a canonical decomposition, such as `ø`, keep their code-point position.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| folded(a).cmp(&folded(b)))
        .then_with(|| b.cmp(a))
}

fn newest_first(a: &Contact, b: &Contact) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn visible<'a>(contacts: &'a [Contact], search: &str, sort: SortKey) -> Vec<&'a Contact> {
    let mut out: Vec<&Contact> = contacts.iter().filter(|c| matches(c, search)).collect();
    // sort_by is stable: ties keep the backend order.
    match sort {
        SortKey::Newest => out.sort_by(|a, b| newest_first(a, b)),
        SortKey::Name => out.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
    }
    out
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarColor {
    Blue,
    Emerald,
    Orange,
    Purple,
}

impl AvatarColor {
    const PALETTE: [AvatarColor; 4] = [
        AvatarColor::Blue,
        AvatarColor::Emerald,
        AvatarColor::Orange,
        AvatarColor::Purple,
    ];

    pub fn for_name(name: &str) -> Self {
        Self::PALETTE[name.chars().count() % Self::PALETTE.len()]
    }

    pub fn css_class(self) -> &'static str {
        match self {
            AvatarColor::Blue => "avatar-blue",
            AvatarColor::Emerald => "avatar-emerald",
            AvatarColor::Orange => "avatar-orange",
            AvatarColor::Purple => "avatar-purple",
        }
    }
}

pub fn date_label_in<Tz: TimeZone>(ts: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%-m/%-d/%Y").to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactCard<'a> {
    pub contact: &'a Contact,
    pub initials: String,
    pub avatar: AvatarColor,
    pub created: Option<String>,
}

impl<'a> ContactCard<'a> {
    pub fn new(contact: &'a Contact) -> Self {
        Self {
            contact,
            initials: initials(&contact.name),
            avatar: AvatarColor::for_name(&contact.name),
            created: contact.created_at.map(|ts| date_label_in(ts, &Local)),
        }
    }
}

pub fn cards<'a>(contacts: &'a [Contact], search: &str, sort: SortKey) -> Vec<ContactCard<'a>> {
    visible(contacts, search, sort).into_iter().map(ContactCard::new).collect()
}
