//! Reporting party entity and its trusted contacts.

use crate::geo::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// Identifier of a reporting party
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(pub u64);

impl std::fmt::Display for PartyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "party-{}", self.0)
    }
}

/// Trusted-contact addresses of a reporting party, in insertion order.
///
/// The stored list is whatever the directory holds. [`TrustedContacts::addresses`]
/// is the view the dispatcher uses: trimmed, blank entries dropped, duplicates
/// kept. Deduplication happens once, at registration, through
/// [`TrustedContacts::normalized`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedContacts(Vec<String>);

impl TrustedContacts {
    /// Wrap a stored list as-is.
    pub fn new(raw: Vec<String>) -> Self {
        Self(raw)
    }

    /// Build the list a new registration should store: trimmed, non-blank
    /// and unique, keeping first-seen order.
    pub fn normalized<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for entry in raw {
            let trimmed = entry.as_ref().trim();
            if !trimmed.is_empty() && !out.iter().any(|c| c == trimmed) {
                out.push(trimmed.to_string());
            }
        }
        Self(out)
    }

    /// Addresses to dispatch to.
    pub fn addresses(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn raw(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.addresses().is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TrustedContacts {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A user who can raise an alert (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingParty {
    pub id: PartyId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// The party's own contact address, shown to responders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Last reported position; `None` until the first alert
    #[serde(default)]
    pub location: Option<Coordinate>,
    #[serde(default)]
    pub trusted_contacts: TrustedContacts,
}

impl ReportingParty {
    pub fn new(id: PartyId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            full_name: None,
            phone: None,
            location: None,
            trusted_contacts: TrustedContacts::default(),
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_location(mut self, location: Coordinate) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_trusted_contacts(mut self, contacts: TrustedContacts) -> Self {
        self.trusted_contacts = contacts;
        self
    }

    /// Full name when set and non-blank, otherwise the username.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}
