use serde::{Deserialize, Serialize};

/// A single user entry managed by the application.
///
/// `id` is `None` (or empty) until the record has been persisted once; the
/// store assigns it and it never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub has_additional_details: bool,
    #[serde(default)]
    pub category: Option<String>,
}

impl UserRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.has_additional_details = true;
        self.category = Some(category.into());
        self
    }

    /// The assigned id, if this record has been persisted.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_new(&self) -> bool {
        self.id().is_none()
    }

    /// The category, only when the additional details flag claims one.
    pub fn category(&self) -> Option<&str> {
        if self.has_additional_details {
            self.category.as_deref().filter(|c| !c.is_empty())
        } else {
            None
        }
    }

    /// Clears `category` whenever the additional details flag is off.
    pub fn normalized(mut self) -> Self {
        if !self.has_additional_details {
            self.category = None;
        }
        self
    }
}
