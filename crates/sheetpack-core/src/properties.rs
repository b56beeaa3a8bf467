//! Document metadata

use chrono::NaiveDateTime;

/// Package-level document properties
///
/// Written to `docProps/core.xml` (title, subject, creator, created) and
/// `docProps/app.xml` (company).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Author
    pub creator: Option<String>,
    /// Company
    pub company: Option<String>,
    /// Creation time (UTC); the writer uses the current time when unset
    pub created: Option<NaiveDateTime>,
}

impl DocumentProperties {
    /// Empty properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subject
    pub fn with_subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the creator
    pub fn with_creator<S: Into<String>>(mut self, creator: S) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the company
    pub fn with_company<S: Into<String>>(mut self, company: S) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Set the creation time
    pub fn with_created(mut self, created: NaiveDateTime) -> Self {
        self.created = Some(created);
        self
    }
}
