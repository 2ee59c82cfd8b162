use serde::{Deserialize, Serialize};

/// A user interaction that can be tracked independently of a page or screen
/// load, such as clicking a link.
///
/// Events are plain values: once built they are moved into storage and never
/// mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Tracking id of the reporting site or property.
    pub site: String,
    /// Originating client (browser) id.
    #[serde(rename = "clientid")]
    pub client_id: String,
    /// Event category, e.g. `"nav"`.
    pub category: String,
    /// Event action, e.g. `"click"`.
    pub action: String,
    /// Optional free-form label.
    pub label: String,
    /// Optional numeric value.
    pub value: i64,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}/{}", self.site, self.category, self.action)?;
        if !self.label.is_empty() {
            write!(f, " [{}]", self.label)?;
        }
        Ok(())
    }
}
