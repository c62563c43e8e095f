//! Notification inbox.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Reminder,
    System,
    Map,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Relative age as displayed, e.g. "5 min ago".
    pub time_ago: String,
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InboxFilter {
    #[default]
    All,
    Unread,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inbox {
    items: Vec<Notification>,
}

impl Inbox {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn visible(&self, filter: InboxFilter) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| filter == InboxFilter::All || !n.read)
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Newest first.
    pub fn push(&mut self, notification: Notification) {
        self.items.insert(0, notification);
    }

    /// Returns the new `read` flag.
    pub fn toggle_read(&mut self, id: &str) -> Result<bool, ValidationError> {
        let item = self
            .items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| ValidationError::NotFound {
                collection: "notification",
                id: id.to_string(),
            })?;
        item.read = !item.read;
        Ok(item.read)
    }

    /// Returns how many were changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for n in self.items.iter_mut().filter(|n| !n.read) {
            n.read = true;
            changed += 1;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, read: bool) -> Notification {
        Notification {
            id: id.into(),
            title: format!("note {id}"),
            description: String::new(),
            time_ago: "now".into(),
            kind: NotificationKind::System,
            read,
        }
    }

    #[test]
    fn unread_filter_hides_read_items() {
        let inbox = Inbox::new(vec![note("a", false), note("b", true)]);
        assert_eq!(inbox.visible(InboxFilter::All).len(), 2);
        let unread = inbox.visible(InboxFilter::Unread);
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].id, "a");
    }

    #[test]
    fn toggle_and_mark_all() {
        let mut inbox = Inbox::new(vec![note("a", false), note("b", false), note("c", true)]);
        assert!(inbox.toggle_read("a").unwrap());
        assert_eq!(inbox.unread_count(), 1);
        assert_eq!(inbox.mark_all_read(), 1);
        assert_eq!(inbox.unread_count(), 0);
        assert!(!inbox.toggle_read("c").unwrap());
    }

    #[test]
    fn push_puts_newest_first() {
        let mut inbox = Inbox::new(vec![note("old", true)]);
        inbox.push(note("new", false));
        assert_eq!(inbox.items()[0].id, "new");
    }

    #[test]
    fn unknown_id_fails() {
        let mut inbox = Inbox::default();
        assert!(inbox.toggle_read("x").is_err());
    }
}
