//! Personal agenda: events plus per-event reminders.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clock::ClockTime;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Work,
    Medical,
    #[default]
    Personal,
    Social,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [Self::Work, Self::Medical, Self::Personal, Self::Social];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Medical => "medical",
            Self::Personal => "personal",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| ValidationError::UnknownEventKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaEvent {
    pub id: String,
    pub kind: EventKind,
    pub title: String,
    /// Display date as entered ("Today", "Tomorrow", "Jun 12").
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: Option<ClockTime>,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub description: String,
}

/// User-editable event fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    #[serde(default)]
    pub kind: EventKind,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: Option<ClockTime>,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agenda {
    events: Vec<AgendaEvent>,
    reminders: BTreeSet<String>,
}

impl Agenda {
    pub fn events(&self) -> &[AgendaEvent] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&AgendaEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &AgendaEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    pub fn has_reminder(&self, id: &str) -> bool {
        self.reminders.contains(id)
    }

    pub fn reminder_count(&self) -> usize {
        self.reminders.len()
    }

    pub fn create(&mut self, draft: EventDraft) -> Result<String, ValidationError> {
        let draft = validate(draft)?;
        let id = Uuid::new_v4().to_string();
        self.events.push(AgendaEvent {
            id: id.clone(),
            kind: draft.kind,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            place: draft.place,
            description: draft.description,
        });
        tracing::debug!(%id, "agenda event created");
        Ok(id)
    }

    pub fn update(&mut self, id: &str, draft: EventDraft) -> Result<(), ValidationError> {
        let draft = validate(draft)?;
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found(id))?;
        event.kind = draft.kind;
        event.title = draft.title;
        event.date = draft.date;
        event.time = draft.time;
        event.place = draft.place;
        event.description = draft.description;
        Ok(())
    }

    /// Remove an event together with its reminder.
    pub fn delete(&mut self, id: &str) -> Result<AgendaEvent, ValidationError> {
        let pos = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| not_found(id))?;
        self.reminders.remove(id);
        Ok(self.events.remove(pos))
    }

    /// Returns whether the reminder is now set.
    pub fn toggle_reminder(&mut self, id: &str) -> Result<bool, ValidationError> {
        if self.get(id).is_none() {
            return Err(not_found(id));
        }
        if self.reminders.remove(id) {
            Ok(false)
        } else {
            self.reminders.insert(id.to_string());
            Ok(true)
        }
    }
}

fn validate(mut draft: EventDraft) -> Result<EventDraft, ValidationError> {
    draft.title = draft.title.trim().to_string();
    if draft.title.is_empty() {
        return Err(ValidationError::EmptyField { field: "title" });
    }
    Ok(draft)
}

fn not_found(id: &str) -> ValidationError {
    ValidationError::NotFound {
        collection: "event",
        id: id.to_string(),
    }
}
