//! Alarm list state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clock::ClockTime;
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: String,
    pub time: ClockTime,
    pub label: String,
    /// Free-form day labels, e.g. `["Mon", "Tue"]` or `["Every day"]`.
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub tag: String,
    pub enabled: bool,
}

/// User-editable alarm fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmDraft {
    pub time: ClockTime,
    pub label: String,
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub tag: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmAction {
    Create(AlarmDraft),
    Update { id: String, draft: AlarmDraft },
    Toggle { id: String },
    Delete { id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmBook {
    alarms: Vec<Alarm>,
}

impl AlarmBook {
    pub fn new(alarms: Vec<Alarm>) -> Self {
        Self { alarms }
    }

    pub fn alarms(&self) -> &[Alarm] {
        &self.alarms
    }

    pub fn get(&self, id: &str) -> Option<&Alarm> {
        self.alarms.iter().find(|a| a.id == id)
    }

    /// Enabled alarms ordered by time of day.
    pub fn upcoming(&self) -> Vec<&Alarm> {
        let mut enabled: Vec<&Alarm> = self.alarms.iter().filter(|a| a.enabled).collect();
        enabled.sort_by_key(|a| a.time);
        enabled
    }

    /// Apply one action. On error the book is left unchanged.
    pub fn apply(&mut self, action: AlarmAction) -> Result<(), ValidationError> {
        match action {
            AlarmAction::Create(draft) => self.create(draft).map(|_| ()),
            AlarmAction::Update { id, draft } => self.update(&id, draft),
            AlarmAction::Toggle { id } => self.toggle(&id).map(|_| ()),
            AlarmAction::Delete { id } => self.delete(&id).map(|_| ()),
        }
    }

    /// Add an alarm; returns its new id.
    pub fn create(&mut self, draft: AlarmDraft) -> Result<String, ValidationError> {
        let draft = validate(draft)?;
        let id = Uuid::new_v4().to_string();
        self.alarms.push(Alarm {
            id: id.clone(),
            time: draft.time,
            label: draft.label,
            days: draft.days,
            tag: draft.tag,
            enabled: draft.enabled,
        });
        Ok(id)
    }

    pub fn update(&mut self, id: &str, draft: AlarmDraft) -> Result<(), ValidationError> {
        let draft = validate(draft)?;
        let alarm = self.find_mut(id)?;
        alarm.time = draft.time;
        alarm.label = draft.label;
        alarm.days = draft.days;
        alarm.tag = draft.tag;
        alarm.enabled = draft.enabled;
        Ok(())
    }

    /// Flip `enabled`; returns the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool, ValidationError> {
        let alarm = self.find_mut(id)?;
        alarm.enabled = !alarm.enabled;
        Ok(alarm.enabled)
    }

    pub fn delete(&mut self, id: &str) -> Result<Alarm, ValidationError> {
        let pos = self
            .alarms
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(self.alarms.remove(pos))
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Alarm, ValidationError> {
        self.alarms
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found(id))
    }
}

fn validate(mut draft: AlarmDraft) -> Result<AlarmDraft, ValidationError> {
    draft.label = draft.label.trim().to_string();
    if draft.label.is_empty() {
        return Err(ValidationError::EmptyField { field: "label" });
    }
    Ok(draft)
}

fn not_found(id: &str) -> ValidationError {
    ValidationError::NotFound {
        collection: "alarm",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(time: &str, label: &str) -> AlarmDraft {
        AlarmDraft {
            time: time.parse().unwrap(),
            label: label.into(),
            days: vec!["Mon".into(), "Tue".into()],
            tag: "Classic".into(),
            enabled: true,
        }
    }

    #[test]
    fn create_toggle_delete() {
        let mut book = AlarmBook::default();
        let id = book.create(draft("7:00 AM", "Wake up")).unwrap();
        assert_eq!(book.alarms().len(), 1);
        assert!(!book.toggle(&id).unwrap());
        assert!(book.upcoming().is_empty());
        let removed = book.delete(&id).unwrap();
        assert_eq!(removed.label, "Wake up");
        assert!(book.alarms().is_empty());
    }

    #[test]
    fn empty_label_is_rejected() {
        let mut book = AlarmBook::default();
        assert_eq!(
            book.create(draft("07:00", "   ")),
            Err(ValidationError::EmptyField { field: "label" })
        );
        assert!(book.alarms().is_empty());
    }

    #[test]
    fn update_replaces_fields_and_keeps_id() {
        let mut book = AlarmBook::default();
        let id = book.create(draft("07:00", "Wake up")).unwrap();
        book.apply(AlarmAction::Update {
            id: id.clone(),
            draft: draft("12:30 PM", "Lunch"),
        })
        .unwrap();
        let alarm = book.get(&id).unwrap();
        assert_eq!(alarm.label, "Lunch");
        assert_eq!(alarm.time.to_12h(), "12:30 PM");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut book = AlarmBook::default();
        assert!(matches!(
            book.apply(AlarmAction::Toggle { id: "nope".into() }),
            Err(ValidationError::NotFound { collection: "alarm", .. })
        ));
    }

    #[test]
    fn upcoming_is_sorted_by_time() {
        let mut book = AlarmBook::default();
        book.create(draft("18:00", "Gym")).unwrap();
        book.create(draft("06:30", "Run")).unwrap();
        let labels: Vec<&str> = book.upcoming().iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Run", "Gym"]);
    }
}
