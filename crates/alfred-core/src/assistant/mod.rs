//! Personal-assistant state: agenda, alarms, notifications and chat.
//!
//! Each container is plain owned data with validated mutators; nothing here
//! touches storage or the network.

pub mod agenda;
pub mod alarms;
pub mod chat;
pub mod clock;
pub mod notifications;

pub use agenda::{Agenda, AgendaEvent, EventDraft, EventKind};
pub use alarms::{Alarm, AlarmAction, AlarmBook, AlarmDraft};
pub use chat::{ChatBackend, ChatHistory, ChatMessage, ChatSession, Sender};
pub use clock::ClockTime;
pub use notifications::{Inbox, InboxFilter, Notification, NotificationKind};
