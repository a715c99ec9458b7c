use crate::error::{RentifyError, Result};
use crate::models::{seed, Conversation, Message};
use crate::session::Role;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Conversation threads. Sent messages live only in the returned snapshot.
#[derive(Debug, Clone, Default)]
pub struct Inbox {
    conversations: Vec<Conversation>,
}

impl Inbox {
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self { conversations }
    }

    pub fn seeded() -> Self {
        Self::new(seed::conversations())
    }

    /// Threads shown to a signed-in user. Every thread is visible to every
    /// role; there is no per-user routing.
    pub fn conversations_for(&self, _role: Role) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, id: &str) -> Result<&Conversation> {
        self.conversations
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| RentifyError::not_found("conversation", id))
    }

    /// Append a message as the thread's owner (owners) or renter (everyone
    /// else). Blank text leaves the inbox unchanged.
    pub fn send(
        &self,
        conversation_id: &str,
        role: Role,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let thread = self.get(conversation_id)?;
        if text.trim().is_empty() {
            debug!("Ignoring blank message for {}", conversation_id);
            return Ok(self.clone());
        }

        let sender_id = match role {
            Role::Owner => thread.owner.id.clone(),
            Role::Renter | Role::Admin => thread.renter.id.clone(),
        };
        let message = Message {
            id: format!("msg-{}", now.timestamp_millis()),
            sender_id,
            text: text.to_string(),
            timestamp: now,
        };

        let mut next = self.clone();
        if let Some(thread) = next.conversations.iter_mut().find(|c| c.id == conversation_id) {
            thread.messages.push(message);
        }
        Ok(next)
    }
}

/// Whether `message` was sent from the viewer's side of the thread
pub fn is_own_message(role: Role, message: &Message) -> bool {
    match role {
        Role::Owner => message.sender_id.starts_with("owner"),
        Role::Renter => message.sender_id.starts_with("renter"),
        Role::Admin => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_appends_to_one_thread() {
        let inbox = Inbox::seeded();
        let now = Utc::now();
        let next = inbox.send("convo-2", Role::Owner, "Viewing on Friday works.", now).unwrap();

        let thread = next.get("convo-2").unwrap();
        let last = thread.messages.last().unwrap();
        assert_eq!(thread.messages.len(), 3);
        assert_eq!(last.sender_id, "owner-2");
        assert_eq!(last.text, "Viewing on Friday works.");
        assert_eq!(last.timestamp, now);

        assert_eq!(inbox.get("convo-2").unwrap().messages.len(), 2);
        assert_eq!(next.get("convo-1").unwrap().messages.len(), 3);
    }

    #[test]
    fn renter_messages_use_thread_renter() {
        let inbox = Inbox::seeded();
        let next = inbox.send("convo-3", Role::Renter, "Is parking included?", Utc::now()).unwrap();
        let last = next.get("convo-3").unwrap().messages.last().unwrap().clone();
        assert_eq!(last.sender_id, "renter-2");
        assert!(is_own_message(Role::Renter, &last));
        assert!(!is_own_message(Role::Owner, &last));
    }

    #[test]
    fn blank_message_is_ignored() {
        let inbox = Inbox::seeded();
        let next = inbox.send("convo-1", Role::Renter, "   ", Utc::now()).unwrap();
        assert_eq!(next.get("convo-1").unwrap().messages.len(), 3);
    }

    #[test]
    fn unknown_thread_is_not_found() {
        let inbox = Inbox::seeded();
        assert!(matches!(
            inbox.send("convo-9", Role::Owner, "hello", Utc::now()),
            Err(RentifyError::NotFound { .. })
        ));
        assert_eq!(inbox.conversations_for(Role::Admin).len(), 3);
    }
}
