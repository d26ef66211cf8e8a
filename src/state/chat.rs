use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::content::chat::{CANNED_RESPONSES, GREETING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Transcript of the scripted assistant.
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    rng: SmallRng,
}

impl ChatLog {
    pub fn new(seed: u64) -> Self {
        Self {
            messages: vec![ChatMessage {
                sender: Sender::Assistant,
                text: GREETING.to_string(),
            }],
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append what the visitor typed. Blank input is dropped and `false`
    /// returned, in which case no reply should be scheduled.
    pub fn push_user(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.to_string(),
        });
        true
    }

    /// Append one canned reply, picked at random.
    pub fn push_reply(&mut self) -> &ChatMessage {
        let pick = self.rng.random_range(0..CANNED_RESPONSES.len());
        self.messages.push(ChatMessage {
            sender: Sender::Assistant,
            text: CANNED_RESPONSES[pick].to_string(),
        });
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let log = ChatLog::new(7);
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].text, GREETING);
        assert!(!log.messages()[0].is_user());
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut log = ChatLog::new(7);
        assert!(!log.push_user(""));
        assert!(!log.push_user("   \n"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn user_message_then_canned_reply() {
        let mut log = ChatLog::new(42);
        assert!(log.push_user("What programs do you run?"));
        assert!(log.messages()[1].is_user());
        assert_eq!(log.messages()[1].text, "What programs do you run?");

        let reply = log.push_reply().clone();
        assert_eq!(reply.sender, Sender::Assistant);
        assert!(CANNED_RESPONSES.contains(&reply.text.as_str()));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn replies_are_reproducible_per_seed() {
        let mut a = ChatLog::new(99);
        let mut b = ChatLog::new(99);
        for _ in 0..10 {
            assert_eq!(a.push_reply(), b.push_reply());
        }
    }
}
