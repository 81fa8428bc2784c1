use chrono::NaiveDateTime;
use derive_more::{Deref, Display};

use crate::{MuscleID, ReadError, UserID};

#[allow(async_fn_in_trait)]
pub trait ChatService {
    /// Answers a chat message.
    ///
    /// The chat backend is asked first if the runner is known. Without a user or when the backend
    /// fails, the local responder answers instead. This never fails.
    async fn ask(
        &self,
        user_id: Option<UserID>,
        message: &Message,
        selected: Option<MuscleID>,
    ) -> Reply;
    async fn get_conversations(&self, user_id: UserID) -> Result<Vec<Conversation>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ChatRepository {
    async fn send_message(&self, user_id: UserID, message: &Message)
    -> Result<ChatReply, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ConversationRepository {
    async fn read_conversations(&self, user_id: UserID) -> Result<Vec<Conversation>, ReadError>;
}

/// A non-empty message typed by the runner.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    pub fn new(text: &str) -> Result<Self, MessageError> {
        if text.trim().is_empty() {
            return Err(MessageError::Empty);
        }
        Ok(Self(text.to_string()))
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MessageError {
    #[error("Message must not be empty")]
    Empty,
}

/// Response of the chat backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    pub intent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    pub source: ReplySource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Backend,
    /// Answered by the keyword responder, the caller may point out that the backend is offline.
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: ConversationID,
    pub user_id: UserID,
    pub message: String,
    pub response: String,
    pub intent: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Deref, Debug, Display, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConversationID(u32);

impl From<u32> for ConversationID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Runner,
    Advisor,
}

/// Entry of the chat transcript shown to the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn push_message(&mut self, message: &Message, timestamp: NaiveDateTime) {
        self.messages.push(ChatMessage {
            role: Role::Runner,
            content: message.to_string(),
            timestamp,
        });
    }

    pub fn push_reply(&mut self, reply: &Reply, timestamp: NaiveDateTime) {
        self.messages.push(ChatMessage {
            role: Role::Advisor,
            content: reply.content.clone(),
            timestamp,
        });
    }

    /// Whether the runner is waiting for a reply.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.messages
            .last()
            .is_some_and(|message| message.role == Role::Runner)
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

impl From<&[Conversation]> for Transcript {
    fn from(conversations: &[Conversation]) -> Self {
        Self {
            messages: conversations
                .iter()
                .flat_map(|c| {
                    [
                        ChatMessage {
                            role: Role::Runner,
                            content: c.message.clone(),
                            timestamp: c.created_at,
                        },
                        ChatMessage {
                            role: Role::Advisor,
                            content: c.response.clone(),
                            timestamp: c.created_at,
                        },
                    ]
                })
                .collect(),
        }
    }
}
