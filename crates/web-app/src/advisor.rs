//! State behind the body diagram and the chat panel.

use chrono::NaiveDateTime;
use log::{debug, warn};
use runwell_domain::{
    self as domain, ChatService, Message, MuscleID, Reply, ReplySource, Selection, Transcript,
    UserID, responder,
};

pub const CONNECTION_ERROR: &str = "Unable to connect to the server.";

pub struct Advisor<S> {
    service: S,
    user_id: Option<UserID>,
    selection: Selection,
    transcript: Transcript,
}

impl<S: ChatService> Advisor<S> {
    pub fn new(service: S, user_id: Option<UserID>) -> Self {
        Self {
            service,
            user_id,
            selection: Selection::default(),
            transcript: Transcript::default(),
        }
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn set_user(&mut self, user_id: Option<UserID>) {
        self.user_id = user_id;
    }

    pub fn click(&mut self, token: &str) {
        self.selection = self.selection.click(token);
    }

    pub fn select(&mut self, muscle: MuscleID) {
        self.selection = self.selection.select(muscle);
    }

    pub fn clear(&mut self) {
        self.selection = self.selection.clear();
    }

    pub fn flip_view(&mut self) {
        self.selection = self.selection.flip_view();
    }

    /// Starts an empty conversation with the greeting.
    pub fn greet(&mut self, now: NaiveDateTime) {
        if self.transcript.messages().is_empty() {
            self.transcript.push_reply(
                &Reply {
                    content: responder::GREETING.to_string(),
                    source: ReplySource::Local,
                },
                now,
            );
        }
    }

    /// Replaces the transcript by the conversation history stored by the backend.
    ///
    /// Keeps the current transcript if the history is unavailable or empty.
    pub async fn load_history(&mut self) -> Result<(), domain::ReadError> {
        let Some(user_id) = self.user_id else {
            return Ok(());
        };
        let conversations = self.service.get_conversations(user_id).await?;
        if !conversations.is_empty() {
            self.transcript = Transcript::from(&conversations[..]);
        }
        Ok(())
    }

    /// Notice to show next to a reply that should have come from the backend.
    #[must_use]
    pub fn notice(&self, reply: &Reply) -> Option<&'static str> {
        (reply.source == ReplySource::Local && self.user_id.is_some()).then_some(CONNECTION_ERROR)
    }

    /// Sends a message typed by the runner and appends both message and reply to the transcript.
    ///
    /// Blank input is ignored.
    pub async fn send(&mut self, text: &str, now: NaiveDateTime) -> Option<Reply> {
        let message = match Message::new(text.trim()) {
            Ok(message) => message,
            Err(err) => {
                debug!("ignored chat input: {err}");
                return None;
            }
        };

        self.transcript.push_message(&message, now);

        let reply = self
            .service
            .ask(self.user_id, &message, self.selection.muscle)
            .await;

        if let Some(notice) = self.notice(&reply) {
            warn!("{notice} Answered locally.");
        }

        self.transcript.push_reply(&reply, now);

        Some(reply)
    }
}
