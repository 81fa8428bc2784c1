#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod advice;
pub mod chat;
pub mod error;
pub mod health;
pub mod muscle;
pub mod name;
pub mod plan;
pub mod region;
pub mod responder;
pub mod run;
pub mod selection;
pub mod service;
pub mod user;

pub use advice::{AdviceRecord, Confidence, ConfidenceError, RunVerdict, lookup};
pub use chat::{
    ChatMessage, ChatReply, ChatRepository, ChatService, Conversation, ConversationID,
    ConversationRepository, Message, MessageError, Reply, ReplySource, Role, Transcript,
};
pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use health::{Health, HealthRepository, HealthService};
pub use muscle::{MuscleID, MuscleIDError};
pub use name::{Name, NameError};
pub use region::{RegionInfo, RegionToken, View, expand, expand_in_view, resolve};
pub use responder::{Topic, classify};
pub use run::{
    NewRunningSession, RunningSession, RunningSessionID, RunningSessionRepository,
    RunningSessionService,
};
pub use selection::Selection;
pub use service::Service;
pub use user::{
    Session, SessionRepository, SessionService, User, UserID, UserRepository, UserService,
};

pub use strum::IntoEnumIterator;
