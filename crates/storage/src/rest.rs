//! Client for the chat backend.
//!
//! Transport failures and timeouts are reported as `StorageError::NoConnection`, so that callers
//! can fall back to local answers.

use std::pin::pin;

use chrono::{DateTime, NaiveDateTime};
use futures_util::future::{Either, select};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use log::debug;
use runwell_domain as domain;
use runwell_web_app::Settings;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone, Copy, Default)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    pub sender: S,
    pub settings: Settings,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            sender: GlooNetSendRequest,
            settings,
        }
    }
}

impl Default for REST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl<S: SendRequest> REST<S> {
    fn url(&self, path: &str) -> String {
        self.settings.endpoint(path)
    }

    async fn fetch<T>(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<T, domain::StorageError>
    where
        T: DeserializeOwned,
    {
        let request = request.map_err(|err| domain::StorageError::Other(err.into()))?;

        let response = {
            let send = pin!(self.sender.send_request(request));
            let timeout = pin!(TimeoutFuture::new(self.settings.timeout_ms));
            match select(send, timeout).await {
                Either::Left((result, _)) => result.map_err(|err| {
                    debug!("request failed: {err}");
                    domain::StorageError::NoConnection
                })?,
                Either::Right(((), _)) => {
                    debug!(
                        "request timed out after {} ms",
                        self.settings.timeout_ms
                    );
                    return Err(domain::StorageError::NoConnection);
                }
            }
        };

        if !response.ok() {
            return Err(domain::StorageError::Other(
                format!("{} {}", response.status(), response.status_text()).into(),
            ));
        }

        response.json::<T>().await.map_err(|err| {
            domain::StorageError::Other(format!("deserialization failed: {err}").into())
        })
    }
}

impl<S: SendRequest> domain::UserRepository for REST<S> {
    async fn read_users(&self) -> Result<Vec<domain::User>, domain::ReadError> {
        let users: Vec<User> = self.fetch(Request::get(&self.url("/users")).build()).await?;
        Ok(users
            .into_iter()
            .map(domain::User::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn read_user(&self, id: domain::UserID) -> Result<domain::User, domain::ReadError> {
        let user: User = self
            .fetch(Request::get(&self.url(&format!("/users/{id}"))).build())
            .await?;
        Ok(domain::User::try_from(user)?)
    }

    async fn create_user(&self, name: domain::Name) -> Result<domain::User, domain::CreateError> {
        let user: User = self
            .fetch(Request::post(&self.url("/users")).json(&json!({ "name": name.to_string() })))
            .await?;
        Ok(domain::User::try_from(user)?)
    }
}

impl<S: SendRequest> domain::ChatRepository for REST<S> {
    async fn send_message(
        &self,
        user_id: domain::UserID,
        message: &domain::Message,
    ) -> Result<domain::ChatReply, domain::ReadError> {
        let response: ChatResponse = self
            .fetch(Request::post(&self.url("/chat")).json(&ChatRequest {
                user_id: *user_id,
                message: message.as_ref(),
            }))
            .await?;
        Ok(response.into())
    }
}

impl<S: SendRequest> domain::ConversationRepository for REST<S> {
    async fn read_conversations(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::Conversation>, domain::ReadError> {
        let conversations: Vec<Conversation> = self
            .fetch(Request::get(&self.url(&format!("/conversations/{user_id}"))).build())
            .await?;
        Ok(conversations
            .into_iter()
            .map(domain::Conversation::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }
}

impl<S: SendRequest> domain::RunningSessionRepository for REST<S> {
    async fn read_running_sessions(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::RunningSession>, domain::ReadError> {
        let sessions: Vec<RunningSession> = self
            .fetch(Request::get(&self.url(&format!("/sessions/{user_id}"))).build())
            .await?;
        Ok(sessions
            .into_iter()
            .map(domain::RunningSession::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn create_running_session(
        &self,
        run: domain::NewRunningSession,
    ) -> Result<domain::RunningSession, domain::CreateError> {
        let session: RunningSession = self
            .fetch(Request::post(&self.url("/sessions")).json(&NewRunningSession::from(run)))
            .await?;
        Ok(domain::RunningSession::try_from(session)?)
    }
}

impl<S: SendRequest> domain::HealthRepository for REST<S> {
    async fn read_health(&self) -> Result<domain::Health, domain::ReadError> {
        let health: Health = self.fetch(Request::get(&self.url("/health")).build()).await?;
        Ok(health.into())
    }
}

/// Parses timestamps as sent by the backend, with or without offset.
fn parse_timestamp(value: &str) -> Result<NaiveDateTime, domain::StorageError> {
    value
        .parse::<NaiveDateTime>()
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.naive_utc()))
        .map_err(|err| {
            domain::StorageError::Other(format!("invalid timestamp {value:?}: {err}").into())
        })
}

fn format_timestamp(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

fn intent(agent_state: Option<&serde_json::Value>) -> Option<String> {
    agent_state?
        .get("intent")?
        .as_str()
        .map(ToString::to_string)
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub created_at: String,
}

impl From<domain::User> for User {
    fn from(value: domain::User) -> Self {
        User {
            id: *value.id,
            name: value.name.to_string(),
            created_at: format_timestamp(value.created_at),
        }
    }
}

impl TryFrom<User> for domain::User {
    type Error = domain::StorageError;

    fn try_from(value: User) -> Result<Self, Self::Error> {
        Ok(domain::User {
            id: value.id.into(),
            name: domain::Name::new(&value.name)
                .map_err(|err| domain::StorageError::Other(err.into()))?,
            created_at: parse_timestamp(&value.created_at)?,
        })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    user_id: u32,
    message: &'a str,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub agent_state: Option<serde_json::Value>,
}

impl From<ChatResponse> for domain::ChatReply {
    fn from(value: ChatResponse) -> Self {
        domain::ChatReply {
            intent: intent(value.agent_state.as_ref()),
            response: value.response,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: u32,
    pub user_id: u32,
    pub message: String,
    pub response: String,
    #[serde(default)]
    pub agent_state: Option<serde_json::Value>,
    pub created_at: String,
}

impl From<domain::Conversation> for Conversation {
    fn from(value: domain::Conversation) -> Self {
        Conversation {
            id: *value.id,
            user_id: *value.user_id,
            message: value.message,
            response: value.response,
            agent_state: value.intent.map(|intent| json!({ "intent": intent })),
            created_at: format_timestamp(value.created_at),
        }
    }
}

impl TryFrom<Conversation> for domain::Conversation {
    type Error = domain::StorageError;

    fn try_from(value: Conversation) -> Result<Self, Self::Error> {
        Ok(domain::Conversation {
            id: value.id.into(),
            user_id: value.user_id.into(),
            intent: intent(value.agent_state.as_ref()),
            message: value.message,
            response: value.response,
            created_at: parse_timestamp(&value.created_at)?,
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RunningSession {
    pub id: u32,
    pub user_id: u32,
    pub distance: Option<f32>,
    pub duration: Option<u32>,
    pub pace: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

impl From<domain::RunningSession> for RunningSession {
    fn from(value: domain::RunningSession) -> Self {
        RunningSession {
            id: *value.id,
            user_id: *value.user_id,
            distance: value.distance,
            duration: value.duration,
            pace: value.pace,
            notes: value.notes,
            created_at: format_timestamp(value.created_at),
        }
    }
}

impl TryFrom<RunningSession> for domain::RunningSession {
    type Error = domain::StorageError;

    fn try_from(value: RunningSession) -> Result<Self, Self::Error> {
        Ok(domain::RunningSession {
            id: value.id.into(),
            user_id: value.user_id.into(),
            distance: value.distance,
            duration: value.duration,
            pace: value.pace,
            notes: value.notes,
            created_at: parse_timestamp(&value.created_at)?,
        })
    }
}

#[derive(Serialize, Debug, PartialEq)]
struct NewRunningSession {
    user_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl From<domain::NewRunningSession> for NewRunningSession {
    fn from(value: domain::NewRunningSession) -> Self {
        NewRunningSession {
            user_id: *value.user_id,
            distance: value.distance,
            duration: value.duration,
            pace: value.pace,
            notes: value.notes,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
    pub version: String,
    pub ai_model: String,
}

impl From<Health> for domain::Health {
    fn from(value: Health) -> Self {
        domain::Health {
            status: value.status,
            version: value.version,
            ai_model: value.ai_model,
        }
    }
}

impl From<domain::Health> for Health {
    fn from(value: domain::Health) -> Self {
        Health {
            status: value.status,
            version: value.version,
            ai_model: value.ai_model,
        }
    }
}
