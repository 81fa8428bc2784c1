use chrono::NaiveDateTime;
use log::{debug, error, info};

use crate::{
    ChatRepository, ChatService, Conversation, ConversationRepository, CreateError, DeleteError,
    Health, HealthRepository, HealthService, Message, MuscleID, Name, NewRunningSession,
    ReadError, Reply, ReplySource, RunningSession, RunningSessionRepository,
    RunningSessionService, Session, SessionRepository, SessionService, UpdateError, User, UserID,
    UserRepository, UserService, responder,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: HealthRepository> HealthService for Service<R> {
    async fn get_health(&self) -> Result<Health, ReadError> {
        log_on_error!(self.repository.read_health(), ReadError, "get", "health")
    }
}

impl<R: UserRepository> UserService for Service<R> {
    async fn get_users(&self) -> Result<Vec<User>, ReadError> {
        log_on_error!(self.repository.read_users(), ReadError, "get", "users")
    }

    async fn get_user(&self, id: UserID) -> Result<User, ReadError> {
        log_on_error!(self.repository.read_user(id), ReadError, "get", "user")
    }
}

impl<R: UserRepository + SessionRepository> SessionService for Service<R> {
    async fn get_session(&self) -> Result<Option<Session>, ReadError> {
        log_on_error!(self.repository.read_session(), ReadError, "get", "session")
    }

    async fn ensure_session(&self, now: NaiveDateTime) -> Result<Session, CreateError> {
        if let Some(session) =
            log_on_error!(self.repository.read_session(), ReadError, "read", "session")?
        {
            return Ok(session);
        }

        let user = log_on_error!(
            self.repository.create_user(Name::anonymous(now)),
            CreateError,
            "create",
            "user"
        )?;
        let session = Session::from(&user);
        log_on_error!(
            self.repository.write_session(&session),
            UpdateError,
            "write",
            "session"
        )?;
        info!("registered runner {} as {}", user.name, user.id);

        Ok(session)
    }

    async fn delete_session(&self) -> Result<(), DeleteError> {
        log_on_error!(
            self.repository.delete_session(),
            DeleteError,
            "delete",
            "session"
        )
    }
}

impl<R: ChatRepository + ConversationRepository> ChatService for Service<R> {
    async fn ask(
        &self,
        user_id: Option<UserID>,
        message: &Message,
        selected: Option<MuscleID>,
    ) -> Reply {
        if let Some(user_id) = user_id {
            if let Ok(reply) = log_on_error!(
                self.repository.send_message(user_id, message),
                ReadError,
                "send",
                "chat message"
            ) {
                return Reply {
                    content: reply.response,
                    source: ReplySource::Backend,
                };
            }
        }

        Reply {
            content: responder::classify(message.as_ref(), selected),
            source: ReplySource::Local,
        }
    }

    async fn get_conversations(&self, user_id: UserID) -> Result<Vec<Conversation>, ReadError> {
        log_on_error!(
            self.repository.read_conversations(user_id),
            ReadError,
            "get",
            "conversations"
        )
    }
}

impl<R: RunningSessionRepository> RunningSessionService for Service<R> {
    async fn get_running_sessions(
        &self,
        user_id: UserID,
    ) -> Result<Vec<RunningSession>, ReadError> {
        log_on_error!(
            self.repository.read_running_sessions(user_id),
            ReadError,
            "get",
            "running sessions"
        )
    }

    async fn create_running_session(
        &self,
        run: NewRunningSession,
    ) -> Result<RunningSession, CreateError> {
        log_on_error!(
            self.repository.create_running_session(run),
            CreateError,
            "create",
            "running session"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ChatReply, StorageError, responder::GREETING};

    static CREATED_AT: std::sync::LazyLock<NaiveDateTime> = std::sync::LazyLock::new(|| {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap()
    });

    #[derive(Default)]
    struct Repository {
        online: bool,
        session: RefCell<Option<Session>>,
        created_users: Cell<u32>,
        sent_messages: RefCell<Vec<(UserID, String)>>,
    }

    impl Repository {
        fn online() -> Self {
            Self {
                online: true,
                ..Self::default()
            }
        }

        fn check_connection(&self) -> Result<(), StorageError> {
            if self.online {
                Ok(())
            } else {
                Err(StorageError::NoConnection)
            }
        }
    }

    impl ChatRepository for Repository {
        async fn send_message(
            &self,
            user_id: UserID,
            message: &Message,
        ) -> Result<ChatReply, ReadError> {
            self.check_connection()?;
            self.sent_messages
                .borrow_mut()
                .push((user_id, message.to_string()));
            Ok(ChatReply {
                response: format!("backend: {message}"),
                intent: None,
            })
        }
    }

    impl ConversationRepository for Repository {
        async fn read_conversations(
            &self,
            user_id: UserID,
        ) -> Result<Vec<Conversation>, ReadError> {
            self.check_connection()?;
            Ok(vec![Conversation {
                id: 1.into(),
                user_id,
                message: "hello".to_string(),
                response: "Hi!".to_string(),
                intent: Some("greeting".to_string()),
                created_at: *CREATED_AT,
            }])
        }
    }

    impl UserRepository for Repository {
        async fn read_users(&self) -> Result<Vec<User>, ReadError> {
            self.check_connection()?;
            Ok(vec![])
        }

        async fn read_user(&self, _: UserID) -> Result<User, ReadError> {
            Err(ReadError::Other("not found".into()))
        }

        async fn create_user(&self, name: Name) -> Result<User, CreateError> {
            self.check_connection()?;
            self.created_users.set(self.created_users.get() + 1);
            Ok(User {
                id: (100 + self.created_users.get()).into(),
                name,
                created_at: *CREATED_AT,
            })
        }
    }

    impl SessionRepository for Repository {
        async fn read_session(&self) -> Result<Option<Session>, ReadError> {
            Ok(self.session.borrow().clone())
        }

        async fn write_session(&self, session: &Session) -> Result<(), UpdateError> {
            *self.session.borrow_mut() = Some(session.clone());
            Ok(())
        }

        async fn delete_session(&self) -> Result<(), DeleteError> {
            *self.session.borrow_mut() = None;
            Ok(())
        }
    }

    impl HealthRepository for Repository {
        async fn read_health(&self) -> Result<Health, ReadError> {
            self.check_connection()?;
            Ok(Health {
                status: "healthy".to_string(),
                version: "1.0.0".to_string(),
                ai_model: "Google Gemini".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_ask_backend() {
        let service = Service::new(Repository::online());
        let message = Message::new("can I run tomorrow?").unwrap();

        assert_eq!(
            service
                .ask(Some(7.into()), &message, Some(MuscleID::Calves))
                .await,
            Reply {
                content: "backend: can I run tomorrow?".to_string(),
                source: ReplySource::Backend,
            }
        );
        assert_eq!(
            *service.repository.sent_messages.borrow(),
            vec![(UserID::from(7), "can I run tomorrow?".to_string())]
        );
    }

    #[tokio::test]
    async fn test_ask_backend_unreachable() {
        let service = Service::new(Repository::default());
        let message = Message::new("can I run tomorrow?").unwrap();

        assert_eq!(
            service
                .ask(Some(7.into()), &message, Some(MuscleID::Quadriceps))
                .await,
            Reply {
                content: responder::classify("can I run tomorrow?", Some(MuscleID::Quadriceps)),
                source: ReplySource::Local,
            }
        );
    }

    #[tokio::test]
    async fn test_ask_without_user() {
        let service = Service::new(Repository::online());

        assert_eq!(
            service
                .ask(None, &Message::new("hello").unwrap(), None)
                .await,
            Reply {
                content: GREETING.to_string(),
                source: ReplySource::Local,
            }
        );
        assert!(service.repository.sent_messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_ensure_session_creates_user_once() {
        let service = Service::new(Repository::online());
        let now = NaiveDate::from_ymd_opt(2023, 11, 14)
            .unwrap()
            .and_hms_opt(22, 13, 20)
            .unwrap();

        let session = service.ensure_session(now).await.unwrap();

        assert_eq!(session.user_id, UserID::from(101));
        assert_eq!(
            session.name.as_ref().map(ToString::to_string),
            Some("Runner_1700000000000".to_string())
        );
        assert_eq!(service.get_session().await.unwrap(), Some(session.clone()));

        assert_eq!(service.ensure_session(now).await.unwrap(), session);
        assert_eq!(service.repository.created_users.get(), 1);
    }

    #[tokio::test]
    async fn test_ensure_session_offline() {
        let service = Service::new(Repository::default());

        assert!(matches!(
            service.ensure_session(*CREATED_AT).await,
            Err(CreateError::Storage(StorageError::NoConnection))
        ));
        assert_eq!(service.get_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let service = Service::new(Repository::online());
        service.ensure_session(*CREATED_AT).await.unwrap();

        service.delete_session().await.unwrap();

        assert_eq!(service.get_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_conversations() {
        let service = Service::new(Repository::online());

        let conversations = service.get_conversations(3.into()).await.unwrap();

        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].user_id, UserID::from(3));
        assert!(matches!(
            Service::new(Repository::default())
                .get_conversations(3.into())
                .await,
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
    }

    #[tokio::test]
    async fn test_get_health() {
        assert!(
            Service::new(Repository::online())
                .get_health()
                .await
                .unwrap()
                .is_healthy()
        );
        assert!(
            Service::new(Repository::default())
                .get_health()
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_get_user_error() {
        assert!(matches!(
            Service::new(Repository::online()).get_user(1.into()).await,
            Err(ReadError::Other(err)) if err.to_string() == "not found"
        ));
    }
}
