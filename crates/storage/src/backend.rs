//! Backend
//!
//! The `REST` server holds users, runs and conversations, while local storage only remembers which
//! user belongs to this device. Without a connection, the session is still available.

use runwell_domain as domain;
use runwell_web_app::Settings;

use super::local_storage::Identity;
use super::rest::{GlooNetSendRequest, REST, SendRequest};

#[derive(Clone)]
pub struct Backend<S: SendRequest> {
    pub rest: REST<S>,
    pub identity: Identity,
}

impl Backend<GlooNetSendRequest> {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            rest: REST::new(settings),
            identity: Identity,
        }
    }
}

impl Default for Backend<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl<S: SendRequest> domain::SessionRepository for Backend<S> {
    async fn read_session(&self) -> Result<Option<domain::Session>, domain::ReadError> {
        self.identity.read_session().await
    }

    async fn write_session(&self, session: &domain::Session) -> Result<(), domain::UpdateError> {
        self.identity.write_session(session).await
    }

    async fn delete_session(&self) -> Result<(), domain::DeleteError> {
        self.identity.delete_session().await
    }
}

impl<S: SendRequest> domain::UserRepository for Backend<S> {
    async fn read_users(&self) -> Result<Vec<domain::User>, domain::ReadError> {
        self.rest.read_users().await
    }

    async fn read_user(&self, id: domain::UserID) -> Result<domain::User, domain::ReadError> {
        self.rest.read_user(id).await
    }

    async fn create_user(&self, name: domain::Name) -> Result<domain::User, domain::CreateError> {
        self.rest.create_user(name).await
    }
}

impl<S: SendRequest> domain::ChatRepository for Backend<S> {
    async fn send_message(
        &self,
        user_id: domain::UserID,
        message: &domain::Message,
    ) -> Result<domain::ChatReply, domain::ReadError> {
        self.rest.send_message(user_id, message).await
    }
}

impl<S: SendRequest> domain::ConversationRepository for Backend<S> {
    async fn read_conversations(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::Conversation>, domain::ReadError> {
        self.rest.read_conversations(user_id).await
    }
}

impl<S: SendRequest> domain::RunningSessionRepository for Backend<S> {
    async fn read_running_sessions(
        &self,
        user_id: domain::UserID,
    ) -> Result<Vec<domain::RunningSession>, domain::ReadError> {
        self.rest.read_running_sessions(user_id).await
    }

    async fn create_running_session(
        &self,
        run: domain::NewRunningSession,
    ) -> Result<domain::RunningSession, domain::CreateError> {
        self.rest.create_running_session(run).await
    }
}

impl<S: SendRequest> domain::HealthRepository for Backend<S> {
    async fn read_health(&self) -> Result<domain::Health, domain::ReadError> {
        self.rest.read_health().await
    }
}

#[cfg(test)]
mod tests {
    #[cfg(target_arch = "wasm32")]
    mod wasm {
        use std::cell::RefCell;

        use chrono::NaiveDate;
        use pretty_assertions::assert_eq;
        use runwell_domain::{
            ChatService, Message, MuscleID, ReplySource, Service, SessionRepository,
            SessionService,
        };
        use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

        use crate::rest;
        use crate::tests::data::USER;

        use super::super::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        async fn test_ensure_session() {
            gloo_storage::LocalStorage::clear();
            let service = Service::new(backend_with_responses(vec![
                gloo_net::http::Response::builder()
                    .status(200)
                    .json(&rest::User::from(USER.clone())),
            ]));
            let now = NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(6, 0, 0)
                .unwrap();

            let session = service.ensure_session(now).await.unwrap();

            assert_eq!(session.user_id, USER.id);
            assert_eq!(Identity.read_session().await.unwrap(), Some(session.clone()));

            // no further response available, the stored session is used
            assert_eq!(service.ensure_session(now).await.unwrap(), session);
        }

        #[wasm_bindgen_test]
        async fn test_ensure_session_no_connection() {
            gloo_storage::LocalStorage::clear();
            let service = Service::new(backend_with_responses(vec![]));
            let now = NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(6, 0, 0)
                .unwrap();

            assert!(matches!(
                service.ensure_session(now).await,
                Err(domain::CreateError::Storage(
                    domain::StorageError::NoConnection
                ))
            ));
            assert_eq!(Identity.read_session().await.unwrap(), None);
        }

        #[wasm_bindgen_test]
        async fn test_ask_fallback() {
            let service = Service::new(backend_with_responses(vec![]));

            let reply = service
                .ask(
                    Some(USER.id),
                    &Message::new("how do I stretch?").unwrap(),
                    Some(MuscleID::Hamstrings),
                )
                .await;

            assert_eq!(reply.source, ReplySource::Local);
            assert!(reply.content.starts_with("Here's what I recommend for your Hamstrings:"));
        }

        fn backend_with_responses(
            responses: Vec<Result<gloo_net::http::Response, gloo_net::Error>>,
        ) -> Backend<MockSendRequest> {
            Backend {
                rest: REST {
                    sender: MockSendRequest {
                        responses: RefCell::new(responses),
                    },
                    settings: Settings::default(),
                },
                identity: Identity,
            }
        }

        struct MockSendRequest {
            responses: RefCell<Vec<Result<gloo_net::http::Response, gloo_net::Error>>>,
        }

        impl SendRequest for MockSendRequest {
            async fn send_request(
                &self,
                _: gloo_net::http::Request,
            ) -> Result<gloo_net::http::Response, gloo_net::Error> {
                let mut responses = self.responses.borrow_mut();
                if responses.is_empty() {
                    Err(gloo_net::Error::GlooError("no response".to_string()))
                } else {
                    responses.remove(0)
                }
            }
        }
    }
}
