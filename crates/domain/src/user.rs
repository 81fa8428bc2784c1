use chrono::NaiveDateTime;
use derive_more::{Deref, Display};

use crate::{CreateError, DeleteError, Name, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait UserService {
    async fn get_users(&self) -> Result<Vec<User>, ReadError>;
    async fn get_user(&self, id: UserID) -> Result<User, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait UserRepository {
    async fn read_users(&self) -> Result<Vec<User>, ReadError>;
    async fn read_user(&self, id: UserID) -> Result<User, ReadError>;
    async fn create_user(&self, name: Name) -> Result<User, CreateError>;
}

/// Identity of the runner on this device.
///
/// The backend creates the user, the session only remembers which one it was.
#[allow(async_fn_in_trait)]
pub trait SessionService {
    async fn get_session(&self) -> Result<Option<Session>, ReadError>;
    /// Returns the stored session or registers a new anonymous user.
    async fn ensure_session(&self, now: NaiveDateTime) -> Result<Session, CreateError>;
    async fn delete_session(&self) -> Result<(), DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait SessionRepository {
    async fn read_session(&self) -> Result<Option<Session>, ReadError>;
    async fn write_session(&self, session: &Session) -> Result<(), UpdateError>;
    async fn delete_session(&self) -> Result<(), DeleteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserID,
    pub name: Name,
    pub created_at: NaiveDateTime,
}

#[derive(Deref, Debug, Display, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(u32);

impl From<u32> for UserID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserID,
    pub name: Option<Name>,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            name: Some(user.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserID::from(42).to_string(), "42");
        assert_eq!(*UserID::from(7), 7);
    }

    #[test]
    fn test_session_from_user() {
        let user = User {
            id: 3.into(),
            name: Name::new("Paula").unwrap(),
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(6, 30, 0)
                .unwrap(),
        };

        assert_eq!(
            Session::from(&user),
            Session {
                user_id: 3.into(),
                name: Some(Name::new("Paula").unwrap()),
            }
        );
    }
}
