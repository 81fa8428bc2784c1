use chrono::NaiveDateTime;
use derive_more::{Deref, Display};

use crate::{CreateError, ReadError, UserID};

#[allow(async_fn_in_trait)]
pub trait RunningSessionService {
    async fn get_running_sessions(&self, user_id: UserID)
    -> Result<Vec<RunningSession>, ReadError>;
    async fn create_running_session(&self, run: NewRunningSession)
    -> Result<RunningSession, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait RunningSessionRepository {
    async fn read_running_sessions(&self, user_id: UserID)
    -> Result<Vec<RunningSession>, ReadError>;
    async fn create_running_session(&self, run: NewRunningSession)
    -> Result<RunningSession, CreateError>;
}

/// A logged run. All measurements are optional, runners often only leave a note.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningSession {
    pub id: RunningSessionID,
    pub user_id: UserID,
    /// Kilometers
    pub distance: Option<f32>,
    /// Minutes
    pub duration: Option<u32>,
    pub pace: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl RunningSession {
    /// Pace in minutes per kilometer, derived from distance and duration.
    #[must_use]
    pub fn computed_pace(&self) -> Option<f32> {
        match (self.distance, self.duration) {
            (Some(distance), Some(duration)) if distance > 0.0 => {
                #[allow(clippy::cast_precision_loss)]
                Some(duration as f32 / distance)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRunningSession {
    pub user_id: UserID,
    pub distance: Option<f32>,
    pub duration: Option<u32>,
    pub pace: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deref, Debug, Display, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunningSessionID(u32);

impl From<u32> for RunningSessionID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
