use crate::ReadError;

#[allow(async_fn_in_trait)]
pub trait HealthService {
    async fn get_health(&self) -> Result<Health, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait HealthRepository {
    async fn read_health(&self) -> Result<Health, ReadError>;
}

/// Status reported by the chat backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    pub version: String,
    pub ai_model: String,
}

impl Health {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}
