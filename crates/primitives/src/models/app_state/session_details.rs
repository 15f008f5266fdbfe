use eyre::{eyre, Report};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub session_ttl: Duration,
    pub sweep_interval: Duration,
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(30 * 60),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

impl SessionInfo {
    pub fn new() -> Result<Self, Report> {
        let ttl_minutes: u64 = env::var("SESSION_TTL_MINUTES")
            .unwrap_or_else(|_| "30".into())
            .parse()?;
        let sweep_seconds: u64 = env::var("SESSION_SWEEP_SECONDS")
            .unwrap_or_else(|_| "60".into())
            .parse()?;

        let ttl_seconds = ttl_minutes
            .checked_mul(60)
            .ok_or_else(|| eyre!("SESSION_TTL_MINUTES is too large: {}", ttl_minutes))?;

        Ok(Self {
            session_ttl: Duration::from_secs(ttl_seconds),
            sweep_interval: Duration::from_secs(sweep_seconds.max(1)),
        })
    }
}
