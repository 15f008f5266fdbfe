use crate::wizard::TransferWizard;
use chrono::{DateTime, Utc};
use lakay_primitives::error::ApiError;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct WizardSession {
    pub id: Uuid,
    pub wizard: TransferWizard,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// In-memory transfer sessions. Nothing here survives a restart.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, WizardSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> WizardSession {
        let now = Utc::now();
        let session = WizardSession {
            id: Uuid::new_v4(),
            wizard: TransferWizard::new(),
            created_at: now,
            updated_at: now,
        };

        self.inner
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Result<WizardSession, ApiError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Runs `f` under the write lock and touches `updated_at`. The closure
    /// must not await.
    pub async fn update<F, R>(&self, id: Uuid, f: F) -> Result<(R, WizardSession), ApiError>
    where
        F: FnOnce(&mut TransferWizard) -> R,
    {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;

        let result = f(&mut session.wizard);
        session.updated_at = Utc::now();

        Ok((result, session.clone()))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), ApiError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Drops sessions untouched for longer than `ttl`; returns how many went.
    pub async fn purge_idle(&self, ttl: Duration) -> usize {
        let Some(cutoff) = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| Utc::now().checked_sub_signed(ttl))
        else {
            return 0;
        };

        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.updated_at > cutoff);
        before - sessions.len()
    }
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Transfer session {} not found", id))
}
