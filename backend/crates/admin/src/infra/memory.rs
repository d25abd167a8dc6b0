//! In-Memory Repository Implementations
//!
//! Same uniqueness semantics as the PostgreSQL store (email is unique).
//! Used by tests and local experiments without a database.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{admin::Admin, admin_session::AdminSession};
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::domain::value_object::{admin_id::AdminId, email::Email};
use crate::error::{AdminError, AdminResult};

#[derive(Default)]
struct Tables {
    admins: HashMap<AdminId, Admin>,
    sessions: HashMap<Uuid, AdminSession>,
}

/// Memory-backed admin repository
///
/// Clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryAdminRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove an admin directly (admins are never deleted through the app)
    pub async fn remove_admin(&self, admin_id: &AdminId) -> Option<Admin> {
        self.tables.write().await.admins.remove(admin_id)
    }

    pub async fn session_count(&self) -> usize {
        self.tables.read().await.sessions.len()
    }
}

impl AdminRepository for InMemoryAdminRepository {
    async fn create(&self, admin: &Admin) -> AdminResult<()> {
        let mut tables = self.tables.write().await;

        if tables.admins.values().any(|a| a.email == admin.email) {
            return Err(AdminError::DuplicateKey);
        }

        tables.admins.insert(admin.admin_id, admin.clone());
        Ok(())
    }

    async fn find_by_id(&self, admin_id: &AdminId) -> AdminResult<Option<Admin>> {
        Ok(self.tables.read().await.admins.get(admin_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AdminResult<Option<Admin>> {
        Ok(self
            .tables
            .read()
            .await
            .admins
            .values()
            .find(|a| &a.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AdminResult<bool> {
        Ok(self
            .tables
            .read()
            .await
            .admins
            .values()
            .any(|a| &a.email == email))
    }
}

impl AdminSessionRepository for InMemoryAdminRepository {
    async fn create_session(&self, session: &AdminSession) -> AdminResult<()> {
        self.tables
            .write()
            .await
            .sessions
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_session(&self, session_id: Uuid) -> AdminResult<Option<AdminSession>> {
        Ok(self.tables.read().await.sessions.get(&session_id).cloned())
    }

    async fn delete_session(&self, session_id: Uuid) -> AdminResult<()> {
        self.tables.write().await.sessions.remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired_sessions(&self) -> AdminResult<u64> {
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        let before = tables.sessions.len();
        tables.sessions.retain(|_, s| !s.is_expired_at(now));
        Ok((before - tables.sessions.len()) as u64)
    }
}
