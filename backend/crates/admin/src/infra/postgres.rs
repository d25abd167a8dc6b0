//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{admin::Admin, admin_session::AdminSession};
use crate::domain::repository::{AdminRepository, AdminSessionRepository};
use crate::domain::value_object::{
    admin_id::AdminId, admin_password::AdminPassword, email::Email, person_name::PersonName,
};
use crate::error::{AdminError, AdminResult};

/// PostgreSQL-backed admin repository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const ADMIN_COLUMNS: &str = r#"
    admin_id,
    first_name,
    last_name,
    email,
    password_hash,
    created_at,
    updated_at
"#;

// ============================================================================
// Admin Repository Implementation
// ============================================================================

impl AdminRepository for PgAdminRepository {
    async fn create(&self, admin: &Admin) -> AdminResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admins (
                admin_id,
                first_name,
                last_name,
                email,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(admin.admin_id.as_uuid())
        .bind(admin.first_name.as_str())
        .bind(admin.last_name.as_str())
        .bind(admin.email.as_str())
        .bind(admin.password.as_phc_string())
        .bind(admin.created_at)
        .bind(admin.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, admin_id: &AdminId) -> AdminResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admins WHERE admin_id = $1"
        ))
        .bind(admin_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminRow::into_admin).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AdminResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admins WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminRow::into_admin).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AdminResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1)")
                .bind(email.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Admin Session Repository Implementation
// ============================================================================

impl AdminSessionRepository for PgAdminRepository {
    async fn create_session(&self, session: &AdminSession) -> AdminResult<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_sessions (
                session_id,
                admin_id,
                email,
                first_name,
                last_name,
                created_at,
                expires_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(session.session_id)
        .bind(session.admin_id.as_uuid())
        .bind(session.email.as_str())
        .bind(session.first_name.as_str())
        .bind(session.last_name.as_str())
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_session(&self, session_id: Uuid) -> AdminResult<Option<AdminSession>> {
        let row = sqlx::query_as::<_, AdminSessionRow>(
            r#"
            SELECT
                session_id,
                admin_id,
                email,
                first_name,
                last_name,
                created_at,
                expires_at
            FROM admin_sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AdminSessionRow::into_session))
    }

    async fn delete_session(&self, session_id: Uuid) -> AdminResult<()> {
        sqlx::query("DELETE FROM admin_sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired_sessions(&self) -> AdminResult<u64> {
        let deleted = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= $1")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired admin sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdminRow {
    admin_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AdminRow {
    fn into_admin(self) -> AdminResult<Admin> {
        let password = AdminPassword::from_phc_string(self.password_hash)
            .map_err(|e| AdminError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(Admin {
            admin_id: AdminId::from_uuid(self.admin_id),
            first_name: PersonName::from_db(self.first_name),
            last_name: PersonName::from_db(self.last_name),
            email: Email::from_db(self.email),
            password,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AdminSessionRow {
    session_id: Uuid,
    admin_id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl AdminSessionRow {
    fn into_session(self) -> AdminSession {
        AdminSession {
            session_id: self.session_id,
            admin_id: AdminId::from_uuid(self.admin_id),
            email: Email::from_db(self.email),
            first_name: PersonName::from_db(self.first_name),
            last_name: PersonName::from_db(self.last_name),
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }
}
