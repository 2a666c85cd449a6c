use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    controller::auth::SESSION_AUTH_ADMIN_ID,
    data::admin::AdminRepository,
    error::{auth::AuthError, AppError},
};

/// Back-office permission grants. Stored per-row in `admin_permission`,
/// keyed by `as_str()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ManageUsers,
    ManageContent,
    ManageBilling,
    ManageAdmins,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageUsers => "manage_users",
            Self::ManageContent => "manage_content",
            Self::ManageBilling => "manage_billing",
            Self::ManageAdmins => "manage_admins",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "manage_users" => Some(Self::ManageUsers),
            "manage_content" => Some(Self::ManageContent),
            "manage_billing" => Some(Self::ManageBilling),
            "manage_admins" => Some(Self::ManageAdmins),
            _ => None,
        }
    }

    pub fn all() -> [Permission; 4] {
        [
            Self::ManageUsers,
            Self::ManageContent,
            Self::ManageBilling,
            Self::ManageAdmins,
        ]
    }
}

/// Guard resolving the session admin and checking permission grants before
/// an admin handler runs.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in admin holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated admin account
    /// - `Err(AuthError::AdminNotInSession)` - No login in this session
    /// - `Err(AuthError::AdminNotInDatabase)` - Stale session for a deleted account
    /// - `Err(AuthError::AccessDenied)` - A required permission is not granted
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::admin_account::Model, AppError> {
        let admin_repo = AdminRepository::new(self.db);

        let Some(admin_id) = self.session.get::<i32>(SESSION_AUTH_ADMIN_ID).await? else {
            return Err(AuthError::AdminNotInSession.into());
        };

        let Some(admin) = admin_repo.find_by_id(admin_id).await? else {
            return Err(AuthError::AdminNotInDatabase(admin_id).into());
        };

        if !permissions.is_empty() {
            let granted = admin_repo.permissions_for(admin_id).await?;

            for permission in permissions {
                if !granted.iter().any(|g| g == permission.as_str()) {
                    return Err(AuthError::AccessDenied {
                        admin_id,
                        permission: permission.as_str().to_string(),
                    }
                    .into());
                }
            }
        }

        Ok(admin)
    }
}
