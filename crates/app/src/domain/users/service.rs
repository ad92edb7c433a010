//! Users service.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    domain::users::{
        errors::UsersServiceError,
        models::{NewUser, User},
    },
    store::{Collection, Document},
};

#[derive(Debug, Clone)]
struct UserData {
    name: String,
    email: String,
}

/// In-memory users service.
#[derive(Debug, Clone, Default)]
pub struct MemUsersService {
    users: Collection<UserData>,
}

impl MemUsersService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn into_user(document: Document<UserData>) -> User {
    User {
        id: document.id,
        name: document.data.name,
        email: document.data.email,
        created_at: document.created_at,
    }
}

#[async_trait]
impl UsersService for MemUsersService {
    async fn list_users(&self) -> Result<Vec<User>, UsersServiceError> {
        Ok(self.users.list().await.into_iter().map(into_user).collect())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError> {
        if user.email.trim().is_empty() {
            return Err(UsersServiceError::MissingEmail);
        }

        if self
            .users
            .find(|existing| existing.email == user.email)
            .await
            .is_some()
        {
            return Err(UsersServiceError::AlreadyExists);
        }

        let document = self
            .users
            .insert(UserData {
                name: user.name,
                email: user.email,
            })
            .await;

        Ok(into_user(document))
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), UsersServiceError> {
        if !self.users.delete(id).await {
            return Err(UsersServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Lists users in creation order.
    async fn list_users(&self) -> Result<Vec<User>, UsersServiceError>;

    /// Creates a user; emails are unique.
    async fn create_user(&self, user: NewUser) -> Result<User, UsersServiceError>;

    /// Deletes a user by id.
    async fn delete_user(&self, id: Uuid) -> Result<(), UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_list_users() -> TestResult {
        let service = MemUsersService::new();

        service.create_user(new_user("Asha", "asha@example.com")).await?;
        service.create_user(new_user("Rafi", "rafi@example.com")).await?;

        let users = service.list_users().await?;

        assert_eq!(users.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() -> TestResult {
        let service = MemUsersService::new();

        service.create_user(new_user("Asha", "asha@example.com")).await?;

        let result = service.create_user(new_user("Other", "asha@example.com")).await;

        assert_eq!(result, Err(UsersServiceError::AlreadyExists));

        Ok(())
    }

    #[tokio::test]
    async fn blank_email_is_rejected() {
        let service = MemUsersService::new();

        let result = service.create_user(new_user("Asha", "  ")).await;

        assert_eq!(result, Err(UsersServiceError::MissingEmail));
    }

    #[tokio::test]
    async fn delete_unknown_user_returns_not_found() {
        let service = MemUsersService::new();

        let result = service.delete_user(Uuid::now_v7()).await;

        assert_eq!(result, Err(UsersServiceError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_the_user() -> TestResult {
        let service = MemUsersService::new();

        let user = service.create_user(new_user("Asha", "asha@example.com")).await?;

        service.delete_user(user.id).await?;

        assert!(service.list_users().await?.is_empty());

        Ok(())
    }
}
