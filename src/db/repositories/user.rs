use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set,
};

use crate::db::error::{StoreError, StoreResult};
use crate::entities::{prelude::*, users};
use crate::models::{NewUser, User};

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            f_name: model.f_name,
            l_name: model.l_name,
            email: model.email,
            password: model.password,
        }
    }
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts a user; the UNIQUE constraint on `email` rejects duplicates.
    pub async fn create(&self, user: NewUser) -> StoreResult<User> {
        let email = user.email.clone();

        let model = users::ActiveModel {
            id: NotSet,
            f_name: Set(user.f_name),
            l_name: Set(user.l_name),
            email: Set(user.email),
            password: Set(user.password),
        }
        .insert(&self.conn)
        .await
        .map_err(|e| StoreError::from_write(e, || format!("email '{email}' already exists")))?;

        Ok(User::from(model))
    }

    /// Exact, plaintext match on both columns.
    pub async fn find_by_credentials(&self, email: &str, password: &str) -> StoreResult<User> {
        Users::find()
            .filter(users::Column::Email.eq(email))
            .filter(users::Column::Password.eq(password))
            .one(&self.conn)
            .await?
            .map(User::from)
            .ok_or(StoreError::NotFound)
    }

    pub async fn count_with_email(&self, email: &str) -> StoreResult<u64> {
        Ok(Users::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.conn)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;

    async fn repo() -> UserRepository {
        let store = Store::new("sqlite::memory:").await.unwrap();
        UserRepository::new(store.conn.clone())
    }

    fn ada() -> NewUser {
        NewUser {
            f_name: "Ada".to_string(),
            l_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "engine".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = repo().await;

        let created = repo.create(ada()).await.unwrap();
        assert_eq!(created.email, "ada@example.com");

        let mut again = ada();
        again.f_name = "Someone".to_string();
        let err = repo.create(again).await.unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(repo.count_with_email("ada@example.com").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_credentials() {
        let repo = repo().await;
        repo.create(ada()).await.unwrap();

        let user = repo
            .find_by_credentials("ada@example.com", "engine")
            .await
            .unwrap();
        assert_eq!(user.l_name, "Lovelace");

        assert!(
            repo.find_by_credentials("ada@example.com", "Engine")
                .await
                .unwrap_err()
                .is_not_found()
        );
        assert!(
            repo.find_by_credentials("nobody@example.com", "engine")
                .await
                .unwrap_err()
                .is_not_found()
        );
    }
}
