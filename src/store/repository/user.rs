use crate::store::models::*;
use crate::store::Store;

// ============================================================================
// User Repository
// ============================================================================

pub struct UserRepository;

impl UserRepository {
    pub async fn list(store: &Store) -> Vec<User> {
        store.users.read().await.clone()
    }

    pub async fn find_by_id(store: &Store, id: &str) -> Option<User> {
        store
            .users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    /// First user of the roster, used as the identity of the login stub.
    pub async fn first(store: &Store) -> Option<User> {
        store.users.read().await.first().cloned()
    }

    pub async fn update(store: &Store, id: &str, update: UpdateUser) -> Option<User> {
        let mut users = store.users.write().await;
        let user = users.iter_mut().find(|u| u.id == id)?;

        if let Some(openid) = update.openid {
            user.openid = openid;
        }
        if let Some(nickname) = update.nickname {
            user.nickname = nickname;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(is_online) = update.is_online {
            user.is_online = is_online;
        }
        if let Some(last_active_time) = update.last_active_time {
            user.last_active_time = last_active_time;
        }

        Some(user.clone())
    }

    pub async fn delete(store: &Store, id: &str) -> Option<User> {
        let mut users = store.users.write().await;
        let index = users.iter().position(|u| u.id == id)?;
        Some(users.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_changes_role_only() {
        let store = Store::seeded().unwrap();
        let user = UserRepository::update(
            &store,
            "user-002",
            UpdateUser {
                role: Some(UserRole::Judge),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(user.role, UserRole::Judge);
        assert_eq!(user.nickname, "李四");
    }

    #[tokio::test]
    async fn first_user_follows_deletions() {
        let store = Store::seeded().unwrap();
        assert_eq!(UserRepository::first(&store).await.unwrap().id, "user-001");

        UserRepository::delete(&store, "user-001").await.unwrap();
        assert_eq!(UserRepository::first(&store).await.unwrap().id, "user-002");
        assert!(UserRepository::find_by_id(&store, "user-001").await.is_none());
    }
}
