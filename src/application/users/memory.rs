use super::entity;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct Memory {
    users: Arc<RwLock<Vec<entity::User>>>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::with_users(vec![
            entity::User {
                id: 1,
                name: "Alice".to_string(),
            },
            entity::User {
                id: 2,
                name: "Bob".to_string(),
            },
        ])
    }

    pub fn with_users(users: Vec<entity::User>) -> Memory {
        Memory {
            users: Arc::new(RwLock::new(users)),
        }
    }

    pub async fn list_users(&self) -> Vec<entity::User> {
        let users = self.users.read().await;

        users.clone()
    }

    // the id is assigned under the same write guard as the append, so two
    // concurrent creates can never observe the same length
    pub async fn append_user(&self, mut user: entity::User) -> entity::User {
        let mut users = self.users.write().await;

        user.id = users.len() as u64 + 1;
        users.push(user.clone());

        user
    }
}
