use crate::models::{NewUser, User};
use chrono::{SecondsFormat, Utc};
use parking_lot::RwLock;

#[derive(Debug)]
pub struct Database {
    users: RwLock<Vec<User>>,
}

impl Database {
    /// Store seeded with the demo users.
    pub fn new() -> Self {
        Self::with_users(vec![
            User::new("1", "a@x.com", "Alice", "2024-01-01T00:00:00Z"),
            User::new("2", "b@x.com", "Bob", "2024-01-02T00:00:00Z"),
        ])
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// First record whose id matches, in insertion order.
    pub fn find_by_id(&self, id: &str) -> Option<User> {
        self.users.read().iter().find(|user| user.id == id).cloned()
    }

    pub fn all(&self) -> Vec<User> {
        self.users.read().clone()
    }

    pub fn insert(&self, new_user: NewUser) -> User {
        let mut users = self.users.write();
        let user = User {
            id: next_id(&users),
            email: new_user.email,
            name: new_user.name,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        users.push(user.clone());
        log::debug!("inserted user {}", user.id);
        user
    }
}

/// One past the largest numeric id, so seeded ids never collide with new ones.
fn next_id(users: &[User]) -> String {
    let max = users
        .iter()
        .filter_map(|user| user.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_seeded_user() {
        let database = Database::new();
        let user = database.find_by_id("1").expect("seeded user");
        assert_eq!(
            user,
            User::new("1", "a@x.com", "Alice", "2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn absent_id_is_none() {
        let database = Database::new();
        assert_eq!(database.find_by_id("999"), None);
        assert_eq!(database.find_by_id(""), None);
    }

    #[test]
    fn first_match_wins_on_duplicate_ids() {
        let database = Database::with_users(vec![
            User::new("7", "first@x.com", "First", "2024-01-01T00:00:00Z"),
            User::new("7", "second@x.com", "Second", "2024-01-01T00:00:00Z"),
        ]);
        assert_eq!(database.find_by_id("7").map(|u| u.name), Some("First".to_owned()));
    }

    #[test]
    fn insert_appends_with_next_id() {
        let database = Database::new();
        let created = database.insert(NewUser {
            email: "user42@example.com".to_owned(),
            name: "Demo User 42".to_owned(),
        });
        assert_eq!(created.id, "3");
        assert!(created.created_at.ends_with('Z'));
        assert_eq!(database.find_by_id("3"), Some(created));
        assert_eq!(database.all().len(), 3);
    }

    #[test]
    fn insert_skips_past_sparse_ids() {
        let database = Database::with_users(vec![
            User::new("5", "e@x.com", "Eve", "2024-01-05T00:00:00Z"),
            User::new("2", "b@x.com", "Bob", "2024-01-02T00:00:00Z"),
            User::new("admin", "root@x.com", "Root", "2024-01-01T00:00:00Z"),
        ]);
        let first = database.insert(NewUser {
            email: "user1@example.com".to_owned(),
            name: "Demo User 1".to_owned(),
        });
        let second = database.insert(NewUser {
            email: "user2@example.com".to_owned(),
            name: "Demo User 2".to_owned(),
        });
        assert_eq!(first.id, "6");
        assert_eq!(second.id, "7");
        assert_eq!(database.find_by_id("5").map(|u| u.name), Some("Eve".to_owned()));
    }
}
