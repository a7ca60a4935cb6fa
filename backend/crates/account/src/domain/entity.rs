//! User Entity
//!
//! A marketplace account: credentials, profile, and what the user owns.

use chrono::{DateTime, Utc};
use kernel::id::{GameId, UserId};
use platform::password::HashedPassword;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{email::Email, user_name::UserName};

/// NFT held by a user, as shown on the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedNft {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    /// Game the NFT was earned in
    pub game: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date_achieved: DateTime<Utc>,
}

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    /// Unique, case-insensitively
    pub username: UserName,
    /// Unique
    pub email: Email,
    pub password_hash: HashedPassword,
    pub bio: Option<String>,
    pub nfts: Vec<OwnedNft>,
    pub achievements: Vec<Achievement>,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    /// Owned games; set semantics, only grown by purchases
    pub games: Vec<GameId>,
}

impl User {
    /// Fresh active account that owns nothing yet
    pub fn new(username: UserName, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            bio: None,
            nfts: Vec::new(),
            achievements: Vec::new(),
            is_active: true,
            date_joined: Utc::now(),
            games: Vec::new(),
        }
    }

    pub fn can_login(&self) -> bool {
        self.is_active
    }

    pub fn owns(&self, game_id: GameId) -> bool {
        self.games.contains(&game_id)
    }
}

/// Owned game resolved against the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct PurchasedGame {
    pub game_id: GameId,
    pub title: Option<String>,
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::PlainPassword;

    #[test]
    fn test_new_user_defaults() {
        let hash = PlainPassword::new("correct-horse-battery".to_string())
            .unwrap()
            .hash(None)
            .unwrap();
        let user = User::new(
            UserName::new("neo").unwrap(),
            Email::new("neo@example.com").unwrap(),
            hash,
        );

        assert!(user.can_login());
        assert!(user.bio.is_none());
        assert!(user.nfts.is_empty() && user.achievements.is_empty() && user.games.is_empty());
        assert!(!user.owns(GameId::new()));
    }

    #[test]
    fn test_achievement_json_shape() {
        let json = r#"{"id":1,"name":"First Blood","description":"Win a match","date_achieved":"2024-05-01T12:00:00Z"}"#;
        let achievement: Achievement = serde_json::from_str(json).unwrap();
        assert_eq!(achievement.name, "First Blood");
    }
}
