//! User Context - 用户实体

use serde::Serialize;

use super::{DomainError, EntityId};

/// 用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn from_new(id: EntityId, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            email: new.email,
        }
    }

    /// 部分更新：只覆盖 patch 中出现的字段
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

/// 已通过校验、尚未分配 id 的用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    email: String,
}

impl NewUser {
    /// username 与 email 都必须是非空字符串
    pub fn new(username: Option<String>, email: Option<String>) -> Result<Self, DomainError> {
        match (username, email) {
            (Some(username), Some(email)) if !username.is_empty() && !email.is_empty() => {
                Ok(Self { username, email })
            }
            _ => Err(DomainError::MissingFields {
                fields: "username and email",
            }),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// 用户部分更新
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_validation() {
        assert!(NewUser::new(Some("soo".into()), Some("soo@test.com".into())).is_ok());
        assert!(NewUser::new(Some("soo".into()), Some(String::new())).is_err());
        assert!(NewUser::new(None, Some("soo@test.com".into())).is_err());

        let err = NewUser::new(None, None).unwrap_err();
        assert_eq!(err.to_string(), "username and email are required");
    }

    #[test]
    fn test_patch_email_only() {
        let new = NewUser::new(Some("soo".into()), Some("soo@test.com".into())).unwrap();
        let mut user = User::from_new(3, new);
        user.apply(UserPatch {
            username: None,
            email: Some("new@test.com".into()),
        });
        assert_eq!(user.username, "soo");
        assert_eq!(user.email, "new@test.com");
        assert_eq!(user.id, 3);
    }
}
