//! User Entity
//!
//! Identity record. Created at signup and never modified afterwards.

use kernel::id::UserId;
use kernel::principal::Principal;

use crate::domain::value_object::{
    access_token::AccessToken, user_name::UserName, user_password::UserPassword,
};

/// A persisted user
#[derive(Debug, Clone)]
pub struct User {
    /// Row id assigned by the store
    pub user_id: UserId,
    /// Unique login name
    pub user_name: UserName,
    /// Stored as given (plaintext)
    pub password: UserPassword,
    /// Permanent bearer credential
    pub token: AccessToken,
}

impl User {
    /// Identity handed to downstream handlers
    pub fn to_principal(&self) -> Principal {
        Principal::new(self.user_id, self.user_name.as_str())
    }
}

/// A user about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub password: UserPassword,
    pub token: AccessToken,
}

impl NewUser {
    /// Build a signup record with a freshly generated token
    pub fn new(user_name: UserName, password: UserPassword, token_bytes_len: usize) -> Self {
        Self {
            user_name,
            password,
            token: AccessToken::generate(token_bytes_len),
        }
    }

    /// Attach the store-assigned id
    pub fn into_user(self, user_id: UserId) -> User {
        User {
            user_id,
            user_name: self.user_name,
            password: self.password,
            token: self.token,
        }
    }
}
