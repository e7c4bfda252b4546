//! Domain library for the user directory.
//!
//! Holds the domain types, the repository port, and error definitions. The
//! only dependency is `serde` for the wire shape of [`User`]; adapters and IO
//! concerns stay out of this crate.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a user, assigned by the store.
pub type UserId = i64;

/// A stored user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new<N: Into<String>, E: Into<String>>(id: UserId, name: N, email: E) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Input data for creating a user. Clients never supply the id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new<N: Into<String>, E: Into<String>>(name: N, email: E) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// The two records every fresh store starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Matt", "matt@gmail.com"),
        User::new(2, "Neo", "neo@gmail.com"),
    ]
}

/// Repository port owning the user collection.
pub trait UserRepository: Send + Sync {
    /// All records in insertion order.
    fn list_all(&self) -> Result<Vec<User>, CoreError>;
    /// Exact id match; `Ok(None)` when nothing matches.
    fn find_by_id(&self, id: UserId) -> Result<Option<User>, CoreError>;
    /// Assign an id, append the record, and return it.
    fn create(&self, input: NewUser) -> Result<User, CoreError>;
}

impl<R: UserRepository + ?Sized> UserRepository for Arc<R> {
    fn list_all(&self) -> Result<Vec<User>, CoreError> {
        (**self).list_all()
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<User>, CoreError> {
        (**self).find_by_id(id)
    }

    fn create(&self, input: NewUser) -> Result<User, CoreError> {
        (**self).create(input)
    }
}

/// Core domain errors (no external error crates to keep deps minimal).
#[derive(Debug, PartialEq, Eq)]
pub enum CoreError {
    NotFound(UserId),
    InvalidId(String),
    Repository(String),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::NotFound(id) => write!(f, "User with id {} not found", id),
            CoreError::InvalidId(raw) => write!(f, "invalid user id: {}", raw),
            CoreError::Repository(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

impl Error for CoreError {}

/// Return a short about/version line for the binary to print.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{} - user directory domain", pkg, ver)
}

pub mod adapters;
pub mod service;
pub mod validate;
