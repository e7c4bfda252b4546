use std::sync::{Mutex, MutexGuard};

use crate::{seed_users, CoreError, NewUser, User, UserId, UserRepository};

/// In-memory user repository. A single mutex serializes every read and write,
/// so id assignment and append happen atomically.
pub struct InMemoryUserRepo {
    inner: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    /// Empty store.
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    /// Store preloaded with the Matt and Neo records.
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            inner: Mutex::new(users),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, CoreError> {
        self.inner
            .lock()
            .map_err(|_| CoreError::Repository("mutex poisoned".into()))
    }
}

impl UserRepository for InMemoryUserRepo {
    fn list_all(&self) -> Result<Vec<User>, CoreError> {
        Ok(self.lock()?.clone())
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<User>, CoreError> {
        let users = self.lock()?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    fn create(&self, input: NewUser) -> Result<User, CoreError> {
        let mut users = self.lock()?;
        // id = count + 1; only unique while records are never removed
        let id = users.len() as UserId + 1;
        let user = User {
            id,
            name: input.name,
            email: input.email,
        };
        users.push(user.clone());
        Ok(user)
    }
}
