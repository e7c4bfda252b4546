use crate::{CoreError, NewUser, User, UserId, UserRepository};

/// Application service in front of the user store.
///
/// Both presentation adapters go through this type; it owns the repository so
/// nothing else holds a direct reference to the collection.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All users in insertion order.
    pub fn list_all(&self) -> Result<Vec<User>, CoreError> {
        self.repo.list_all()
    }

    /// Look up a user; absence is `Ok(None)`.
    pub fn find_by_id(&self, id: UserId) -> Result<Option<User>, CoreError> {
        self.repo.find_by_id(id)
    }

    /// Look up a user, turning absence into `CoreError::NotFound`.
    pub fn get(&self, id: UserId) -> Result<User, CoreError> {
        match self.repo.find_by_id(id)? {
            Some(user) => Ok(user),
            None => Err(CoreError::NotFound(id)),
        }
    }

    /// Create a user with a store-assigned id.
    pub fn create(&self, input: NewUser) -> Result<User, CoreError> {
        self.repo.create(input)
    }
}
