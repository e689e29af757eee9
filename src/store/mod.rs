//! In-memory user records and the mutations the prompt loop performs on them.
//!
//! Insertion order is the only ordering; a record's position is the index
//! used by `edit`. Every operation reports a [`Message`] instead of failing.

use std::fmt::{Display, Formatter};

use crate::message::Message;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: i64,
}

impl User {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Rule applied when adding: positive age and a non-empty name.
    pub fn is_valid(&self) -> bool {
        self.age > 0 && !self.name.is_empty()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    InvalidUser,
    InvalidIndex(i64),
    NotFound(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidUser => write!(f, "Wrong data!"),
            StoreError::InvalidIndex(_) => write!(f, "Invalid index. User not found..."),
            StoreError::NotFound(_) => write!(f, "User not found..."),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StoreError> for Message {
    fn from(err: StoreError) -> Self {
        Message::error(err.to_string())
    }
}

/// What `list_all` found.
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    Users(&'a [User]),
    NoData,
}

#[derive(Clone, Debug, Default)]
pub struct UserStore {
    data: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn users(&self) -> &[User] {
        &self.data
    }

    pub fn list_all(&self) -> Listing<'_> {
        if self.data.is_empty() {
            Listing::NoData
        } else {
            Listing::Users(&self.data)
        }
    }

    pub fn add(&mut self, user: User) -> Message {
        match self.try_add(user) {
            Ok(()) => Message::success("User has been successfully added!"),
            Err(e) => e.into(),
        }
    }

    /// Replace the record at `index`. The replacement is not validated.
    pub fn edit(&mut self, index: i64, user: User) -> Message {
        match self.try_edit(index, user) {
            Ok(()) => Message::success("User updated!"),
            Err(e) => e.into(),
        }
    }

    /// Delete the first record whose name equals `name` exactly.
    pub fn remove(&mut self, name: &str) -> Message {
        match self.try_remove(name) {
            Ok(()) => Message::success("User deleted!"),
            Err(e) => e.into(),
        }
    }

    fn try_add(&mut self, user: User) -> Result<(), StoreError> {
        if !user.is_valid() {
            tracing::debug!(name = %user.name, age = user.age, "rejected user");
            return Err(StoreError::InvalidUser);
        }
        tracing::debug!(name = %user.name, age = user.age, index = self.data.len(), "added user");
        self.data.push(user);
        Ok(())
    }

    fn try_edit(&mut self, index: i64, user: User) -> Result<(), StoreError> {
        let slot = usize::try_from(index)
            .ok()
            .and_then(|i| self.data.get_mut(i))
            .ok_or(StoreError::InvalidIndex(index))?;
        if !user.is_valid() {
            tracing::info!(index, name = %user.name, age = user.age, "edit stores a user that add would reject");
        }
        tracing::debug!(index, name = %user.name, age = user.age, "edited user");
        *slot = user;
        Ok(())
    }

    fn try_remove(&mut self, name: &str) -> Result<(), StoreError> {
        let index = self
            .data
            .iter()
            .position(|u| u.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        self.data.remove(index);
        tracing::debug!(name, index, "removed user");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageVariant;

    fn seeded(users: &[(&str, i64)]) -> UserStore {
        let mut store = UserStore::new();
        for (name, age) in users {
            store.add(User::new(*name, *age));
        }
        store
    }

    #[test]
    fn add_rejects_zero_age_and_empty_name() {
        let mut store = UserStore::new();
        let m = store.add(User::new("Anna", 0));
        assert_eq!(m.content(), "Wrong data!");
        let m = store.add(User::new("", 30));
        assert!(m.is_error());
        assert!(store.is_empty());
    }

    #[test]
    fn edit_rejects_negative_and_past_end_indices() {
        let mut store = seeded(&[("Anna", 21)]);
        for index in [-1, 1, i64::MAX] {
            let m = store.edit(index, User::new("X", 1));
            assert_eq!(m.content(), "Invalid index. User not found...");
        }
        assert_eq!(store.users(), &[User::new("Anna", 21)]);
    }

    #[test]
    fn edit_keeps_invalid_replacement() {
        let mut store = seeded(&[("Anna", 21)]);
        let m = store.edit(0, User::new("", -3));
        assert_eq!(m.variant, MessageVariant::Success);
        assert_eq!(store.users()[0], User::new("", -3));
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged_during_invalid_edit(level: tracing::Level) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let mut store = seeded(&[("Anna", 21)]);
        tracing::subscriber::with_default(subscriber, || {
            store.edit(0, User::new("", -3));
        });
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn invalid_edit_is_quiet_at_default_level() {
        assert_eq!(logged_during_invalid_edit(tracing::Level::WARN), "");
        assert!(logged_during_invalid_edit(tracing::Level::INFO).contains("edit stores a user that add would reject"));
    }

    #[test]
    fn remove_takes_first_duplicate_only() {
        let mut store = seeded(&[("Bob", 30), ("Anna", 21), ("Bob", 40)]);
        assert_eq!(store.remove("Bob").content(), "User deleted!");
        assert_eq!(store.users(), &[User::new("Anna", 21), User::new("Bob", 40)]);
    }

    #[test]
    fn remove_is_case_sensitive() {
        let mut store = seeded(&[("Bob", 30)]);
        assert_eq!(store.remove("bob").content(), "User not found...");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn list_all_reports_no_data_when_empty() {
        assert_eq!(UserStore::new().list_all(), Listing::NoData);
    }
}
