use crate::core::error::{AccountError, StorageError};
use crate::models::personality;
use crate::models::session::Session;
use crate::models::user::{User, Year};
use crate::storage::kv::KeyValueStorage;
use crate::utils::time::{elapsed_program_years, next_id, Clock};
use crate::validation::password::validate_password;
use tracing::{debug, error, info, warn};

pub const DEFAULT_USERS_KEY: &str = "users";
pub const DEFAULT_PROGRAM_START_YEAR: i32 = 2025;

/// Read the persisted user list.
///
/// A missing key, a storage failure and a payload that is not a JSON array
/// all yield an empty list. Records that fail to decode are skipped one by
/// one. Failures are logged.
pub fn load_users(storage: &dyn KeyValueStorage, key: &str) -> Vec<User> {
    let payload = match storage.get_item(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            debug!(key = %key, "No stored user list, starting empty");
            return Vec::new();
        }
        Err(e) => {
            error!(key = %key, error = %e, "Failed to read user list");
            return Vec::new();
        }
    };

    let records = match serde_json::from_str::<Vec<serde_json::Value>>(&payload) {
        Ok(records) => records,
        Err(e) => {
            error!(key = %key, error = %e, "Failed to parse stored user list, starting empty");
            return Vec::new();
        }
    };

    // A malformed record is dropped on its own; the rest of the list survives
    records
        .into_iter()
        .filter_map(|record| {
            let field = |name: &str| match record.get(name) {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            };
            let username = field("username");
            let id = field("id");

            match serde_json::from_value::<User>(record) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(key = %key, username = %username, id = %id, error = %e, "Skipping invalid user record");
                    None
                }
            }
        })
        .collect()
}

/// Serialize and write the full user list under `key`
pub fn save_users(storage: &dyn KeyValueStorage, key: &str, users: &[User]) -> Result<(), StorageError> {
    let payload = serde_json::to_string(users)?;
    storage.set_item(key, &payload)
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub user: User,
    /// The account moved up a year during this login
    pub promoted: bool,
}

/// Authoritative holder of all user records and the active session.
///
/// The whole list is rewritten to storage after every mutation once
/// [`AccountStore::load`] has run. Storage failures are logged and never
/// undo the in-memory change.
pub struct AccountStore {
    storage: Box<dyn KeyValueStorage>,
    clock: Box<dyn Clock>,
    users_key: String,
    program_start_year: i32,
    users: Vec<User>,
    session: Option<Session>,
    loaded: bool,
    last_id: Option<i64>,
}

impl AccountStore {
    pub fn new(storage: Box<dyn KeyValueStorage>, clock: Box<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            users_key: DEFAULT_USERS_KEY.to_string(),
            program_start_year: DEFAULT_PROGRAM_START_YEAR,
            users: Vec::new(),
            session: None,
            loaded: false,
            last_id: None,
        }
    }

    pub fn with_users_key(mut self, key: impl Into<String>) -> Self {
        self.users_key = key.into();
        self
    }

    pub fn with_program_start_year(mut self, year: i32) -> Self {
        self.program_start_year = year;
        self
    }

    /// Replace the in-memory list with the persisted one and enable writes
    pub fn load(&mut self) -> &[User] {
        self.users = load_users(self.storage.as_ref(), &self.users_key);
        self.last_id = self.users.iter().filter_map(|u| u.id.parse::<i64>().ok()).max();
        self.loaded = true;

        info!(key = %self.users_key, users = self.users.len(), "User list loaded");
        &self.users
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Write the full list; failures are logged only
    pub fn save(&self) {
        if !self.loaded {
            debug!("Skipping user list write before initial load");
            return;
        }

        match save_users(self.storage.as_ref(), &self.users_key, &self.users) {
            Ok(()) => debug!(key = %self.users_key, users = self.users.len(), "User list saved"),
            Err(e) => error!(key = %self.users_key, error = %e, "Failed to save user list"),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn find(&self, username: &str) -> Option<&User> {
        let username = username.trim();
        self.users.iter().find(|u| u.username == username)
    }

    /// Create an account and log it in.
    ///
    /// The new record lands in `department` with no personality type and no
    /// courses.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        fullname: &str,
        year: u8,
        department: &str,
    ) -> Result<User, AccountError> {
        let username = username.trim();
        let fullname = fullname.trim();

        if username.is_empty() || password.trim().is_empty() || fullname.is_empty() {
            return Err(AccountError::MissingField);
        }

        if let Some(rule) = validate_password(password) {
            return Err(AccountError::InvalidPassword(rule));
        }

        if self.users.iter().any(|u| u.username == username) {
            warn!(username = %username, "Registration rejected: username taken");
            return Err(AccountError::DuplicateUsername);
        }

        let year = Year::new(year)?;

        let id = next_id(self.clock.now_millis(), self.last_id);
        self.last_id = Some(id);

        let user = User::new(
            id.to_string(),
            username.to_string(),
            password.to_string(),
            fullname.to_string(),
            department.to_string(),
            year,
        );

        self.users.push(user.clone());
        self.save();
        self.session = Some(Session::open(&user));

        info!(username = %user.username, id = %user.id, year = %user.year, "User registered");
        Ok(user)
    }

    /// Authenticate and open a session, promoting the account a year if due
    pub fn login(&mut self, username: &str, password: &str) -> Result<LoginOutcome, AccountError> {
        let username = username.trim();

        if username.is_empty() || password.is_empty() {
            return Err(AccountError::MissingField);
        }

        let Some(index) = self
            .users
            .iter()
            .position(|u| u.username == username && u.password == password)
        else {
            debug!("Login rejected");
            return Err(AccountError::InvalidCredentials);
        };

        let elapsed = elapsed_program_years(self.program_start_year, self.clock.current_year());
        let user = &mut self.users[index];

        let promoted = elapsed > i32::from(user.year.get()) && user.promote();
        let user = user.clone();

        if promoted {
            info!(username = %user.username, year = %user.year, "User promoted to next year");
            self.save();
        }

        self.session = Some(Session::open(&user));
        info!(username = %user.username, "User logged in");

        Ok(LoginOutcome { user, promoted })
    }

    /// Drop the session and any uncommitted edits
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(username = %session.username(), "User logged out");
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// The committed record of the logged-in user
    pub fn current_user(&self) -> Option<&User> {
        let session = self.session.as_ref()?;
        self.users.iter().find(|u| u.username == session.username())
    }

    /// Commit the session's working courses and personality type
    /// (uppercased) into the user's record and persist the list.
    pub fn save_progress(&mut self) -> Result<&User, AccountError> {
        let session = self.session.as_ref().ok_or(AccountError::NoActiveSession)?;

        let index = self
            .users
            .iter()
            .position(|u| u.username == session.username())
            .ok_or(AccountError::NoActiveSession)?;

        self.users[index].apply_progress(
            personality::normalize(session.personality_input()),
            session.selected_courses().clone(),
        );
        self.save();

        let user = &self.users[index];
        info!(
            username = %user.username,
            personality_type = %user.personality_type,
            courses = user.selected_courses.len(),
            "Progress saved"
        );
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::MemoryStorage;
    use crate::utils::time::FixedClock;
    use crate::validation::password::PasswordRule;
    use std::rc::Rc;

    const DEPT: &str = "Information Management";

    /// Shares one MemoryStorage between the store and the test body
    struct SharedStorage(Rc<MemoryStorage>);

    impl KeyValueStorage for SharedStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.set_item(key, value)
        }
    }

    struct FailingStorage;

    impl KeyValueStorage for FailingStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk gone".to_string()))
        }
    }

    fn store_at(storage: &Rc<MemoryStorage>, year: i32) -> AccountStore {
        AccountStore::new(
            Box::new(SharedStorage(Rc::clone(storage))),
            Box::new(FixedClock::new(year, 1_735_689_600_000)),
        )
    }

    fn loaded_store(year: i32) -> (Rc<MemoryStorage>, AccountStore) {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = store_at(&storage, year);
        store.load();
        (storage, store)
    }

    fn persisted(storage: &MemoryStorage) -> Vec<User> {
        load_users(storage, DEFAULT_USERS_KEY)
    }

    #[test]
    fn test_register_then_login_same_id() {
        let (_storage, mut store) = loaded_store(2025);

        let registered = store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();
        store.logout();
        let outcome = store.login("alice", "Passw0rd").unwrap();

        assert_eq!(outcome.user.id, registered.id);
        assert!(!outcome.promoted);
    }

    #[test]
    fn test_register_opens_session() {
        let (_storage, mut store) = loaded_store(2025);

        let user = store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();

        assert_eq!(store.session().unwrap().username(), "alice");
        assert_eq!(store.current_user(), Some(&user));
        assert!(user.personality_type.is_empty());
        assert!(user.selected_courses.is_empty());
        assert_eq!(user.department, DEPT);
    }

    #[test]
    fn test_register_missing_fields() {
        let (_storage, mut store) = loaded_store(2025);

        assert_eq!(
            store.register("  ", "Passw0rd", "Alice", 1, DEPT),
            Err(AccountError::MissingField)
        );
        assert_eq!(
            store.register("alice", "   ", "Alice", 1, DEPT),
            Err(AccountError::MissingField)
        );
        assert_eq!(
            store.register("alice", "Passw0rd", "", 1, DEPT),
            Err(AccountError::MissingField)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_register_weak_password() {
        let (_storage, mut store) = loaded_store(2025);

        assert_eq!(
            store.register("alice", "pass", "Alice", 1, DEPT),
            Err(AccountError::InvalidPassword(PasswordRule::TooShort))
        );
        assert_eq!(
            store.register("alice", "password1", "Alice", 1, DEPT),
            Err(AccountError::InvalidPassword(PasswordRule::MissingUppercase))
        );
    }

    #[test]
    fn test_register_duplicate_username() {
        let (_storage, mut store) = loaded_store(2025);

        store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();
        let second = store.register(" alice ", "Different1", "Other", 2, DEPT);

        assert_eq!(second, Err(AccountError::DuplicateUsername));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let (_storage, mut store) = loaded_store(2025);

        store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();
        assert!(store.register("Alice", "Passw0rd", "Alice B", 1, DEPT).is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_register_invalid_year() {
        let (_storage, mut store) = loaded_store(2025);

        assert_eq!(
            store.register("alice", "Passw0rd", "Alice", 5, DEPT),
            Err(AccountError::InvalidYear(5))
        );
    }

    #[test]
    fn test_register_stores_trimmed_username() {
        let (_storage, mut store) = loaded_store(2025);

        let user = store.register("  alice ", "Passw0rd", " Alice A ", 1, DEPT).unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.fullname, "Alice A");
        assert!(store.login("alice", "Passw0rd").is_ok());
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let (_storage, mut store) = loaded_store(2025);

        let a = store.register("alice", "Passw0rd", "Alice", 1, DEPT).unwrap();
        let b = store.register("bob", "Passw0rd", "Bob", 1, DEPT).unwrap();

        assert_ne!(a.id, b.id);
        assert!(b.id.parse::<i64>().unwrap() > a.id.parse::<i64>().unwrap());
    }

    #[test]
    fn test_login_scenario() {
        let (_storage, mut store) = loaded_store(2025);

        store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();
        store.logout();

        assert_eq!(store.login("alice", "wrong"), Err(AccountError::InvalidCredentials));
        assert!(store.session().is_none());

        let outcome = store.login("alice", "Passw0rd").unwrap();
        assert_eq!(outcome.user.username, "alice");
        assert!(store.session().is_some());
    }

    #[test]
    fn test_login_unknown_user_same_error_as_wrong_password() {
        let (_storage, mut store) = loaded_store(2025);
        store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();

        assert_eq!(store.login("nobody", "Passw0rd"), Err(AccountError::InvalidCredentials));
        assert_eq!(store.login("alice", "passw0rd"), Err(AccountError::InvalidCredentials));
    }

    #[test]
    fn test_login_missing_fields() {
        let (_storage, mut store) = loaded_store(2025);

        assert_eq!(store.login(" ", "Passw0rd"), Err(AccountError::MissingField));
        assert_eq!(store.login("alice", ""), Err(AccountError::MissingField));
    }

    #[test]
    fn test_login_password_not_trimmed() {
        let (_storage, mut store) = loaded_store(2025);
        store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();

        assert_eq!(store.login("alice", " Passw0rd"), Err(AccountError::InvalidCredentials));
        assert!(store.login(" alice ", "Passw0rd").is_ok());
    }

    #[test]
    fn test_auto_advancement_once_per_login() {
        let storage = Rc::new(MemoryStorage::new());
        {
            let mut store = store_at(&storage, 2025);
            store.load();
            store.register("alice", "Passw0rd", "Alice A", 2, DEPT).unwrap();
            store.session_mut().unwrap().set_personality_input("INTJ");
            store.session_mut().unwrap().toggle_course("Programming");
            store.save_progress().unwrap();
        }

        // Five program years have elapsed, far more than the user's year
        let mut store = store_at(&storage, 2029);
        store.load();

        let outcome = store.login("alice", "Passw0rd").unwrap();
        assert!(outcome.promoted);
        assert_eq!(outcome.user.year.get(), 3);
        assert!(outcome.user.personality_type.is_empty());
        assert!(outcome.user.selected_courses.is_empty());
        assert!(store.session().unwrap().selected_courses().is_empty());

        // Promotion is persisted immediately
        assert_eq!(persisted(&storage)[0].year.get(), 3);

        store.logout();
        let outcome = store.login("alice", "Passw0rd").unwrap();
        assert!(outcome.promoted);
        assert_eq!(outcome.user.year.get(), 4);

        store.logout();
        let outcome = store.login("alice", "Passw0rd").unwrap();
        assert!(!outcome.promoted);
        assert_eq!(outcome.user.year.get(), 4);
    }

    #[test]
    fn test_no_advancement_when_not_due() {
        // 2026 is program year 2; a year-2 user stays put
        let (_storage, mut store) = loaded_store(2026);
        store.register("alice", "Passw0rd", "Alice A", 2, DEPT).unwrap();
        store.logout();

        let outcome = store.login("alice", "Passw0rd").unwrap();
        assert!(!outcome.promoted);
        assert_eq!(outcome.user.year.get(), 2);
    }

    #[test]
    fn test_no_advancement_at_registration() {
        let (_storage, mut store) = loaded_store(2030);
        let user = store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();
        assert_eq!(user.year.get(), 1);
    }

    #[test]
    fn test_final_year_never_promoted() {
        let (_storage, mut store) = loaded_store(2040);
        store.register("alice", "Passw0rd", "Alice A", 4, DEPT).unwrap();
        store.session_mut().unwrap().set_personality_input("ENFP");
        store.save_progress().unwrap();
        store.logout();

        let outcome = store.login("alice", "Passw0rd").unwrap();
        assert!(!outcome.promoted);
        assert_eq!(outcome.user.year.get(), 4);
        assert_eq!(outcome.user.personality_type, "ENFP");
    }

    #[test]
    fn test_save_progress_uppercases_personality() {
        let (storage, mut store) = loaded_store(2025);
        store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();

        store.session_mut().unwrap().set_personality_input("intj");
        let saved = store.save_progress().unwrap();

        assert_eq!(saved.personality_type, "INTJ");
        assert_eq!(persisted(&storage)[0].personality_type, "INTJ");
    }

    #[test]
    fn test_save_progress_commits_courses() {
        let (storage, mut store) = loaded_store(2025);
        store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();

        let session = store.session_mut().unwrap();
        session.toggle_course("Programming");
        session.toggle_course("Databases");

        // Not committed yet
        assert!(store.current_user().unwrap().selected_courses.is_empty());

        store.save_progress().unwrap();
        let stored = &persisted(&storage)[0];
        assert_eq!(stored.selected_courses.len(), 2);
        assert!(stored.selected_courses.contains("Databases"));
    }

    #[test]
    fn test_save_progress_idempotent() {
        let (storage, mut store) = loaded_store(2025);
        store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();
        store.register("bob", "Passw0rd", "Bob B", 3, DEPT).unwrap();
        store.session_mut().unwrap().set_personality_input("entp");
        store.session_mut().unwrap().toggle_course("Algorithms");

        store.save_progress().unwrap();
        let first = storage.get_item(DEFAULT_USERS_KEY).unwrap();
        store.save_progress().unwrap();
        let second = storage.get_item(DEFAULT_USERS_KEY).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_save_progress_without_session() {
        let (_storage, mut store) = loaded_store(2025);
        assert_eq!(store.save_progress().err(), Some(AccountError::NoActiveSession));
    }

    #[test]
    fn test_logout_discards_uncommitted_edits() {
        let (_storage, mut store) = loaded_store(2025);
        store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();
        store.session_mut().unwrap().set_personality_input("INFP");
        store.session_mut().unwrap().toggle_course("Programming");
        store.logout();

        assert!(store.session().is_none());
        assert!(store.current_user().is_none());

        store.login("alice", "Passw0rd").unwrap();
        let session = store.session().unwrap();
        assert_eq!(session.personality_input(), "");
        assert!(session.selected_courses().is_empty());
    }

    #[test]
    fn test_round_trip_through_storage() {
        let storage = Rc::new(MemoryStorage::new());
        let users = {
            let mut store = store_at(&storage, 2025);
            store.load();
            store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();
            store.session_mut().unwrap().set_personality_input("isfj");
            store.session_mut().unwrap().toggle_course("Programming");
            store.save_progress().unwrap();
            store.register("bob", "Secr3tPass", "Bob B", 3, DEPT).unwrap();
            store.users().to_vec()
        };

        let mut reopened = store_at(&storage, 2025);
        assert_eq!(reopened.load(), users.as_slice());
    }

    #[test]
    fn test_load_corrupt_payload_yields_empty() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(DEFAULT_USERS_KEY, "{not json").unwrap();

        let mut store = store_at(&storage, 2025);
        assert!(store.load().is_empty());
        assert!(store.is_loaded());
    }

    #[test]
    fn test_invalid_record_skipped_and_rest_kept() {
        let storage = Rc::new(MemoryStorage::new());
        let payload = r#"[
            {"id":"1","username":"bob","password":"Passw0rd","fullname":"Bob B","department":"IM","year":2},
            {"id":"2","username":"eve","password":"Passw0rd","fullname":"Eve E","department":"IM","year":5}
        ]"#;
        storage.set_item(DEFAULT_USERS_KEY, payload).unwrap();

        let mut store = store_at(&storage, 2025);
        let loaded = store.load().to_vec();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].username, "bob");

        store.register("carol", "Passw0rd", "Carol C", 1, DEPT).unwrap();

        let names: Vec<String> = persisted(&storage).into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["bob".to_string(), "carol".to_string()]);
    }

    #[test]
    fn test_non_array_payload_yields_empty() {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(DEFAULT_USERS_KEY, r#"{"users":[]}"#).unwrap();

        let mut store = store_at(&storage, 2025);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_storage_failure_yields_empty() {
        let mut store = AccountStore::new(
            Box::new(FailingStorage),
            Box::new(FixedClock::new(2025, 0)),
        );
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store = AccountStore::new(
            Box::new(FailingStorage),
            Box::new(FixedClock::new(2025, 0)),
        );
        store.load();

        let user = store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();
        store.session_mut().unwrap().set_personality_input("intp");
        store.save_progress().unwrap();

        assert_eq!(store.find("alice").unwrap().id, user.id);
        assert_eq!(store.find("alice").unwrap().personality_type, "INTP");
    }

    #[test]
    fn test_writes_suppressed_before_load() {
        let storage = Rc::new(MemoryStorage::new());
        let mut seeded = store_at(&storage, 2025);
        seeded.load();
        seeded.register("carol", "Passw0rd", "Carol C", 1, DEPT).unwrap();
        let before = storage.get_item(DEFAULT_USERS_KEY).unwrap();

        let mut store = store_at(&storage, 2025);
        store.register("dave", "Passw0rd", "Dave D", 1, DEPT).unwrap();

        assert_eq!(storage.get_item(DEFAULT_USERS_KEY).unwrap(), before);
    }

    #[test]
    fn test_custom_users_key() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = store_at(&storage, 2025).with_users_key("danh_sach_nguoi_dung");
        store.load();
        store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();

        assert!(storage.get_item(DEFAULT_USERS_KEY).unwrap().is_none());
        assert_eq!(load_users(storage.as_ref(), "danh_sach_nguoi_dung").len(), 1);
    }

    #[test]
    fn test_program_start_year_is_configurable() {
        let (_storage, store) = loaded_store(2027);
        let mut store = store.with_program_start_year(2027);
        store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap();
        store.logout();

        assert!(!store.login("alice", "Passw0rd").unwrap().promoted);
    }

    #[test]
    fn test_load_continues_ids_after_existing_records() {
        let storage = Rc::new(MemoryStorage::new());
        let first = {
            let mut store = store_at(&storage, 2025);
            store.load();
            store.register("alice", "Passw0rd", "Alice A", 1, DEPT).unwrap()
        };

        // Same frozen clock: the new id must still be greater
        let mut store = store_at(&storage, 2025);
        store.load();
        let second = store.register("bob", "Passw0rd", "Bob B", 1, DEPT).unwrap();

        assert!(second.id.parse::<i64>().unwrap() > first.id.parse::<i64>().unwrap());
    }
}
