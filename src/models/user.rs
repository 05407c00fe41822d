use crate::core::error::AccountError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const MIN_YEAR: u8 = 1;
pub const MAX_YEAR: u8 = 4;

/// Academic standing, always within 1..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Year(u8);

impl Year {
    pub const FIRST: Year = Year(MIN_YEAR);
    pub const LAST: Year = Year(MAX_YEAR);

    pub fn new(value: u8) -> Result<Self, AccountError> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value))
        } else {
            Err(AccountError::InvalidYear(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_last(self) -> bool {
        self.0 >= MAX_YEAR
    }

    /// The following year, or `None` at the last year
    pub fn next(self) -> Option<Year> {
        if self.is_last() {
            None
        } else {
            Some(Year(self.0 + 1))
        }
    }
}

impl TryFrom<u8> for Year {
    type Error = AccountError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Year::new(value)
    }
}

impl From<Year> for u8 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered account and its saved wizard progress.
///
/// This is the persisted record shape; field names on the wire are
/// camelCase. `dept` and `mbti` are accepted on read for older payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub fullname: String,
    #[serde(alias = "dept")]
    pub department: String,
    pub year: Year,
    #[serde(default, alias = "mbti")]
    pub personality_type: String,
    #[serde(default)]
    pub selected_courses: BTreeSet<String>,
}

impl User {
    pub fn new(
        id: String,
        username: String,
        password: String,
        fullname: String,
        department: String,
        year: Year,
    ) -> Self {
        Self {
            id,
            username,
            password,
            fullname,
            department,
            year,
            personality_type: String::new(),
            selected_courses: BTreeSet::new(),
        }
    }

    pub fn has_personality_type(&self) -> bool {
        !self.personality_type.is_empty()
    }

    /// Move up one year and clear the per-year progress.
    ///
    /// Returns `false` (and changes nothing) for a final-year user.
    pub fn promote(&mut self) -> bool {
        match self.year.next() {
            Some(next) => {
                self.year = next;
                self.personality_type.clear();
                self.selected_courses.clear();
                true
            }
            None => false,
        }
    }

    /// Overwrite the saved progress fields
    pub fn apply_progress(&mut self, personality_type: String, selected_courses: BTreeSet<String>) {
        self.personality_type = personality_type;
        self.selected_courses = selected_courses;
    }
}
