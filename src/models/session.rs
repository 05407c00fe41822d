use crate::models::user::User;
use std::collections::BTreeSet;

/// The logged-in user plus uncommitted wizard edits.
///
/// Edits live here until the store's `save_progress` copies them into the
/// persisted record; logging out drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Username of the active record
    username: String,
    /// Working personality type, as typed
    personality_input: String,
    /// Working course selection
    selected_courses: BTreeSet<String>,
}

impl Session {
    /// Open a session seeded from the user's committed progress
    pub fn open(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            personality_input: user.personality_type.clone(),
            selected_courses: user.selected_courses.clone(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn personality_input(&self) -> &str {
        &self.personality_input
    }

    pub fn set_personality_input(&mut self, input: impl Into<String>) {
        self.personality_input = input.into();
    }

    pub fn selected_courses(&self) -> &BTreeSet<String> {
        &self.selected_courses
    }

    pub fn is_selected(&self, course: &str) -> bool {
        self.selected_courses.contains(course)
    }

    /// Add `course` if absent, remove it if present.
    ///
    /// Returns whether the course is selected afterwards. The course is not
    /// checked against any catalog.
    pub fn toggle_course(&mut self, course: &str) -> bool {
        if self.selected_courses.remove(course) {
            false
        } else {
            self.selected_courses.insert(course.to_string());
            true
        }
    }
}
