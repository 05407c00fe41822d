use crate::models::user::User;
use crate::stores::catalog::Catalog;
use serde::Serialize;

/// Read-only snapshot handed to a report renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub fullname: String,
    pub year: u8,
    pub department: String,
    /// Empty when the test has not been taken
    pub personality_type: String,
    pub selected_courses: Vec<String>,
    pub recommended_courses: Vec<String>,
}

impl Report {
    /// Build from a committed user record and the catalog's recommendation table
    pub fn from_user(user: &User, catalog: &Catalog) -> Self {
        Self {
            fullname: user.fullname.clone(),
            year: user.year.get(),
            department: user.department.clone(),
            personality_type: user.personality_type.clone(),
            selected_courses: user.selected_courses.iter().cloned().collect(),
            recommended_courses: catalog
                .recommendations_for(&user.personality_type)
                .to_vec(),
        }
    }
}
