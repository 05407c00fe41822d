use crate::locale::strings::Locale;
use crate::models::personality;
use std::collections::HashMap;
use tracing::debug;

/// Static course data: which electives a department offers and which
/// courses are recommended for each personality type.
#[derive(Debug, Clone)]
pub struct Catalog {
    department: String,
    courses_by_department: HashMap<String, Vec<String>>,
    courses_by_personality: HashMap<String, Vec<String>>,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Catalog {
    pub fn new(department: impl Into<String>, courses: Vec<String>) -> Self {
        let department = department.into();
        let mut courses_by_department = HashMap::new();
        courses_by_department.insert(department.clone(), courses);

        Self {
            department,
            courses_by_department,
            courses_by_personality: HashMap::new(),
        }
    }

    /// Built-in catalog for a locale
    pub fn builtin(locale: Locale) -> Self {
        match locale {
            Locale::Vietnamese => Self::new(
                "Quản lý Thông tin",
                owned(&["Lập trình", "Cơ sở dữ liệu", "Phân tích hệ thống", "Quản lý dự án"]),
            )
            .with_recommendation("INTJ", owned(&["Cơ sở dữ liệu", "Phân tích hệ thống"]))
            .with_recommendation("INFJ", owned(&["Quản lý dự án", "Quản trị học"]))
            .with_recommendation("INFP", owned(&["Marketing", "Quản lý tài chính"]))
            .with_recommendation("ENTP", owned(&["Lập trình", "Giải thuật"]))
            .with_recommendation("ENFP", owned(&["Marketing", "Kỹ thuật phần mềm"]))
            .with_recommendation("ISTJ", owned(&["Hệ điều hành", "Quản lý Logistics"]))
            .with_recommendation("ISFJ", owned(&["Kinh doanh Cảng", "Chuỗi cung ứng"]))
            .with_recommendation("ESTJ", owned(&["Quản lý tài chính", "Quản lý dự án"])),

            Locale::TraditionalChinese => Self::new(
                "資訊管理",
                owned(&["程式設計", "資料庫", "系統分析", "專案管理"]),
            )
            .with_recommendation("INTJ", owned(&["資料庫", "系統分析"]))
            .with_recommendation("INFJ", owned(&["專案管理", "管理學"]))
            .with_recommendation("INFP", owned(&["行銷學", "財務管理"]))
            .with_recommendation("ENTP", owned(&["程式設計", "演算法"]))
            .with_recommendation("ENFP", owned(&["行銷學", "軟體工程"]))
            .with_recommendation("ISTJ", owned(&["作業系統", "物流管理"]))
            .with_recommendation("ISFJ", owned(&["港口經營", "供應鏈管理"]))
            .with_recommendation("ESTJ", owned(&["財務管理", "專案管理"]))
            .with_recommendation("ESFJ", owned(&["人力資源", "組織行為"])),
        }
    }

    pub fn with_recommendation(mut self, code: &str, courses: Vec<String>) -> Self {
        self.courses_by_personality
            .insert(personality::normalize(code), courses);
        self
    }

    /// Overlay configured recommendations on top of the built-in table.
    ///
    /// Entries replace built-in lists for the same type.
    pub fn with_overrides(mut self, overrides: &HashMap<String, Vec<String>>) -> Self {
        for (code, courses) in overrides {
            debug!(personality_type = %code, courses = courses.len(), "Applying recommendation override");
            self = self.with_recommendation(code, courses.clone());
        }
        self
    }

    /// The department new accounts are registered under
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Ordered elective list for a department; empty if the department is unknown
    pub fn courses_for(&self, department: &str) -> &[String] {
        self.courses_by_department
            .get(department)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Recommended courses for a personality type, matched case-insensitively.
    /// Empty for an empty or unmapped type.
    pub fn recommendations_for(&self, personality_type: &str) -> &[String] {
        self.courses_by_personality
            .get(&personality::normalize(personality_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Canonical types with no recommendation entry
    pub fn missing_recommendations(&self) -> Vec<&'static str> {
        personality::ALL_PERSONALITY_TYPES
            .iter()
            .copied()
            .filter(|code| !self.courses_by_personality.contains_key(*code))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_vietnamese() {
        let catalog = Catalog::builtin(Locale::Vietnamese);
        assert_eq!(catalog.department(), "Quản lý Thông tin");
        assert_eq!(catalog.courses_for(catalog.department()).len(), 4);
        assert_eq!(catalog.courses_for(catalog.department())[0], "Lập trình");
        assert_eq!(
            catalog.recommendations_for("INTJ"),
            &["Cơ sở dữ liệu".to_string(), "Phân tích hệ thống".to_string()]
        );
    }

    #[test]
    fn test_builtin_traditional_chinese_has_esfj() {
        let catalog = Catalog::builtin(Locale::TraditionalChinese);
        assert_eq!(catalog.department(), "資訊管理");
        assert_eq!(catalog.recommendations_for("ESFJ").len(), 2);
        assert!(Catalog::builtin(Locale::Vietnamese)
            .recommendations_for("ESFJ")
            .is_empty());
    }

    #[test]
    fn test_recommendations_case_insensitive() {
        let catalog = Catalog::builtin(Locale::Vietnamese);
        assert_eq!(catalog.recommendations_for("intj"), catalog.recommendations_for("INTJ"));
    }

    #[test]
    fn test_unknown_lookups_are_empty() {
        let catalog = Catalog::builtin(Locale::Vietnamese);
        assert!(catalog.courses_for("Unknown").is_empty());
        assert!(catalog.recommendations_for("").is_empty());
        assert!(catalog.recommendations_for("ISTP").is_empty());
    }

    #[test]
    fn test_missing_recommendations_gap() {
        let catalog = Catalog::builtin(Locale::Vietnamese);
        let missing = catalog.missing_recommendations();
        assert_eq!(missing.len(), 8);
        for code in ["ISTP", "ISFP", "ESTP", "ESFP"] {
            assert!(missing.contains(&code));
        }
    }

    #[test]
    fn test_overrides_fill_gaps_and_replace() {
        let mut overrides = HashMap::new();
        overrides.insert("istp".to_string(), vec!["Embedded Systems".to_string()]);
        overrides.insert("INTJ".to_string(), vec!["Algorithms".to_string()]);

        let catalog = Catalog::builtin(Locale::Vietnamese).with_overrides(&overrides);

        assert_eq!(catalog.recommendations_for("ISTP"), &["Embedded Systems".to_string()]);
        assert_eq!(catalog.recommendations_for("INTJ"), &["Algorithms".to_string()]);
        assert_eq!(catalog.missing_recommendations().len(), 7);
    }
}
