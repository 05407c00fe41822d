use crate::core::error::{AccountError, WizardError};
use crate::validation::password::PasswordRule;
use serde::Deserialize;
use std::fmt;

/// Display language of the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::Vietnamese => "vi",
            Locale::TraditionalChinese => "zh-TW",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Vietnamese => &VI,
            Locale::TraditionalChinese => &ZH_TW,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every user-visible string of the front-end and the report.
///
/// Store and wizard logic never read these; they only return typed
/// errors, which presentation turns into text with [`Strings::account_error`]
/// and [`Strings::wizard_error`].
#[derive(Debug)]
pub struct Strings {
    pub brand: &'static str,
    pub login: &'static str,
    pub register: &'static str,
    pub logout: &'static str,
    pub password_hint: &'static str,

    pub password_too_short: &'static str,
    pub password_too_long: &'static str,
    pub password_missing_digit: &'static str,
    pub password_missing_lowercase: &'static str,
    pub password_missing_uppercase: &'static str,

    pub missing_register_fields: &'static str,
    pub missing_login_fields: &'static str,
    pub duplicate_username: &'static str,
    pub invalid_credentials: &'static str,
    pub invalid_year: &'static str,
    pub no_session: &'static str,
    pub personality_required: &'static str,
    pub unknown_personality: &'static str,
    pub no_previous_step: &'static str,
    pub no_next_step: &'static str,
    pub results_unavailable: &'static str,

    pub register_success: &'static str,
    pub progress_saved: &'static str,
    /// Followed by the new year
    pub promoted: &'static str,
    pub promoted_retake: &'static str,

    pub welcome: &'static str,
    pub step_basic_info: &'static str,
    pub step_personality: &'static str,
    pub step_courses: &'static str,
    pub step_summary: &'static str,

    pub label_fullname: &'static str,
    pub label_year: &'static str,
    pub label_department: &'static str,
    pub label_personality: &'static str,
    pub label_selected_courses: &'static str,
    pub label_recommended_courses: &'static str,
    pub personality_not_taken: &'static str,
    pub none_selected: &'static str,
    pub no_recommendations: &'static str,
    pub quick_select: &'static str,
    pub personality_test_instructions: &'static str,
    pub cannot_open_link: &'static str,

    pub report_title: &'static str,
    pub report_generated_at: &'static str,
    pub report_basic_info: &'static str,
    pub report_no_courses: &'static str,
    pub report_no_recommendations: &'static str,
    pub report_footer: &'static str,
    pub report_exported: &'static str,
    /// Rendered around the year number, e.g. "Năm 2" / "2 年級"
    pub year_prefix: &'static str,
    pub year_suffix: &'static str,
}

impl Strings {
    pub fn password_rule(&self, rule: PasswordRule) -> &'static str {
        match rule {
            PasswordRule::TooShort => self.password_too_short,
            PasswordRule::TooLong => self.password_too_long,
            PasswordRule::MissingDigit => self.password_missing_digit,
            PasswordRule::MissingLowercase => self.password_missing_lowercase,
            PasswordRule::MissingUppercase => self.password_missing_uppercase,
        }
    }

    pub fn account_error(&self, error: &AccountError) -> &'static str {
        match error {
            AccountError::MissingField => self.missing_register_fields,
            AccountError::InvalidPassword(rule) => self.password_rule(*rule),
            AccountError::DuplicateUsername => self.duplicate_username,
            AccountError::InvalidCredentials => self.invalid_credentials,
            AccountError::InvalidYear(_) => self.invalid_year,
            AccountError::NoActiveSession => self.no_session,
        }
    }

    pub fn wizard_error(&self, error: &WizardError) -> &'static str {
        match error {
            WizardError::PersonalityRequired => self.personality_required,
            WizardError::UnknownPersonalityType(_) => self.unknown_personality,
            WizardError::NoPreviousStep => self.no_previous_step,
            WizardError::NoNextStep => self.no_next_step,
            WizardError::ResultsUnavailable => self.results_unavailable,
            WizardError::NotAuthenticated => self.no_session,
            WizardError::Account(e) => self.account_error(e),
        }
    }

    pub fn year(&self, year: u8) -> String {
        format!("{}{}{}", self.year_prefix, year, self.year_suffix)
    }
}

pub static VI: Strings = Strings {
    brand: "Kiểm tra Sức khỏe Hồ sơ AI",
    login: "Đăng nhập",
    register: "Đăng ký",
    logout: "Đăng xuất",
    password_hint: "Yêu cầu mật khẩu: 8-16 ký tự, bao gồm số, chữ hoa/thường",

    password_too_short: "Mật khẩu cần ít nhất 8 ký tự",
    password_too_long: "Mật khẩu tối đa 16 ký tự",
    password_missing_digit: "Mật khẩu phải chứa ít nhất một chữ số",
    password_missing_lowercase: "Mật khẩu phải chứa ít nhất một chữ cái thường",
    password_missing_uppercase: "Mật khẩu phải chứa ít nhất một chữ cái HOA",

    missing_register_fields: "Vui lòng nhập đầy đủ thông tin",
    missing_login_fields: "Vui lòng nhập tài khoản và mật khẩu",
    duplicate_username: "Tài khoản đã tồn tại",
    invalid_credentials: "Tài khoản hoặc mật khẩu không đúng",
    invalid_year: "Năm học phải từ 1 đến 4",
    no_session: "Không tìm thấy dữ liệu người dùng",
    personality_required: "Vui lòng nhập kết quả MBTI",
    unknown_personality: "Loại MBTI không hợp lệ",
    no_previous_step: "Đây là bước đầu tiên",
    no_next_step: "Đây là bước cuối cùng",
    results_unavailable: "Chỉ có thể xem kết quả từ bước kiểm tra tính cách",

    register_success: "Đăng ký hoàn tất! Đã tự động đăng nhập.",
    progress_saved: "Tiến trình đã được lưu",
    promoted: "Hệ thống đã tự động nâng lên lớp",
    promoted_retake: "vui lòng làm lại bài kiểm tra MBTI",

    welcome: "Chào mừng",
    step_basic_info: "Thông tin",
    step_personality: "Kiểm tra Tính cách (MBTI)",
    step_courses: "Chọn Khóa học",
    step_summary: "Kết quả Phân tích",

    label_fullname: "Họ tên",
    label_year: "Năm học",
    label_department: "Ngành",
    label_personality: "Tính cách MBTI",
    label_selected_courses: "Các Khóa học Đã Chọn",
    label_recommended_courses: "Khóa học Đề xuất theo MBTI",
    personality_not_taken: "Chưa hoàn thành kiểm tra",
    none_selected: "Không có",
    no_recommendations: "Không có đề xuất (Vui lòng hoàn thành MBTI)",
    quick_select: "Chọn loại MBTI",
    personality_test_instructions: "Vui lòng hoàn thành bài kiểm tra và nhập kết quả 4 chữ cái MBTI. Ví dụ: INFP, ENTJ, ISFJ",
    cannot_open_link: "Không thể mở trang web kiểm tra",

    report_title: "Kiểm tra Sức khỏe Hồ sơ AI - Báo cáo Kế hoạch Học tập",
    report_generated_at: "Thời gian tạo",
    report_basic_info: "Thông tin Cơ bản",
    report_no_courses: "Chưa chọn bất kỳ khóa học nào",
    report_no_recommendations: "Chưa có khóa học đề xuất",
    report_footer: "Báo cáo này được tạo bởi Hệ thống Kiểm tra Sức khỏe Hồ sơ AI",
    report_exported: "Đã xuất báo cáo",
    year_prefix: "Năm ",
    year_suffix: "",
};

pub static ZH_TW: Strings = Strings {
    brand: "AI 個人檔案健康檢查",
    login: "登入",
    register: "註冊",
    logout: "登出",
    password_hint: "密碼要求: 8-16字元，包含數字、大小寫字母",

    password_too_short: "密碼需要至少 8 個字元",
    password_too_long: "密碼最多 16 個字元",
    password_missing_digit: "密碼必須包含至少一個數字",
    password_missing_lowercase: "密碼必須包含至少一個小寫字母",
    password_missing_uppercase: "密碼必須包含至少一個大寫字母",

    missing_register_fields: "請輸入所有必填資訊",
    missing_login_fields: "請輸入帳號和密碼",
    duplicate_username: "帳號已存在",
    invalid_credentials: "帳號或密碼不正確",
    invalid_year: "年級必須介於 1 到 4",
    no_session: "找不到使用者資料",
    personality_required: "請輸入 MBTI 測驗結果",
    unknown_personality: "無效的 MBTI 類型",
    no_previous_step: "已是第一步",
    no_next_step: "已是最後一步",
    results_unavailable: "只能在性格測驗步驟查看結果",

    register_success: "註冊完成！已自動登入。",
    progress_saved: "進度已儲存",
    promoted: "系統已自動升上年級",
    promoted_retake: "請重新進行 MBTI 測驗",

    welcome: "歡迎",
    step_basic_info: "基本資訊",
    step_personality: "性格測驗 (MBTI)",
    step_courses: "選擇課程",
    step_summary: "分析結果",

    label_fullname: "姓名",
    label_year: "年級",
    label_department: "系所",
    label_personality: "MBTI 性格",
    label_selected_courses: "已選擇課程",
    label_recommended_courses: "MBTI 建議課程",
    personality_not_taken: "尚未完成測驗",
    none_selected: "無",
    no_recommendations: "無建議 (請完成 MBTI 測驗)",
    quick_select: "選擇 MBTI 類型",
    personality_test_instructions: "請完成測驗並輸入 4 個字母的 MBTI 結果。範例: INFP, ENTJ, ISFJ",
    cannot_open_link: "無法開啟 MBTI 測驗網頁",

    report_title: "AI 個人檔案健康檢查 - 學習計畫報告",
    report_generated_at: "建立時間",
    report_basic_info: "基本資訊",
    report_no_courses: "尚未選擇任何課程",
    report_no_recommendations: "尚未有課程建議 (請完成 MBTI 測驗)",
    report_footer: "此報告由 AI 個人檔案健康檢查系統建立",
    report_exported: "報告已匯出",
    year_prefix: "",
    year_suffix: " 年級",
};
