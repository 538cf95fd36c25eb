//! 응답 메시지 로케일
//!
//! 에러 코드와 성공 메시지 키를 `en` / `fa` 메시지로 변환합니다.
//! 알 수 없는 로케일은 `en`으로 처리합니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fa,
}

impl Locale {
    /// `Accept-Language` 헤더 값에서 로케일을 고릅니다.
    ///
    /// `fa-IR,fa;q=0.9,en;q=0.8` 처럼 여러 값이 오면 첫 번째 태그만 봅니다.
    pub fn from_header(value: &str) -> Self {
        let primary = value
            .split(',')
            .next()
            .unwrap_or_default()
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        if primary == "fa" || primary.starts_with("fa-") {
            Locale::Fa
        } else {
            Locale::En
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fa => "fa",
        }
    }

    pub fn error_message(&self, code: &str) -> &'static str {
        match (self, code) {
            (Locale::En, "ACCESS_DENIED") => "Access denied",
            (Locale::En, "INVALID_INPUT") => "The submitted data is not valid",
            (Locale::En, "NOT_FOUND") => "The requested item was not found",
            (Locale::En, "UPDATE_FAILED") => "The item could not be updated",
            (Locale::En, "REMOVAL_BLOCKED") => "The item is still in use and cannot be removed",
            (Locale::En, "REMOVE_FAILED") => "The item could not be removed",
            (Locale::En, _) => "An unexpected error occurred",

            (Locale::Fa, "ACCESS_DENIED") => "دسترسی مجاز نیست",
            (Locale::Fa, "INVALID_INPUT") => "اطلاعات ارسال شده معتبر نیست",
            (Locale::Fa, "NOT_FOUND") => "مورد درخواستی یافت نشد",
            (Locale::Fa, "UPDATE_FAILED") => "به‌روزرسانی انجام نشد",
            (Locale::Fa, "REMOVAL_BLOCKED") => "این مورد در حال استفاده است و حذف نمی‌شود",
            (Locale::Fa, "REMOVE_FAILED") => "حذف انجام نشد",
            (Locale::Fa, _) => "خطای غیرمنتظره رخ داد",
        }
    }
}
