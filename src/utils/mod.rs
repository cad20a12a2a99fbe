//! # ماژول توابع کمکی (Utilities)
//!
//! ## مفاهیم Rust:
//! - **once_cell::sync::Lazy**: مقداردهی اولیه تنبل برای Regex

use once_cell::sync::Lazy;
use regex::Regex;

// =====================================
// Lazy Statics (Regex patterns)
// =====================================
/// الگوی slug معتبر: حروف کوچک و عدد، با خط تیره بین بخش‌ها
///
/// مثال‌های معتبر: `mecca`, `new-york`, `kuala-lumpur-2`
pub static VALID_SLUG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("Invalid regex pattern")
});

/// آیا رشته یک slug معتبر هست؟
///
/// # مثال
/// ```rust
/// use islamic_api::utils::is_valid_slug;
///
/// assert!(is_valid_slug("new-york"));
/// assert!(!is_valid_slug("New York"));
/// ```
#[must_use]
pub fn is_valid_slug(value: &str) -> bool {
    VALID_SLUG.is_match(value)
}
