//! # ماژول تنظیمات (Configuration)
//!
//! این ماژول مسئول خوندن و مدیریت تنظیمات برنامه هست.
//!
//! ## مفاهیم Rust:
//! - **Structs**: ساختار داده‌ای برای نگهداری تنظیمات
//! - **Default Trait**: مقادیر پیش‌فرض
//! - **Option<T>**: تنظیمات اختیاری مثل `DATA_DIR`
//! - **Builder Pattern**: ساخت تدریجی آبجکت
//!
//! ## متغیرهای محیطی
//!
//! | متغیر | پیش‌فرض |
//! |---|---|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `8080` |
//! | `ENVIRONMENT` | `development` |
//! | `DATA_DIR` | (خالی = داده‌های embed شده) |
//! | `EAGER_LOAD` | `true` |
//! | `REQUEST_TIMEOUT_SECS` | `30` |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use crate::error::{AppError, Result};

/// تنظیمات اصلی برنامه
///
/// # مثال
/// ```rust
/// use islamic_api::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.port, 8080);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// آدرس هاست سرور
    pub host: String,

    /// پورت سرور
    pub port: u16,

    /// محیط اجرا (development, production)
    pub environment: Environment,

    /// پوشه‌ای که سندهای JSON ازش خونده میشن
    /// `None` یعنی از نسخه‌ی embed شده در باینری استفاده کن
    pub data_dir: Option<PathBuf>,

    /// لود دیتاست موقع استارت، به جای اولین درخواست
    pub eager_load: bool,

    /// حداکثر زمان پردازش هر درخواست (ثانیه)
    pub request_timeout_secs: u64,
}

/// محیط اجرای برنامه
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// محیط توسعه - لاگ‌های خوانا
    #[default]
    Development,

    /// محیط تست
    Testing,

    /// محیط تولید - لاگ‌های JSON
    Production,
}

impl Environment {
    /// آیا در محیط توسعه هستیم؟
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// آیا در محیط تولید هستیم؟
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// تبدیل String به Environment
impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            data_dir: None,
            eager_load: true,
            request_timeout_secs: 30,
        }
    }
}

/// تبدیل مقدار متغیر محیطی به bool
///
/// مقادیر نامعتبر `None` برمیگردونن تا مقدار پیش‌فرض استفاده بشه
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// ساخت تنظیمات از متغیرهای محیطی
    ///
    /// # مفاهیم:
    /// - `env::var()`: خوندن متغیر محیطی
    /// - `Option::filter`: رشته‌ی خالی مثل "تنظیم نشده" در نظر گرفته میشه
    ///
    /// # Errors
    /// خطا برمیگردونه اگه `PORT` یا `REQUEST_TIMEOUT_SECS` عدد نباشن.
    /// (برخلاف بقیه، اینا رو بی‌صدا با پیش‌فرض عوض نمیکنیم)
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let get_env = |key: &str| -> Option<String> {
            env::var(key).ok().filter(|v| !v.trim().is_empty())
        };

        let port = match get_env("PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT '{}' is invalid: {}", v, e)))?,
            None => defaults.port,
        };

        let request_timeout_secs = match get_env("REQUEST_TIMEOUT_SECS") {
            Some(v) => v.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!("REQUEST_TIMEOUT_SECS '{}' is invalid: {}", v, e))
            })?,
            None => defaults.request_timeout_secs,
        };

        Ok(Self {
            host: get_env("HOST").unwrap_or(defaults.host),
            port,
            environment: get_env("ENVIRONMENT")
                .map(Environment::from)
                .unwrap_or(defaults.environment),
            data_dir: get_env("DATA_DIR").map(PathBuf::from),
            eager_load: get_env("EAGER_LOAD")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.eager_load),
            request_timeout_secs,
        })
    }

    /// اعتبارسنجی تنظیمات
    ///
    /// # Errors
    /// - پورت صفر
    /// - timeout صفر
    /// - `DATA_DIR` که پوشه نیست
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::Config("PORT cannot be 0".to_string()));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "REQUEST_TIMEOUT_SECS cannot be 0".to_string(),
            ));
        }

        if let Some(dir) = &self.data_dir {
            if !dir.is_dir() {
                return Err(AppError::Config(format!(
                    "DATA_DIR '{}' is not a directory",
                    dir.display()
                )));
            }
        }

        Ok(())
    }

    /// آدرس کامل سرور
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// timeout درخواست به صورت `Duration`
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// =====================================
// Builder Pattern
// =====================================
/// ساخت Config با Builder Pattern
///
/// # مثال
/// ```rust
/// use islamic_api::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .port(3000)
///     .host("127.0.0.1")
///     .eager_load(false)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// ساخت builder جدید
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// تنظیم پورت
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// تنظیم هاست
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// تنظیم محیط
    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    /// تنظیم پوشه داده
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = Some(dir.into());
        self
    }

    /// لود در استارت یا در اولین درخواست
    #[must_use]
    pub fn eager_load(mut self, eager: bool) -> Self {
        self.config.eager_load = eager;
        self
    }

    /// تنظیم timeout درخواست
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    /// ساخت Config نهایی
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// ساخت Config با اعتبارسنجی
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اعتبارسنجی fail بشه
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}
