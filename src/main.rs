//! # Islamic Data API - نقطه ورود برنامه
//!
//! ترتیب استارت:
//! 1. `.env` و تنظیمات
//! 2. لاگینگ
//! 3. ساخت catalog (و در صورت `EAGER_LOAD` لود دیتاست)
//! 4. ساخت router و اجرای سرور

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use islamic_api::{
    api::create_router,
    config::{Config, Environment},
    error::{AppError, Result},
    store::Catalog,
};

#[tokio::main]
async fn main() -> Result<()> {
    // اگه فایل .env نباشه اوکیه
    dotenvy::dotenv().ok();

    // تنظیمات قبل از لاگینگ خونده میشه چون فرمت لاگ به محیط بستگی داره
    let config = Config::from_env()?;
    init_tracing(config.environment);

    info!("🚀 Starting Islamic Data API...");

    config.validate()?;
    info!(environment = ?config.environment, "✅ Configuration loaded successfully");

    let catalog = Catalog::from_config(&config);
    info!(source = %catalog.source_description(), "📚 Dataset source selected");

    // لود در استارت؛ اگه fail بشه سرور بالا میاد و همون خطای cache شده
    // رو با 500 به همه‌ی درخواست‌ها میده
    if config.eager_load {
        match catalog.ensure_loaded() {
            Ok(()) => info!("✅ Dataset loaded at startup"),
            Err(e) => error!(error = %e, "❌ Dataset unavailable; API will answer with 500"),
        }
    }

    let addr = config.server_addr();
    let app = create_router(catalog, config);

    info!("🌐 Server listening on http://{}", addr);
    let listener = TcpListener::bind(addr.as_str()).await?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

/// راه‌اندازی سیستم tracing برای لاگینگ
///
/// - `RUST_LOG` سطح لاگ رو مشخص میکنه
/// - در production خروجی JSON، در بقیه محیط‌ها خروجی خوانا
fn init_tracing(environment: Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("islamic_api=debug,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if environment.is_production() {
        registry
            .with(fmt::layer().json().with_target(true).with_current_span(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_level(true)
                    .pretty(),
            )
            .init();
    }
}
