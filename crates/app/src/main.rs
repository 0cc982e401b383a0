use std::path::PathBuf;
use std::sync::Arc;

use geumgo_api::server::{AppState, start_server};
use geumgo_core::common::time::RealTimeProvider;
use geumgo_core::config::AppConfig;
use geumgo_feed::rest::RestQuoteProvider;
use geumgo_market::snapshot::CachedSnapshotService;
use geumgo_store::holdings::SqliteHoldingsStore;
use geumgo_synth::candle::CandleSynthesizer;
use geumgo_synth::history::HistorySynthesizer;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// # Summary
/// 加载应用配置：默认值 ← 可选的 config.toml ← GEUMGO_* 环境变量，
/// 右侧覆盖左侧。
///
/// # Returns
/// 合并后的配置，任何一层解析失败即报错。
fn load_config() -> Result<AppConfig, config::ConfigError> {
    config::Config::builder()
        .add_source(config::Config::try_from(&AppConfig::default())?)
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("GEUMGO").separator("__"))
        .build()?
        .try_deserialize()
}

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化所有具体实现组件并通过 Arc<dyn Trait> 注入到 API 层。
///
/// # Logic
/// 1. 初始化全局日志。
/// 2. 加载配置并注入存储根目录。
/// 3. 实例化基础设施层（Feed、Store）。
/// 4. 实例化领域服务层（快照服务、两个合成器）。
/// 5. 启动 HTTP 服务，等待外部信号退出。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 初始化日志 (RUST_LOG 可覆盖，默认 info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!("Geumgo backend starting...");

    // 2. 加载配置
    let app_config = load_config()?;
    geumgo_store::config::set_root_dir(PathBuf::from(&app_config.database.data_dir));

    // 3. 实例化基础设施层
    let clock = Arc::new(RealTimeProvider);
    let provider = Arc::new(RestQuoteProvider::new());
    let holdings = Arc::new(SqliteHoldingsStore::new().await?);

    // 4. 实例化领域服务层
    let snapshot = Arc::new(CachedSnapshotService::new(
        provider,
        clock.clone(),
        app_config.market.snapshot_ttl_secs,
    ));

    let state = AppState {
        snapshot,
        holdings,
        candle_synth: Arc::new(CandleSynthesizer::new(clock.clone())),
        history_synth: Arc::new(HistorySynthesizer::new(clock)),
    };

    // 5. 启动 HTTP 服务，直到收到外部退出信号
    let bind_addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    tokio::select! {
        result = start_server(state, &bind_addr) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received. Exiting...");
        }
    }

    Ok(())
}
