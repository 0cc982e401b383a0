//! # API 服务启动器
//!
//! 组装 axum 路由、挂载 Swagger UI、配置 CORS 并绑定 TCP 端口对外提供服务。
//! 本模块不直接启动 `main()`, 而是由 `crates/app` 的 DI 容器持有并调用。

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

use geumgo_core::market::port::SnapshotSource;
use geumgo_core::store::port::HoldingsStore;
use geumgo_synth::candle::CandleSynthesizer;
use geumgo_synth::history::HistorySynthesizer;

use crate::routes::{holdings, market};

// ============================================================
//  共享应用状态
// ============================================================

/// 全局应用状态，通过 axum 的 `State` 提取器注入到每个 Handler 中。
///
/// # Invariants
/// - 所有字段在服务启动前由 DI 容器注入，生命周期与进程等同。
#[derive(Clone)]
pub struct AppState {
    /// 实时快照服务（带 time-boxed 缓存与兜底降级）
    pub snapshot: Arc<dyn SnapshotSource>,
    /// 持仓持久化端口
    pub holdings: Arc<dyn HoldingsStore>,
    /// 合成 K 线生成器
    pub candle_synth: Arc<CandleSynthesizer>,
    /// 合成历史生成器
    pub history_synth: Arc<HistorySynthesizer>,
}

// ============================================================
//  OpenAPI 文档定义
// ============================================================

/// 全局 OpenAPI 文档结构
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Geumgo 金价仪表盘 API",
        version = "0.1.0",
        description = "金价仪表盘后端的 RESTful API 网关。提供合成行情序列、实时快照、市场解读与持仓管理功能。",
        contact(name = "Geumgo Team"),
        license(name = "MIT")
    ),
    tags(
        (name = "行情 (Market)", description = "合成 K 线、历史序列、实时快照与市场解读 API"),
        (name = "持仓 (Holdings)", description = "用户持仓的记录、清除与估值 API")
    )
)]
pub struct ApiDoc;

// ============================================================
//  服务构建与启动
// ============================================================

/// # Summary
/// 构建完整的 axum 应用路由树（含 Swagger UI 与 CORS）。
///
/// 单独拆出来是为了让集成测试可以在自管的 listener 上直接 serve。
///
/// # Arguments
/// * `state` - 由外部 DI 容器注入的共享状态
///
/// # Returns
/// 可直接交给 `axum::serve` 的 Router。
pub fn build_router(state: AppState) -> Router {
    // 1. 全部为公开路由（单用户仪表盘，无鉴权面）
    let api_router = OpenApiRouter::new()
        .routes(routes!(market::get_candles))
        .routes(routes!(market::get_history))
        .routes(routes!(market::get_snapshot))
        .routes(routes!(market::post_analysis))
        .routes(routes!(holdings::get_holdings))
        .routes(routes!(holdings::put_holdings))
        .routes(routes!(holdings::delete_holdings))
        .routes(routes!(holdings::get_valuation));

    // 2. 合并路由与自动收集的 OpenAPI Doc
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(api_router)
        .with_state(state)
        .split_for_parts();

    // 3. 配置 CORS (浏览器仪表盘直连，允许所有来源)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 4. 合并 Swagger UI 路由并应用中间件
    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors)
}

/// 构建路由树并启动 HTTP 监听。
///
/// # Arguments
/// * `state` - 由外部 DI 容器注入的共享状态
/// * `bind_addr` - 监听的地址与端口，如 `"0.0.0.0:8080"`
pub async fn start_server(
    state: AppState,
    bind_addr: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);

    tracing::info!("🚀 Geumgo API Server listening on {}", bind_addr);
    tracing::info!("📖 Swagger UI: http://{}/swagger-ui/", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
