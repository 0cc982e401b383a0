//! # 行情路由控制器
//!
//! 实现 `/api/v1/market/*` 路径下的 REST 接口：
//! 合成 K 线、合成历史、实时快照与市场解读。
//! 非法入参不报错，一律钳制/回退成合法值后继续（原型版前端的既有约定）。

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::ToSchema;

use geumgo_core::common::TimeFrame;
use geumgo_core::market::entity::HistoryPoint;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{
    AnalysisResponse, CandleResponse, HistoryPointResponse, MarketSnapshotResponse,
};

/// 历史区间的默认回溯天数
const DEFAULT_HISTORY_DAYS: i64 = 30;
/// 分析文案的默认期间标签（与默认 30 天区间对应）
const DEFAULT_ANALYSIS_LABEL: &str = "최근 1M";

#[derive(Deserialize, ToSchema)]
pub struct CandlesQuery {
    /// 周期档位 ("1H" / "1D" / "1M")
    pub timeframe: Option<String>,
}

/// 获取合成 K 线序列
///
/// 返回指定周期的韩元/克金价 OHLC 序列（随机游走合成，最旧在前）。
/// `timeframe` 缺失或不可识别时静默回退到 1D。
#[utoipa::path(
    get,
    path = "/api/v1/market/candles",
    tag = "行情 (Market)",
    params(
        ("timeframe" = Option<String>, Query, description = "周期: 1H | 1D | 1M (默认 1D)")
    ),
    responses(
        (status = 200, description = "成功返回 K 线序列", body = Vec<CandleResponse>)
    )
)]
pub async fn get_candles(
    State(state): State<AppState>,
    Query(query): Query<CandlesQuery>,
) -> Json<Vec<CandleResponse>> {
    let timeframe = query
        .timeframe
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or(TimeFrame::Day1);

    let mut rng = rand::rng();
    let candles = state.candle_synth.generate(timeframe, &mut rng);

    Json(candles.into_iter().map(Into::into).collect())
}

#[derive(Deserialize, ToSchema)]
pub struct HistoryQuery {
    /// 回溯天数 (默认 30，钳制到 [1, 365])
    pub days: Option<String>,
}

/// 获取合成历史序列
///
/// 返回最近 N 天（含今天）的金价/汇率/韩元金价三列日线历史。
/// `days` 缺失或不可解析时取 30，越界值钳制到 [1, 365]。
#[utoipa::path(
    get,
    path = "/api/v1/market/history",
    tag = "行情 (Market)",
    params(
        ("days" = Option<String>, Query, description = "回溯天数，默认 30，钳制到 [1, 365]")
    ),
    responses(
        (status = 200, description = "成功返回历史序列", body = Vec<HistoryPointResponse>)
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<HistoryPointResponse>> {
    let days = query
        .days
        .as_deref()
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(DEFAULT_HISTORY_DAYS)
        .clamp(1, 365);
    // 钳制后必然落在 u32 值域内
    let days = u32::try_from(days).unwrap_or(30);

    let mut rng = rand::rng();
    let points = state.history_synth.generate(days, &mut rng);

    Json(points.into_iter().map(Into::into).collect())
}

/// 获取实时市场快照
///
/// 返回带 30 秒缓存的实时金价/汇率快照。行情源故障时
/// 降级到基准兜底常量，本接口永不失败。
#[utoipa::path(
    get,
    path = "/api/v1/market/snapshot",
    tag = "行情 (Market)",
    responses(
        (status = 200, description = "成功返回市场快照", body = MarketSnapshotResponse)
    )
)]
pub async fn get_snapshot(State(state): State<AppState>) -> Json<MarketSnapshotResponse> {
    let snapshot = state.snapshot.snapshot().await;
    Json(snapshot.into())
}

#[derive(Deserialize, ToSchema)]
pub struct AnalysisQuery {
    /// 解读文案开头的期间标签，如 "최근 3M"
    pub label: Option<String>,
}

/// 市场解读
///
/// 对请求体中的历史序列（升序，任意来源）做首尾对比分析，
/// 返回三项百分比变动、韩文解读与 safe/warning/danger 档位。
/// 不足两个点时返回"数据不足"的降级结果，仍是 200。
#[utoipa::path(
    post,
    path = "/api/v1/market/analysis",
    tag = "行情 (Market)",
    params(
        ("label" = Option<String>, Query, description = "期间标签，默认 \"최근 1M\"")
    ),
    request_body = Vec<HistoryPointResponse>,
    responses(
        (status = 200, description = "成功返回分析结果", body = AnalysisResponse),
        (status = 400, description = "历史点的日期格式非法")
    )
)]
pub async fn post_analysis(
    Query(query): Query<AnalysisQuery>,
    Json(body): Json<Vec<HistoryPointResponse>>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let history: Vec<HistoryPoint> = body
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<_, _>>()
        .map_err(ApiError::BadRequest)?;

    let label = query.label.as_deref().unwrap_or(DEFAULT_ANALYSIS_LABEL);
    let result = geumgo_analysis::analyze(&history, label);

    Ok(Json(result.into()))
}
