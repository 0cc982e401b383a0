//! # 持仓路由控制器
//!
//! 实现 `/api/v1/holdings` 路径下的 REST 接口。
//! 原型版把持仓存在浏览器 localStorage 里；服务端化后由这里
//! 读写 `HoldingsStore`，并提供按实时快照计算的估值接口。

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{HoldingsBody, HoldingsValuationResponse};

/// 获取当前持仓
///
/// 返回已记录的持有克数与买入均价，从未记录时返回 404。
#[utoipa::path(
    get,
    path = "/api/v1/holdings",
    tag = "持仓 (Holdings)",
    responses(
        (status = 200, description = "成功返回持仓", body = HoldingsBody),
        (status = 404, description = "尚无持仓记录")
    )
)]
pub async fn get_holdings(State(state): State<AppState>) -> Result<Json<HoldingsBody>, ApiError> {
    let holdings = state
        .holdings
        .load()
        .await?
        .ok_or_else(|| ApiError::NotFound("尚无持仓记录".to_string()))?;

    Ok(Json(holdings.into()))
}

/// 保存（覆盖）持仓
///
/// 记录持有克数与买入均价，重复提交即覆盖。
/// 非正的克数或均价返回 400。
#[utoipa::path(
    put,
    path = "/api/v1/holdings",
    tag = "持仓 (Holdings)",
    request_body = HoldingsBody,
    responses(
        (status = 200, description = "保存成功，返回落库后的持仓", body = HoldingsBody),
        (status = 400, description = "持仓字段非法")
    )
)]
pub async fn put_holdings(
    State(state): State<AppState>,
    Json(body): Json<HoldingsBody>,
) -> Result<Json<HoldingsBody>, ApiError> {
    let holdings = body.clone().into();
    state.holdings.save(&holdings).await?;

    Ok(Json(body))
}

/// 清除持仓
///
/// 删除已记录的持仓；记录本就不存在时同样返回 204。
#[utoipa::path(
    delete,
    path = "/api/v1/holdings",
    tag = "持仓 (Holdings)",
    responses(
        (status = 204, description = "清除成功")
    )
)]
pub async fn delete_holdings(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.holdings.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 持仓估值
///
/// 以实时快照的韩元/克金价对当前持仓估值，
/// 返回本金、评估价值与损益。尚无持仓时返回 404。
#[utoipa::path(
    get,
    path = "/api/v1/holdings/valuation",
    tag = "持仓 (Holdings)",
    responses(
        (status = 200, description = "成功返回估值", body = HoldingsValuationResponse),
        (status = 404, description = "尚无持仓记录")
    )
)]
pub async fn get_valuation(
    State(state): State<AppState>,
) -> Result<Json<HoldingsValuationResponse>, ApiError> {
    let holdings = state
        .holdings
        .load()
        .await?
        .ok_or_else(|| ApiError::NotFound("尚无持仓记录".to_string()))?;

    let snapshot = state.snapshot.snapshot().await;
    let valuation = holdings.valuation(snapshot.gold_krw);

    Ok(Json(valuation.into()))
}
