//! # DTO (Data Transfer Object) 层
//!
//! 将内部领域模型转化为面向前端 JSON 输出的轻量结构体。
//! 字段名必须与仪表盘前端既有的 wire 格式逐字一致
//! （`goldUSD` / `usdKRW` / `goldKRW` 等），因此逐字段显式 rename。
//! 所有 DTO 必须派生 `utoipa::ToSchema` 以自动进入 Swagger 文档。

use geumgo_core::market::entity::{
    AnalysisResult, Candle, HistoryPoint, MarketSnapshot, MarketStatus,
};
use geumgo_core::holdings::entity::{Holdings, HoldingsValuation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================
//  行情相关 DTO
// ============================================================

/// K 线数据 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandleResponse {
    /// K 线开始时间 (Unix 秒)
    #[schema(example = 1774526400_i64)]
    pub time: i64,
    /// 开盘价 (KRW/g)
    #[schema(example = 117576.0)]
    pub open: f64,
    /// 最高价 (KRW/g)
    #[schema(example = 117890.0)]
    pub high: f64,
    /// 最低价 (KRW/g)
    #[schema(example = 117320.0)]
    pub low: f64,
    /// 收盘价 (KRW/g)
    #[schema(example = 117654.0)]
    pub close: f64,
}

/// 单日历史观测点 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryPointResponse {
    /// 日历日期 (ISO 8601, 无时间分量)
    #[schema(example = "2026-03-01")]
    pub date: String,
    /// 国际金价 (USD/oz)
    #[serde(rename = "goldUSD")]
    #[schema(example = 2651.23)]
    pub gold_usd: f64,
    /// 美元兑韩元汇率
    #[serde(rename = "usdKRW")]
    #[schema(example = 1381.5)]
    pub usd_krw: f64,
    /// 韩元/克金价
    #[serde(rename = "goldKRW")]
    #[schema(example = 117755.0)]
    pub gold_krw: f64,
}

/// 实时市场快照 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarketSnapshotResponse {
    /// 国际金价 (USD/oz)
    #[serde(rename = "goldUSD")]
    #[schema(example = 2651.23)]
    pub gold_usd: f64,
    /// 美元兑韩元汇率
    #[serde(rename = "usdKRW")]
    #[schema(example = 1381.5)]
    pub usd_krw: f64,
    /// 韩元/克金价
    #[serde(rename = "goldKRW")]
    #[schema(example = 117755.0)]
    pub gold_krw: f64,
    /// 金价 24 小时涨跌幅 (%)
    #[serde(rename = "goldChange24h")]
    #[schema(example = 0.5)]
    pub gold_change24h: f64,
    /// 汇率 24 小时涨跌幅 (%)
    #[serde(rename = "fxChange24h")]
    #[schema(example = 0.3)]
    pub fx_change24h: f64,
    /// 韩元金价 24 小时涨跌幅 (%)
    #[serde(rename = "goldKRWChange24h")]
    #[schema(example = 0.8)]
    pub gold_krw_change24h: f64,
    /// 快照生成时刻 (ISO 8601)
    #[schema(example = "2026-03-01T10:00:00Z")]
    pub timestamp: String,
}

/// 市场分析结果 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    /// 国际金价变动 (%)
    #[serde(rename = "goldChange")]
    #[schema(example = -1.2)]
    pub gold_change: f64,
    /// 汇率变动 (%)
    #[serde(rename = "fxChange")]
    #[schema(example = 2.1)]
    pub fx_change: f64,
    /// 韩元金价变动 (%)
    #[serde(rename = "krwGoldChange")]
    #[schema(example = 0.9)]
    pub krw_gold_change: f64,
    /// 自然语言解读 (韩文)
    #[schema(example = "최근 1M 동안 국제 금 가격은 1.2% 하락했으며, ...")]
    pub interpretation: String,
    /// 状态档位 (safe / warning / danger)
    #[schema(example = "safe")]
    pub status: String,
}

// ============================================================
//  持仓相关 DTO
// ============================================================

/// 持仓读写 DTO (请求体与响应体同构)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HoldingsBody {
    /// 持有数量 (克)
    #[schema(example = 12.5)]
    pub amount: f64,
    /// 买入均价 (韩元/克)
    #[serde(rename = "avgPrice")]
    #[schema(example = 118000.0)]
    pub avg_price: f64,
}

/// 持仓估值 DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HoldingsValuationResponse {
    /// 投入本金 (韩元)
    #[serde(rename = "investedValue")]
    #[schema(example = 1475000.0)]
    pub invested_value: f64,
    /// 当前评估价值 (韩元)
    #[serde(rename = "currentValue")]
    #[schema(example = 1496875.0)]
    pub current_value: f64,
    /// 评估损益 (韩元)
    #[serde(rename = "profitLoss")]
    #[schema(example = 21875.0)]
    pub profit_loss: f64,
    /// 评估损益率 (%)
    #[serde(rename = "profitLossPercent")]
    #[schema(example = 1.48)]
    pub profit_loss_percent: f64,
}

// ============================================================
//  通用响应 DTO
// ============================================================

/// 构建失败响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 固定为 false
    pub success: bool,
    /// 错误描述信息
    pub error: String,
}

impl ApiErrorResponse {
    /// 从错误信息构建
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}

// ============================================================
//  领域模型 → DTO 惯用转换 (impl From<T>)
// ============================================================

/// 状态档位的 wire 文本
fn status_text(status: MarketStatus) -> &'static str {
    match status {
        MarketStatus::Safe => "safe",
        MarketStatus::Warning => "warning",
        MarketStatus::Danger => "danger",
    }
}

impl From<Candle> for CandleResponse {
    fn from(c: Candle) -> Self {
        Self {
            time: c.time,
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
        }
    }
}

impl From<HistoryPoint> for HistoryPointResponse {
    fn from(p: HistoryPoint) -> Self {
        Self {
            date: p.date.to_string(),
            gold_usd: p.gold_usd,
            usd_krw: p.usd_krw,
            gold_krw: p.gold_krw,
        }
    }
}

impl TryFrom<HistoryPointResponse> for HistoryPoint {
    type Error = String;

    /// POST 回传的历史点转回领域模型，日期解析失败时报出原文
    fn try_from(p: HistoryPointResponse) -> Result<Self, Self::Error> {
        let date = p
            .date
            .parse()
            .map_err(|_| format!("invalid date: {}", p.date))?;
        Ok(Self {
            date,
            gold_usd: p.gold_usd,
            usd_krw: p.usd_krw,
            gold_krw: p.gold_krw,
        })
    }
}

impl From<MarketSnapshot> for MarketSnapshotResponse {
    fn from(s: MarketSnapshot) -> Self {
        Self {
            gold_usd: s.gold_usd,
            usd_krw: s.usd_krw,
            gold_krw: s.gold_krw,
            gold_change24h: s.gold_change24h,
            fx_change24h: s.fx_change24h,
            gold_krw_change24h: s.gold_krw_change24h,
            timestamp: s.timestamp.to_rfc3339(),
        }
    }
}

impl From<AnalysisResult> for AnalysisResponse {
    fn from(r: AnalysisResult) -> Self {
        Self {
            gold_change: r.gold_change,
            fx_change: r.fx_change,
            krw_gold_change: r.krw_gold_change,
            interpretation: r.interpretation,
            status: status_text(r.status).to_string(),
        }
    }
}

impl From<Holdings> for HoldingsBody {
    fn from(h: Holdings) -> Self {
        Self {
            amount: h.amount,
            avg_price: h.avg_price,
        }
    }
}

impl From<HoldingsBody> for Holdings {
    fn from(b: HoldingsBody) -> Self {
        Self {
            amount: b.amount,
            avg_price: b.avg_price,
        }
    }
}

impl From<HoldingsValuation> for HoldingsValuationResponse {
    fn from(v: HoldingsValuation) -> Self {
        Self {
            invested_value: v.invested_value,
            current_value: v.current_value,
            profit_loss: v.profit_loss,
            profit_loss_percent: v.profit_loss_percent,
        }
    }
}
