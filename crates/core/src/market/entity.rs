use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// # Summary
/// 单根 K 线数据实体，表示一个时间桶内的韩元/克金价波动。
///
/// # Invariants
/// - `high` 必须大于或等于 `max(open, close)`。
/// - `low` 必须小于或等于 `min(open, close)`。
/// - 四个价格均已取整到整数韩元。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    // K 线开始时间 (Unix 秒)
    pub time: i64,
    // 开盘价
    pub open: f64,
    // 最高价
    pub high: f64,
    // 最低价
    pub low: f64,
    // 收盘价
    pub close: f64,
}

/// # Summary
/// 单日历史观测点，同时携带金价、汇率与换算后的韩元金价。
///
/// # Invariants
/// - `gold_krw ≈ gold_usd × usd_krw / TROY_OUNCE_TO_GRAM`（取整误差以内）。
/// - `gold_usd`、`usd_krw` 保留两位小数，`gold_krw` 为整数韩元。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPoint {
    // 日历日期 (无时间分量)
    pub date: NaiveDate,
    // 国际金价 (USD/oz)
    pub gold_usd: f64,
    // 美元兑韩元汇率
    pub usd_krw: f64,
    // 韩元/克金价
    pub gold_krw: f64,
}

/// # Summary
/// 行情源返回的单腿报价（金价腿或汇率腿）。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuoteTick {
    // 报价数值 (USD/oz 或 KRW/USD)
    pub value: f64,
    // 24 小时涨跌幅 (%)，源不提供时为 0
    pub change24h: f64,
}

/// # Summary
/// 实时市场快照，仪表盘顶部指标卡片的数据源。
///
/// # Invariants
/// - `gold_krw` 由两腿换算并取整到整数韩元。
/// - `gold_krw_change24h` 为两腿涨跌幅之和。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    // 国际金价 (USD/oz)
    pub gold_usd: f64,
    // 美元兑韩元汇率
    pub usd_krw: f64,
    // 韩元/克金价
    pub gold_krw: f64,
    // 金价 24 小时涨跌幅 (%)
    pub gold_change24h: f64,
    // 汇率 24 小时涨跌幅 (%)
    pub fx_change24h: f64,
    // 韩元金价 24 小时涨跌幅 (%)
    pub gold_krw_change24h: f64,
    // 快照生成时刻
    pub timestamp: DateTime<Utc>,
}

/// # Summary
/// 市场解读的定性结论档位。
///
/// 表示本币金价是否正在对冲货币贬值：`Safe` 为防御有效，
/// `Warning` 为短期回调或数据不足，`Danger` 为双弱格局。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarketStatus {
    Safe,
    Warning,
    Danger,
}

/// # Summary
/// 市场分析结果：三项首尾百分比变动、文字解读与状态档位。
///
/// # Invariants
/// - 每次历史序列更新后重新计算，无持久化身份。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    // 国际金价变动 (%)
    pub gold_change: f64,
    // 汇率变动 (%)
    pub fx_change: f64,
    // 韩元金价变动 (%)
    pub krw_gold_change: f64,
    // 自然语言解读 (韩文)
    pub interpretation: String,
    // 状态档位
    pub status: MarketStatus,
}
