use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod time;

/// 金衡盎司换算为克的固定系数。
///
/// 国际金价以美元/盎司报价，仪表盘展示的是韩元/克，
/// 所有换算必须统一经过该常量。
pub const TROY_OUNCE_TO_GRAM: f64 = 31.1035;

/// 基准国际金价 (USD/oz)，行情源全部失效时的兜底值，也是合成序列的锚点。
pub const BASE_GOLD_USD: f64 = 2650.0;

/// 基准美元兑韩元汇率，用途同上。
pub const BASE_USD_KRW: f64 = 1380.0;

/// 金价兜底时使用的 24 小时涨跌幅 (%)。
pub const GOLD_FALLBACK_CHANGE_24H: f64 = 0.5;

/// 汇率兜底时使用的 24 小时涨跌幅 (%)。
pub const FX_FALLBACK_CHANGE_24H: f64 = 0.3;

/// # Summary
/// 由美元金价与汇率换算韩元/克金价（未取整）。
///
/// # Logic
/// 1. 盎司价乘以汇率得到韩元/盎司。
/// 2. 除以 `TROY_OUNCE_TO_GRAM` 换算为每克价格。
///
/// # Arguments
/// * `gold_usd`: 国际金价 (USD/oz)。
/// * `usd_krw`: 美元兑韩元汇率。
///
/// # Returns
/// 韩元/克金价。
pub fn krw_per_gram(gold_usd: f64, usd_krw: f64) -> f64 {
    gold_usd * usd_krw / TROY_OUNCE_TO_GRAM
}

/// # Summary
/// K 线合成周期枚举，决定步长、步数与波动率参数。
///
/// # Invariants
/// - `Month1` 采用固定 30 天步长的近似月，不做日历对齐。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    // 1小时
    Hour1,
    // 1日
    Day1,
    // 1月 (固定 30 天近似)
    Month1,
}

impl FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "1H" | "HOUR1" => Ok(TimeFrame::Hour1),
            "1D" | "DAY1" => Ok(TimeFrame::Day1),
            "1M" | "MONTH1" => Ok(TimeFrame::Month1),
            _ => Err(format!("Unknown TimeFrame: {}", s)),
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFrame::Hour1 => write!(f, "1H"),
            TimeFrame::Day1 => write!(f, "1D"),
            TimeFrame::Month1 => write!(f, "1M"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_roundtrip() {
        for tf in [TimeFrame::Hour1, TimeFrame::Day1, TimeFrame::Month1] {
            let text = tf.to_string();
            assert_eq!(text.parse::<TimeFrame>().unwrap(), tf);
        }
        // 小写输入同样可解析
        assert_eq!("1h".parse::<TimeFrame>().unwrap(), TimeFrame::Hour1);
        assert!("1W".parse::<TimeFrame>().is_err());
    }

    #[test]
    fn test_krw_per_gram_baseline() {
        let v = krw_per_gram(BASE_GOLD_USD, BASE_USD_KRW);
        // 2650 * 1380 / 31.1035 ≈ 117575.8
        assert!((v - 117_575.0).abs() < 10.0);
    }
}
