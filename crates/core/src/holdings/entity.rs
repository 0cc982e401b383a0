use serde::{Deserialize, Serialize};

/// # Summary
/// 用户持仓实体：持有克数与买入均价。
///
/// # Invariants
/// - `amount` 与 `avg_price` 必须严格大于 0，入库前由 `validate` 把关。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Holdings {
    // 持有数量 (克)
    pub amount: f64,
    // 买入均价 (韩元/克)
    pub avg_price: f64,
}

/// # Summary
/// 持仓估值快照，由持仓与当前韩元金价推导，无持久化身份。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HoldingsValuation {
    // 投入本金 (韩元)
    pub invested_value: f64,
    // 当前评估价值 (韩元)
    pub current_value: f64,
    // 评估损益 (韩元)
    pub profit_loss: f64,
    // 评估损益率 (%)
    pub profit_loss_percent: f64,
}

impl Holdings {
    /// # Summary
    /// 校验持仓字段的合法性。
    ///
    /// # Logic
    /// 1. 克数与均价必须均为有限正数。
    ///
    /// # Returns
    /// 合法返回 Ok，否则返回描述性错误消息。
    pub fn validate(&self) -> Result<(), String> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(format!("amount must be positive, got {}", self.amount));
        }
        if !self.avg_price.is_finite() || self.avg_price <= 0.0 {
            return Err(format!("avg_price must be positive, got {}", self.avg_price));
        }
        Ok(())
    }

    /// # Summary
    /// 以当前韩元金价对持仓估值。
    ///
    /// # Logic
    /// 1. 当前价值 = 克数 × 当前韩元/克金价。
    /// 2. 本金 = 克数 × 买入均价。
    /// 3. 损益与损益率由二者相减、相除得出。
    ///
    /// # Arguments
    /// * `gold_krw`: 当前韩元/克金价。
    ///
    /// # Returns
    /// 估值快照。
    pub fn valuation(&self, gold_krw: f64) -> HoldingsValuation {
        let current_value = self.amount * gold_krw;
        let invested_value = self.amount * self.avg_price;
        let profit_loss = current_value - invested_value;
        let profit_loss_percent = profit_loss / invested_value * 100.0;

        HoldingsValuation {
            invested_value,
            current_value,
            profit_loss,
            profit_loss_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(Holdings { amount: 10.0, avg_price: 120_000.0 }.validate().is_ok());
        assert!(Holdings { amount: 0.0, avg_price: 120_000.0 }.validate().is_err());
        assert!(Holdings { amount: 10.0, avg_price: -1.0 }.validate().is_err());
        assert!(Holdings { amount: f64::NAN, avg_price: 1.0 }.validate().is_err());
    }

    #[test]
    fn test_valuation_profit_and_loss() {
        let holdings = Holdings { amount: 10.0, avg_price: 100_000.0 };

        let up = holdings.valuation(110_000.0);
        assert!((up.invested_value - 1_000_000.0).abs() < f64::EPSILON);
        assert!((up.current_value - 1_100_000.0).abs() < f64::EPSILON);
        assert!((up.profit_loss - 100_000.0).abs() < f64::EPSILON);
        assert!((up.profit_loss_percent - 10.0).abs() < 1e-9);

        let down = holdings.valuation(90_000.0);
        assert!(down.profit_loss < 0.0);
        assert!((down.profit_loss_percent + 10.0).abs() < 1e-9);
    }
}
