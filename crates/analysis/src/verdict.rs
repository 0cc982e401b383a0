use geumgo_core::market::entity::MarketStatus;

/// # Summary
/// 市场解读的决策结论，带关联状态档位与文案模板的标签变体。
///
/// 五个变体对应决策表的五条守卫分支；[`Verdict::classify`]
/// 按声明顺序逐条求值，顺序即优先级。
///
/// # Invariants
/// - `krw_gold_change ≥ 0` 的三个变体恒为 `Safe`。
/// - `krw_gold_change < 0` 时只可能落入 `BothWeak` 或 `Correction`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    // 金价下跌但汇率上涨，换算后的韩元金价仍守住
    FxDrivenDefense,
    // 金价与汇率同时上涨
    DualDefense,
    // 韩元金价未跌的其余情形
    GenericDefense,
    // 金价与汇率双双走弱
    BothWeak,
    // 韩元金价下跌的其余情形
    Correction,
}

impl Verdict {
    /// # Summary
    /// 决策表求值：由三项符号组合选出结论。
    ///
    /// # Logic
    /// 按优先级依次匹配（前者命中即返回）：
    /// 1. 韩元金价未跌 ∧ 金价跌 ∧ 汇率涨 → `FxDrivenDefense`
    /// 2. 韩元金价未跌 ∧ 金价涨 ∧ 汇率涨 → `DualDefense`
    /// 3. 韩元金价未跌 → `GenericDefense`
    /// 4. 韩元金价跌 ∧ 金价跌 ∧ 汇率跌 → `BothWeak`
    /// 5. 其余 → `Correction`
    ///
    /// # Arguments
    /// * `gold_change`: 国际金价变动 (%)。
    /// * `fx_change`: 汇率变动 (%)。
    /// * `krw_gold_change`: 韩元金价变动 (%)。
    ///
    /// # Returns
    /// 命中的结论变体。
    pub fn classify(gold_change: f64, fx_change: f64, krw_gold_change: f64) -> Self {
        if krw_gold_change >= 0.0 && gold_change < 0.0 && fx_change > 0.0 {
            return Verdict::FxDrivenDefense;
        }
        if krw_gold_change >= 0.0 && gold_change > 0.0 && fx_change > 0.0 {
            return Verdict::DualDefense;
        }
        if krw_gold_change >= 0.0 {
            return Verdict::GenericDefense;
        }
        if gold_change < 0.0 && fx_change < 0.0 {
            return Verdict::BothWeak;
        }
        Verdict::Correction
    }

    /// 结论对应的状态档位
    pub fn status(self) -> MarketStatus {
        match self {
            Verdict::FxDrivenDefense | Verdict::DualDefense | Verdict::GenericDefense => {
                MarketStatus::Safe
            }
            Verdict::BothWeak => MarketStatus::Danger,
            Verdict::Correction => MarketStatus::Warning,
        }
    }

    /// 结论对应的解读收尾句（韩文）
    pub fn clause(self) -> &'static str {
        match self {
            Verdict::FxDrivenDefense => "환율 효과로 자산 방어가 이루어지고 있습니다.",
            Verdict::DualDefense => "금과 환율 모두 상승하는 강한 방어 국면입니다.",
            Verdict::GenericDefense => "원화 자산 대비 방어 효과가 나타나고 있습니다.",
            Verdict::BothWeak => "금과 환율 모두 약세로 주의가 필요합니다.",
            Verdict::Correction => "단기적 조정 구간으로 보입니다.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_table_precedence() {
        // 逐条覆盖五个分支
        assert_eq!(Verdict::classify(-1.0, 2.0, 0.5), Verdict::FxDrivenDefense);
        assert_eq!(Verdict::classify(1.0, 2.0, 3.0), Verdict::DualDefense);
        assert_eq!(Verdict::classify(0.0, 0.0, 0.0), Verdict::GenericDefense);
        assert_eq!(Verdict::classify(-1.0, -2.0, -3.0), Verdict::BothWeak);
        assert_eq!(Verdict::classify(1.0, -3.0, -0.5), Verdict::Correction);
    }

    #[test]
    fn test_krw_sign_partitions_status() {
        // 韩元金价未跌必为 Safe，下跌只会是 Warning 或 Danger
        assert_eq!(Verdict::classify(5.0, -5.0, 0.0).status(), MarketStatus::Safe);
        assert_eq!(
            Verdict::classify(-0.1, -0.1, -0.1).status(),
            MarketStatus::Danger
        );
        assert_eq!(
            Verdict::classify(0.1, -0.5, -0.1).status(),
            MarketStatus::Warning
        );
    }
}
