use crate::verdict::Verdict;
use geumgo_core::market::entity::{AnalysisResult, HistoryPoint, MarketStatus};

/// 历史不足两个点时的固定文案
const INSUFFICIENT_DATA: &str = "데이터가 충분하지 않습니다.";

/// 首尾百分比变动
fn delta(last: f64, first: f64) -> f64 {
    (last - first) / first * 100.0
}

/// 符号对应的方向词（韩文）
fn direction(change: f64) -> &'static str {
    if change >= 0.0 { "상승" } else { "하락" }
}

/// # Summary
/// 对历史序列做首尾对比分析，产出定性解读。
///
/// # Logic
/// 1. 序列不足两个点时返回降级结果：三项变动为 0、`Warning` 档、
///    固定的"数据不足"文案。这是合法可展示的结论，不是错误。
/// 2. 否则只取首尾两点（中间点不参与），分别计算金价、汇率、
///    韩元金价的百分比变动。
/// 3. 经 [`Verdict::classify`] 决策表选出结论档位。
/// 4. 拼装解读文案：先金价腿、再汇率腿、再韩元金价腿
///    （方向按符号取 상승/하락，幅度取绝对值保留一位小数），
///    最后接上结论收尾句。
///
/// # Arguments
/// * `history`: 按日期升序的历史序列，来源不限（真实或合成）。
/// * `period_label`: 文案开头的期间标签，如 "최근 1M"。
///
/// # Returns
/// 分析结果，纯确定性（随机性只存在于上游合成器）。
pub fn analyze(history: &[HistoryPoint], period_label: &str) -> AnalysisResult {
    let (first, last) = match (history.first(), history.last()) {
        (Some(first), Some(last)) if history.len() >= 2 => (first, last),
        _ => {
            return AnalysisResult {
                gold_change: 0.0,
                fx_change: 0.0,
                krw_gold_change: 0.0,
                interpretation: INSUFFICIENT_DATA.to_string(),
                status: MarketStatus::Warning,
            };
        }
    };

    let gold_change = delta(last.gold_usd, first.gold_usd);
    let fx_change = delta(last.usd_krw, first.usd_krw);
    let krw_gold_change = delta(last.gold_krw, first.gold_krw);

    let verdict = Verdict::classify(gold_change, fx_change, krw_gold_change);

    let mut interpretation = format!(
        "{} 동안 국제 금 가격은 {:.1}% {}했으며, 환율은 {:.1}% {}했습니다. ",
        period_label,
        gold_change.abs(),
        direction(gold_change),
        fx_change.abs(),
        direction(fx_change),
    );

    // 韩元金价句在防御组以连接形收尾，在回调组以终止形收尾
    if krw_gold_change >= 0.0 {
        interpretation.push_str(&format!(
            "이로 인해 원화 기준 금 가격은 {:.1}% {}하여 ",
            krw_gold_change.abs(),
            direction(krw_gold_change),
        ));
    } else {
        interpretation.push_str(&format!(
            "이로 인해 원화 기준 금 가격은 {:.1}% {}했습니다. ",
            krw_gold_change.abs(),
            direction(krw_gold_change),
        ));
    }
    interpretation.push_str(verdict.clause());

    AnalysisResult {
        gold_change,
        fx_change,
        krw_gold_change,
        interpretation,
        status: verdict.status(),
    }
}
