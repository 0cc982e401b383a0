use chrono::Days;
use geumgo_core::common::time::TimeProvider;
use geumgo_core::common::{BASE_GOLD_USD, BASE_USD_KRW, krw_per_gram};
use geumgo_core::market::entity::HistoryPoint;
use rand::Rng;
use rand::RngExt;
use std::sync::Arc;

/// 金价腿的日趋势系数
const GOLD_TREND: f64 = 0.0002;
/// 汇率腿的日趋势系数
const FX_TREND: f64 = 0.0001;
/// 金价腿的噪声波动率
const GOLD_VOLATILITY: f64 = 0.008;
/// 汇率腿的噪声波动率
const FX_VOLATILITY: f64 = 0.003;

/// 保留两位小数
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// # Summary
/// 金价/汇率/韩元金价三列日线历史的合成生成器。
///
/// 每个资产腿的噪声由两条不同频率、不同相位的正弦波加一个
/// 均匀随机项加权构成，乘以各自的波动率常量后叠加到线性趋势上。
/// 两腿噪声相互独立，韩元金价由两腿换算得出。
///
/// # Invariants
/// - 输出恰好 `days + 1` 个点，日期逐日递增且包含"今天"，最旧在前。
/// - 每个点满足 `gold_krw ≈ gold_usd × usd_krw / TROY_OUNCE_TO_GRAM`
///   （取整误差以内）。
/// - 不做入参校验，`days` 的 [1, 365] 钳制由调用方负责。
pub struct HistorySynthesizer {
    // 时间锚点供给器
    time: Arc<dyn TimeProvider>,
}

impl HistorySynthesizer {
    /// 使用指定时钟创建生成器
    pub fn new(time: Arc<dyn TimeProvider>) -> Self {
        Self { time }
    }

    /// # Summary
    /// 生成最近 `days` 天（含今天）的历史序列。
    ///
    /// # Logic
    /// 1. 从 `days` 天前迭代到今天，日索引 `d` 从 0 递增。
    /// 2. 每腿乘数 = `1 + 趋势 × d + 谐波噪声`，乘以基准价得到当日价格。
    /// 3. 金价、汇率先各自保留两位小数，再由取整后的两腿换算韩元金价，
    ///    保证换算不变式在取整后依然成立。
    ///
    /// # Arguments
    /// * `days`: 回溯天数（调用方已钳制到 [1, 365]）。
    /// * `rng`: 注入的随机源。
    ///
    /// # Returns
    /// 按日期升序排列的 `days + 1` 个历史点。
    pub fn generate<R: Rng + ?Sized>(&self, days: u32, rng: &mut R) -> Vec<HistoryPoint> {
        let today = self.time.now().date_naive();
        let mut points = Vec::new();

        for i in (0..=days).rev() {
            let date = today - Days::new(u64::from(i));
            let d = f64::from(days - i);

            let gold_noise = ((d * 0.3).sin() * 0.5
                + (d * 0.7).sin() * 0.3
                + (rng.random::<f64>() - 0.5) * 0.4)
                * GOLD_VOLATILITY;
            let fx_noise = ((d * 0.2 + 1.0).sin() * 0.5
                + (d * 0.5).sin() * 0.3
                + (rng.random::<f64>() - 0.5) * 0.4)
                * FX_VOLATILITY;

            let gold_multiplier = 1.0 + GOLD_TREND * d + gold_noise;
            let fx_multiplier = 1.0 + FX_TREND * d + fx_noise;

            let gold_usd = round2(BASE_GOLD_USD * gold_multiplier);
            let usd_krw = round2(BASE_USD_KRW * fx_multiplier);
            let gold_krw = krw_per_gram(gold_usd, usd_krw).round();

            points.push(HistoryPoint {
                date,
                gold_usd,
                usd_krw,
                gold_krw,
            });
        }

        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use geumgo_core::common::time::FakeClockProvider;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_dates_end_today_and_step_daily() {
        let t = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let synth = HistorySynthesizer::new(Arc::new(FakeClockProvider::new(t)));
        let mut rng = StdRng::seed_from_u64(1);

        let points = synth.generate(7, &mut rng);
        assert_eq!(points.len(), 8);
        assert_eq!(points.last().map(|p| p.date), Some(t.date_naive()));
        for pair in points.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_legs_rounded_to_two_decimals() {
        let t = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let synth = HistorySynthesizer::new(Arc::new(FakeClockProvider::new(t)));
        let mut rng = StdRng::seed_from_u64(5);

        for p in synth.generate(30, &mut rng) {
            assert!((p.gold_usd * 100.0 - (p.gold_usd * 100.0).round()).abs() < 1e-6);
            assert!((p.usd_krw * 100.0 - (p.usd_krw * 100.0).round()).abs() < 1e-6);
            assert!((p.gold_krw - p.gold_krw.round()).abs() < f64::EPSILON);
        }
    }
}
