use geumgo_core::common::time::TimeProvider;
use geumgo_core::common::{BASE_GOLD_USD, BASE_USD_KRW, TimeFrame, krw_per_gram};
use geumgo_core::market::entity::Candle;
use rand::Rng;
use rand::RngExt;
use std::sync::Arc;

/// 随步数线性增长的趋势系数，使序列整体缓慢上偏
const TREND: f64 = 0.0001;

/// # Summary
/// 单个周期档位的游走参数。
///
/// # Invariants
/// - `Month1` 固定使用 30 天步长的近似月，刻意不做日历对齐，
///   改成真实月份会改变序列的可观测形态。
struct WalkParams {
    // 游走步数（输出 K 线数为 steps + 1）
    steps: u32,
    // 单步时长 (毫秒)
    step_ms: i64,
    // 单步波动率系数
    volatility: f64,
}

impl WalkParams {
    fn for_timeframe(timeframe: TimeFrame) -> Self {
        match timeframe {
            // 7 天 × 24 小时
            TimeFrame::Hour1 => Self {
                steps: 168,
                step_ms: 60 * 60 * 1000,
                volatility: 0.003,
            },
            // 90 天
            TimeFrame::Day1 => Self {
                steps: 90,
                step_ms: 24 * 60 * 60 * 1000,
                volatility: 0.008,
            },
            // 24 个近似月
            TimeFrame::Month1 => Self {
                steps: 24,
                step_ms: 30 * 24 * 60 * 60 * 1000,
                volatility: 0.02,
            },
        }
    }
}

/// # Summary
/// 韩元/克金价的合成 K 线生成器。
///
/// 以固定基准价为锚点做随机游走：每步的收盘价成为下一步的开盘价，
/// 噪声均值略偏正（-0.48 而非 -0.5）并叠加随步数增长的趋势因子，
/// 使长序列呈现温和上行。
///
/// # Invariants
/// - 输出恰好 `steps + 1` 根，时间严格递增，最旧在前。
/// - 每根 K 线满足 `high ≥ max(open, close)` 且 `low ≤ min(open, close)`。
/// - 四个价格均取整到整数韩元。
pub struct CandleSynthesizer {
    // 时间锚点供给器
    time: Arc<dyn TimeProvider>,
}

impl CandleSynthesizer {
    /// 使用指定时钟创建生成器
    pub fn new(time: Arc<dyn TimeProvider>) -> Self {
        Self { time }
    }

    /// # Summary
    /// 生成指定周期的 K 线序列。
    ///
    /// # Logic
    /// 1. 取周期对应的步数、步长与波动率。
    /// 2. 以 `BASE_GOLD_USD × BASE_USD_KRW / TROY_OUNCE_TO_GRAM` 为初始开盘价。
    /// 3. 从最旧一步迭代到当前时刻：开盘承接上一步收盘，
    ///    收盘 = 开盘 × (1 + 噪声 × 趋势因子)，最高/最低在开收盘区间外
    ///    再各加一段半幅随机影线。
    /// 4. 四价取整后入列，取整后的收盘价作为下一步开盘。
    ///
    /// # Arguments
    /// * `timeframe`: 周期档位。非法文本到档位的回退由 API 层完成。
    /// * `rng`: 注入的随机源，测试传固定种子即可复现。
    ///
    /// # Returns
    /// 按时间升序排列的 `steps + 1` 根 K 线。
    pub fn generate<R: Rng + ?Sized>(&self, timeframe: TimeFrame, rng: &mut R) -> Vec<Candle> {
        let params = WalkParams::for_timeframe(timeframe);
        let now_ms = self.time.now().timestamp_millis();

        let mut candles = Vec::new();
        let mut prev_close = krw_per_gram(BASE_GOLD_USD, BASE_USD_KRW);

        for i in (0..=params.steps).rev() {
            let time = (now_ms - i64::from(i) * params.step_ms) / 1000;

            // 趋势因子随已走过的步数增长
            let elapsed = f64::from(params.steps - i);
            let trend_factor = 1.0 + TREND * elapsed;
            let noise = (rng.random::<f64>() - 0.48) * params.volatility;

            let open = prev_close;
            let close = open + open * noise * trend_factor;

            // 影线：在开收盘区间之外再延伸半个波动率的随机幅度
            let intra_volatility = params.volatility * 0.5;
            let high_extra = (open * rng.random::<f64>() * intra_volatility).abs();
            let low_extra = (open * rng.random::<f64>() * intra_volatility).abs();

            let high = (open.max(close) + high_extra).round();
            let low = (open.min(close) - low_extra).round();
            let close = close.round();

            candles.push(Candle {
                time,
                open: open.round(),
                high,
                low,
                close,
            });

            prev_close = close;
        }

        candles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use geumgo_core::common::time::FakeClockProvider;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_clock() -> Arc<dyn TimeProvider> {
        let t = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        Arc::new(FakeClockProvider::new(t))
    }

    #[test]
    fn test_first_open_anchored_to_base_price() {
        let synth = CandleSynthesizer::new(fixed_clock());
        let mut rng = StdRng::seed_from_u64(7);
        let candles = synth.generate(TimeFrame::Day1, &mut rng);

        let base = krw_per_gram(BASE_GOLD_USD, BASE_USD_KRW).round();
        assert!((candles[0].open - base).abs() < f64::EPSILON);
    }

    #[test]
    fn test_close_chains_into_next_open() {
        let synth = CandleSynthesizer::new(fixed_clock());
        let mut rng = StdRng::seed_from_u64(42);
        let candles = synth.generate(TimeFrame::Hour1, &mut rng);

        for pair in candles.windows(2) {
            assert!((pair[1].open - pair[0].close).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_same_seed_reproduces_series() {
        let synth = CandleSynthesizer::new(fixed_clock());
        let a = synth.generate(TimeFrame::Month1, &mut StdRng::seed_from_u64(99));
        let b = synth.generate(TimeFrame::Month1, &mut StdRng::seed_from_u64(99));

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.time, y.time);
            assert!((x.close - y.close).abs() < f64::EPSILON);
        }
    }
}
