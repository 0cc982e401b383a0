use async_trait::async_trait;
use chrono::Duration;
use geumgo_cache::mem::MemCache;
use geumgo_core::cache::port::CacheExt;
use geumgo_core::common::time::TimeProvider;
use geumgo_core::common::{
    BASE_GOLD_USD, BASE_USD_KRW, FX_FALLBACK_CHANGE_24H, GOLD_FALLBACK_CHANGE_24H, krw_per_gram,
};
use geumgo_core::market::entity::{MarketSnapshot, QuoteTick};
use geumgo_core::market::port::{QuoteProvider, SnapshotSource};
use std::sync::Arc;
use tracing::warn;

/// 快照条目的缓存键
const SNAPSHOT_KEY: &str = "snapshot:live";

/// # Summary
/// 带 time-boxed 缓存的市场快照服务。
///
/// 同一条快照在存活期内复用，过期后重新抓取并原地覆盖缓存条目。
/// 覆盖写依赖并发哈希表自身的原子性，不引入额外锁——
/// 并发请求最坏情况是各自抓取一次并先后覆盖，结果仍然一致。
///
/// # Invariants
/// - `snapshot()` 永不失败：任一腿报价失败都降级为基准兜底常量。
/// - 过期判定与快照时间戳全部来自注入的 `TimeProvider`。
pub struct CachedSnapshotService {
    // 报价数据源驱动
    provider: Arc<dyn QuoteProvider>,
    // 独占内存缓存实例
    cache: MemCache,
    // 时钟供给器
    time: Arc<dyn TimeProvider>,
    // 缓存存活时长
    ttl: Duration,
}

impl CachedSnapshotService {
    /// # Summary
    /// 创建快照服务。
    ///
    /// # Arguments
    /// * `provider`: 报价数据源。
    /// * `time`: 时钟供给器。
    /// * `ttl_secs`: 快照缓存的存活秒数。
    ///
    /// # Returns
    /// 服务实例。
    pub fn new(provider: Arc<dyn QuoteProvider>, time: Arc<dyn TimeProvider>, ttl_secs: u64) -> Self {
        Self {
            provider,
            cache: MemCache::new(),
            time,
            ttl: Duration::seconds(i64::try_from(ttl_secs).unwrap_or(30)),
        }
    }

    /// 单腿降级：失败时记日志并回退到指定兜底值
    fn leg_or_fallback(
        result: Result<QuoteTick, geumgo_core::market::error::MarketError>,
        leg: &str,
        fallback: QuoteTick,
    ) -> QuoteTick {
        match result {
            Ok(tick) => tick,
            Err(e) => {
                warn!("{} quote failed, falling back to baseline: {}", leg, e);
                fallback
            }
        }
    }
}

#[async_trait]
impl SnapshotSource for CachedSnapshotService {
    /// # Summary
    /// 获取当前市场快照。
    ///
    /// # Logic
    /// 1. 缓存条目仍在存活期内则直接返回。
    /// 2. 并发抓取金价腿与汇率腿，失败的腿用兜底常量顶替。
    /// 3. 换算韩元/克金价（取整），涨跌幅取两腿之和。
    /// 4. 打上当前时间戳覆盖缓存后返回。
    ///
    /// # Returns
    /// 市场快照，永不失败。
    async fn snapshot(&self) -> MarketSnapshot {
        let now = self.time.now();

        if let Ok(Some(cached)) = self
            .cache
            .get_fresh::<MarketSnapshot>(SNAPSHOT_KEY, now, self.ttl)
            .await
        {
            return cached;
        }

        let (gold_result, fx_result) =
            tokio::join!(self.provider.fetch_gold_usd(), self.provider.fetch_usd_krw());

        let gold = Self::leg_or_fallback(
            gold_result,
            "gold",
            QuoteTick {
                value: BASE_GOLD_USD,
                change24h: GOLD_FALLBACK_CHANGE_24H,
            },
        );
        let fx = Self::leg_or_fallback(
            fx_result,
            "fx",
            QuoteTick {
                value: BASE_USD_KRW,
                change24h: FX_FALLBACK_CHANGE_24H,
            },
        );

        let snapshot = MarketSnapshot {
            gold_usd: gold.value,
            usd_krw: fx.value,
            gold_krw: krw_per_gram(gold.value, fx.value).round(),
            gold_change24h: gold.change24h,
            fx_change24h: fx.change24h,
            gold_krw_change24h: gold.change24h + fx.change24h,
            timestamp: now,
        };

        let _ = self.cache.put(SNAPSHOT_KEY, &snapshot, now).await;

        snapshot
    }
}
