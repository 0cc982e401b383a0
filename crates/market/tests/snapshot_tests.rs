use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use geumgo_core::common::time::FakeClockProvider;
use geumgo_core::common::{BASE_GOLD_USD, BASE_USD_KRW, TROY_OUNCE_TO_GRAM};
use geumgo_core::market::entity::QuoteTick;
use geumgo_core::market::error::MarketError;
use geumgo_core::market::port::{QuoteProvider, SnapshotSource};
use geumgo_market::snapshot::CachedSnapshotService;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 固定报价的数据源替身，记录调用次数
struct MockProvider {
    calls: AtomicUsize,
    gold_fails: bool,
    fx_fails: bool,
}

impl MockProvider {
    fn new(gold_fails: bool, fx_fails: bool) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            gold_fails,
            fx_fails,
        }
    }
}

#[async_trait]
impl QuoteProvider for MockProvider {
    async fn fetch_gold_usd(&self) -> Result<QuoteTick, MarketError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.gold_fails {
            return Err(MarketError::Exhausted);
        }
        Ok(QuoteTick {
            value: 2700.0,
            change24h: 1.2,
        })
    }

    async fn fetch_usd_krw(&self) -> Result<QuoteTick, MarketError> {
        if self.fx_fails {
            return Err(MarketError::Exhausted);
        }
        Ok(QuoteTick {
            value: 1400.0,
            change24h: -0.2,
        })
    }
}

#[tokio::test]
async fn test_snapshot_composition() {
    let provider = Arc::new(MockProvider::new(false, false));
    let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let clock = Arc::new(FakeClockProvider::new(t0));
    let service = CachedSnapshotService::new(provider, clock, 30);

    let snapshot = service.snapshot().await;
    assert_eq!(snapshot.gold_usd, 2700.0);
    assert_eq!(snapshot.usd_krw, 1400.0);
    assert_eq!(
        snapshot.gold_krw,
        (2700.0 * 1400.0 / TROY_OUNCE_TO_GRAM).round()
    );
    // 韩元金价涨跌幅为两腿之和
    assert!((snapshot.gold_krw_change24h - 1.0).abs() < 1e-9);
    assert_eq!(snapshot.timestamp, t0);
}

#[tokio::test]
async fn test_snapshot_cached_within_ttl_and_refetched_after() {
    let provider = Arc::new(MockProvider::new(false, false));
    let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let clock = Arc::new(FakeClockProvider::new(t0));
    let service = CachedSnapshotService::new(provider.clone(), clock.clone(), 30);

    // 存活期内的重复调用复用缓存，数据源只被打了一次
    let first = service.snapshot().await;
    clock.advance(Duration::seconds(29));
    let second = service.snapshot().await;
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    assert_eq!(first.timestamp, second.timestamp);

    // 过期后重新抓取并覆盖时间戳
    clock.advance(Duration::seconds(2));
    let third = service.snapshot().await;
    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    assert_eq!(third.timestamp, t0 + Duration::seconds(31));
}

#[tokio::test]
async fn test_snapshot_falls_back_per_leg() {
    let provider = Arc::new(MockProvider::new(true, false));
    let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let clock = Arc::new(FakeClockProvider::new(t0));
    let service = CachedSnapshotService::new(provider, clock, 30);

    // 金价腿失败时只有该腿回落到基准值，汇率腿照常
    let snapshot = service.snapshot().await;
    assert_eq!(snapshot.gold_usd, BASE_GOLD_USD);
    assert_eq!(snapshot.gold_change24h, 0.5);
    assert_eq!(snapshot.usd_krw, 1400.0);
}

#[tokio::test]
async fn test_snapshot_never_fails_even_when_all_sources_die() {
    let provider = Arc::new(MockProvider::new(true, true));
    let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let clock = Arc::new(FakeClockProvider::new(t0));
    let service = CachedSnapshotService::new(provider, clock, 30);

    let snapshot = service.snapshot().await;
    assert_eq!(snapshot.gold_usd, BASE_GOLD_USD);
    assert_eq!(snapshot.usd_krw, BASE_USD_KRW);
    assert_eq!(
        snapshot.gold_krw,
        (BASE_GOLD_USD * BASE_USD_KRW / TROY_OUNCE_TO_GRAM).round()
    );
    assert!((snapshot.gold_krw_change24h - 0.8).abs() < 1e-9);
}
