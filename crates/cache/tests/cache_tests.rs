use chrono::{Duration, TimeZone, Utc};
use geumgo_cache::mem::MemCache;
use geumgo_core::cache::port::{Cache, CacheExt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct TestSnapshot {
    gold_krw: f64,
    label: String,
}

#[tokio::test]
async fn test_mem_cache_raw_ops() {
    let cache = MemCache::new();
    let key = "raw_key";
    let value = vec![1, 2, 3, 4];
    let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();

    // 测试存取：时间戳随值一并返回
    cache.put_raw(key, value.clone(), t0).await.unwrap();
    let (bytes, stored_at) = cache.get_raw(key).await.unwrap().unwrap();
    assert_eq!(bytes, value);
    assert_eq!(stored_at, t0);

    // 测试删除
    cache.del(key).await.unwrap();
    assert!(cache.get_raw(key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_mem_cache_freshness_window() {
    let cache = MemCache::new();
    let key = "snapshot";
    let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let item = TestSnapshot {
        gold_krw: 117_576.0,
        label: "Geumgo".to_string(),
    };

    cache.put(key, &item, t0).await.unwrap();

    // 有效期内可读取
    let fresh: Option<TestSnapshot> = cache
        .get_fresh(key, t0 + Duration::seconds(29), Duration::seconds(30))
        .await
        .unwrap();
    assert_eq!(fresh, Some(item));

    // 超过存活时长后视为过期
    let stale: Option<TestSnapshot> = cache
        .get_fresh(key, t0 + Duration::seconds(31), Duration::seconds(30))
        .await
        .unwrap();
    assert!(stale.is_none());
}

#[tokio::test]
async fn test_mem_cache_overwrite_refreshes_timestamp() {
    let cache = MemCache::new();
    let key = "snapshot";
    let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let t1 = t0 + Duration::seconds(60);

    cache.put(key, &1_u32, t0).await.unwrap();
    cache.put(key, &2_u32, t1).await.unwrap();

    // 覆盖写后旧时间戳被替换，条目重新变新鲜
    let value: Option<u32> = cache
        .get_fresh(key, t1 + Duration::seconds(10), Duration::seconds(30))
        .await
        .unwrap();
    assert_eq!(value, Some(2));
}
