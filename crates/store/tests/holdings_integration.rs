use geumgo_core::holdings::entity::Holdings;
use geumgo_core::store::error::StoreError;
use geumgo_core::store::port::HoldingsStore;
use geumgo_store::config::set_root_dir;
use geumgo_store::holdings::SqliteHoldingsStore;
use tempfile::tempdir;

// 根目录经由全局 OnceLock 注入，同一进程只认第一次设置，
// 因此持久化用例集中在单个集成测试里串行执行。
#[tokio::test]
async fn test_holdings_store_full_integration() {
    // 1. 初始化临时测试环境
    let tmp_dir = tempdir().expect("Failed to create temp dir");
    set_root_dir(tmp_dir.path().to_path_buf());

    let store = SqliteHoldingsStore::new()
        .await
        .expect("Failed to create holdings store");

    // 初始状态无记录
    assert!(store.load().await.unwrap().is_none());

    // 2. 非法输入在落库前被拒绝，也不会污染存储
    for bad in [
        Holdings { amount: 0.0, avg_price: 100_000.0 },
        Holdings { amount: -3.0, avg_price: 100_000.0 },
        Holdings { amount: 5.0, avg_price: 0.0 },
    ] {
        let err = store.save(&bad).await.expect_err("save should fail");
        assert!(matches!(err, StoreError::InvalidHoldings(_)));
    }
    assert!(store.load().await.unwrap().is_none());

    // 3. 保存后可读回
    let holdings = Holdings {
        amount: 12.5,
        avg_price: 118_000.0,
    };
    store.save(&holdings).await.unwrap();
    let loaded = store.load().await.unwrap().expect("Holdings should exist");
    assert_eq!(loaded, holdings);

    // 4. 覆盖保存只保留最新一条
    let updated = Holdings {
        amount: 20.0,
        avg_price: 121_500.0,
    };
    store.save(&updated).await.unwrap();
    let loaded = store.load().await.unwrap().expect("Holdings should exist");
    assert_eq!(loaded, updated);

    // 5. 清除后回到无记录状态，重复清除不报错
    store.clear().await.unwrap();
    assert!(store.load().await.unwrap().is_none());
    store.clear().await.unwrap();

    // 6. 重新打开存储仍能看到磁盘上的最终状态（空）
    let reopened = SqliteHoldingsStore::new()
        .await
        .expect("Failed to reopen holdings store");
    assert!(reopened.load().await.unwrap().is_none());
}
