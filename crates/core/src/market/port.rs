use crate::market::entity::{MarketSnapshot, QuoteTick};
use crate::market::error::MarketError;
use async_trait::async_trait;

/// # Summary
/// 实时报价提供者接口（原始数据源）。
///
/// 快照服务依赖此端口取两腿报价；具体实现负责自己的
/// 备选链路与重试策略。
///
/// # Invariants
/// - 单腿失败必须以 `MarketError` 上抛，由上层决定降级方案，
///   实现者不得自行返回兜底常量。
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// # Summary
    /// 获取国际金价腿 (USD/oz)。
    ///
    /// # Logic
    /// 1. 依次尝试各数据源。
    /// 2. 任一源成功即返回，全部失败返回 `Exhausted`。
    ///
    /// # Returns
    /// 成功返回报价腿，失败返回 MarketError。
    async fn fetch_gold_usd(&self) -> Result<QuoteTick, MarketError>;

    /// # Summary
    /// 获取美元兑韩元汇率腿。
    ///
    /// # Logic
    /// 同 `fetch_gold_usd`，链路独立。
    ///
    /// # Returns
    /// 成功返回报价腿，失败返回 MarketError。
    async fn fetch_usd_krw(&self) -> Result<QuoteTick, MarketError>;
}

/// # Summary
/// 市场快照服务契约。
///
/// # Invariants
/// - 实现必须是不可失败的：行情源故障时降级到兜底常量，
///   调用方永远能拿到一份可展示的快照。
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// # Summary
    /// 获取当前市场快照。
    ///
    /// # Logic
    /// 1. 缓存未过期则直接返回。
    /// 2. 否则抓取两腿报价、换算合成并刷新缓存。
    ///
    /// # Returns
    /// 市场快照，永不失败。
    async fn snapshot(&self) -> MarketSnapshot;
}
