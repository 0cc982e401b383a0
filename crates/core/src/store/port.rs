use crate::holdings::entity::Holdings;
use crate::store::error::StoreError;
use async_trait::async_trait;

/// # Summary
/// 持仓持久化端口。
///
/// 仪表盘是单用户应用，持仓以"最多一条记录"的语义存取：
/// 重复保存即覆盖。
///
/// # Invariants
/// - `save` 必须先通过 `Holdings::validate` 校验，非法数据不得落库。
#[async_trait]
pub trait HoldingsStore: Send + Sync {
    /// # Summary
    /// 保存（覆盖）持仓记录。
    ///
    /// # Logic
    /// 1. 校验字段合法性，非法返回 `InvalidHoldings`。
    /// 2. 覆盖写入唯一记录行。
    ///
    /// # Arguments
    /// * `holdings`: 待保存的持仓。
    ///
    /// # Returns
    /// 操作结果。
    async fn save(&self, holdings: &Holdings) -> Result<(), StoreError>;

    /// # Summary
    /// 读取持仓记录。
    ///
    /// # Returns
    /// 存在返回 `Some(Holdings)`，从未记录过返回 None。
    async fn load(&self) -> Result<Option<Holdings>, StoreError>;

    /// # Summary
    /// 清除持仓记录。
    ///
    /// # Returns
    /// 无论记录是否存在均返回 Ok。
    async fn clear(&self) -> Result<(), StoreError>;
}
