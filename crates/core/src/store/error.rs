use thiserror::Error;

/// # Summary
/// 持久化域错误枚举。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum StoreError {
    // 底层数据库故障
    #[error("Database error: {0}")]
    Database(String),
    // 持仓字段校验失败
    #[error("Invalid holdings: {0}")]
    InvalidHoldings(String),
}
