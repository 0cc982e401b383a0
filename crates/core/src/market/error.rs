use thiserror::Error;

/// # Summary
/// 行情数据域错误枚举，覆盖网络、解析与数据源链路耗尽。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum MarketError {
    // 网络层错误，包含底层 HTTP 客户端错误信息
    #[error("Network error: {0}")]
    Network(String),
    // 响应解析错误，如 JSON 结构不匹配或字段缺失
    #[error("Parse error: {0}")]
    Parse(String),
    // 备选数据源全部失败
    #[error("All quote sources exhausted")]
    Exhausted,
    // 未知或未分类的错误
    #[error("Unknown error: {0}")]
    Unknown(String),
}
