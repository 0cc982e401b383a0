//! # `geumgo-core` - 领域内核
//!
//! 金价仪表盘后端的实体 (Entity)、端口 (Port) 与错误类型的唯一定义处。
//! 本 crate 不包含任何具体实现：缓存、行情源、持久化与 HTTP 层
//! 均在各自的 crate 中实现这里声明的契约。
//!
//! ## 领域划分
//! - `market`  - 行情快照、K 线、历史序列与分析结论
//! - `holdings` - 用户持仓及其估值
//! - `cache`   - 带时间戳的 KV 缓存端口
//! - `store`   - 持仓持久化端口
//! - `common`  - 周期枚举、基准常量与时钟供给器

pub mod cache;
pub mod common;
pub mod config;
pub mod holdings;
pub mod market;
pub mod store;
