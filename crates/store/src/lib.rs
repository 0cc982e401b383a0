//! # `geumgo-store` - 持久化层
//!
//! `HoldingsStore` 端口的 SQLite 实现。
//! 原型版仪表盘把持仓存在浏览器 localStorage 里，
//! 服务端化之后由这里的单行表接管，语义保持"最多一条、覆盖写"。

pub mod config;
pub mod holdings;
