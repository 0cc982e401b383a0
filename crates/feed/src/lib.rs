//! # `geumgo-feed` - 实时报价数据源
//!
//! `QuoteProvider` 端口的 REST 实现：金价腿与汇率腿各自维护
//! 一条免费行情 API 的备选链路，逐个尝试直到某个源给出可用报价。
//! 链路耗尽以 `MarketError::Exhausted` 上抛，兜底常量由快照服务决定。

pub mod rest;
