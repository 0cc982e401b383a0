//! # `geumgo-analysis` - 市场解读引擎
//!
//! 把一段历史序列浓缩成一句定性结论：本币（韩元）金价是否
//! 正在对冲货币贬值。引擎只比较序列首尾两点的百分比变动，
//! 经由一张带优先级的决策表（[`verdict::Verdict`]）映射到
//! `safe / warning / danger` 三档，并拼装韩文解读文案。
//!
//! 纯同步计算，无 I/O、无共享状态；对任何符合 `HistoryPoint`
//! 形状的序列都适用，与数据来自真实行情还是合成器无关。

pub mod analyzer;
pub mod verdict;

pub use analyzer::analyze;
