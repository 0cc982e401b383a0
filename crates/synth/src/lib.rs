//! # `geumgo-synth` - 合成行情序列生成器
//!
//! 在没有可用的付费历史行情源时，仪表盘的 K 线图与叠加走势图
//! 由本 crate 的两个生成器伪造出"看起来合理"的序列：
//!
//! - [`candle::CandleSynthesizer`] - 带趋势偏置的随机游走 OHLC K 线
//! - [`history::HistorySynthesizer`] - 多谐波噪声叠加的日线历史（金价/汇率/韩元金价三列）
//!
//! 两者均为无状态纯计算：时间锚点通过 `TimeProvider` 注入，
//! 随机源通过 `&mut impl Rng` 注入，测试用固定种子即可完全复现输出。

pub mod candle;
pub mod history;
