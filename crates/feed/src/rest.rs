use async_trait::async_trait;
use geumgo_core::market::entity::QuoteTick;
use geumgo_core::market::error::MarketError;
use geumgo_core::market::port::QuoteProvider;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

/// # Summary
/// 免费行情 API 备选链路的 REST 报价实现。
///
/// 金价腿依次尝试 metalpriceapi → goldapi → exchangerate-api(XAU)；
/// 汇率腿依次尝试 exchangerate-api(USD) → open.er-api。
/// 任一源成功即短路返回，单源失败记入日志后继续下一个。
///
/// # Invariants
/// - 使用 `reqwest` 异步客户端进行通讯，全局 10 秒超时。
/// - 本层不产出兜底常量，链路耗尽必须上抛 `Exhausted`。
#[derive(Clone)]
pub struct RestQuoteProvider {
    /// 内部使用的 HTTP 客户端
    client: Client,
}

impl RestQuoteProvider {
    /// # Summary
    /// 创建一个新的 RestQuoteProvider 实例。
    ///
    /// # Logic
    /// 1. 配置 10 秒超时。
    /// 2. 初始化 reqwest 客户端。
    ///
    /// # Returns
    /// 返回初始化后的 RestQuoteProvider。
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// metalpriceapi: 以 XAU 为基准币种报价，取 USD 汇率的倒数得到 USD/oz
    async fn gold_from_metalpriceapi(&self) -> Result<QuoteTick, MarketError> {
        let resp = self
            .client
            .get("https://api.metalpriceapi.com/v1/latest")
            .query(&[("api_key", "demo"), ("base", "XAU"), ("currencies", "USD")])
            .send()
            .await
            .map_err(|e| MarketError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(MarketError::Network(format!("HTTP {}", resp.status())));
        }

        let json: CurrencyRatesResponse = resp
            .json()
            .await
            .map_err(|e| MarketError::Parse(e.to_string()))?;

        let usd_per_xau = json
            .rate("USD")
            .filter(|r| *r > 0.0)
            .ok_or(MarketError::Parse("rates.USD missing".into()))?;

        Ok(QuoteTick {
            value: 1.0 / usd_per_xau,
            change24h: 0.0,
        })
    }

    /// goldapi: 直接给出 USD/oz 现价与 24 小时涨跌幅
    async fn gold_from_goldapi(&self) -> Result<QuoteTick, MarketError> {
        let resp = self
            .client
            .get("https://www.goldapi.io/api/XAU/USD")
            .header("x-access-token", "goldapi-demo")
            .send()
            .await
            .map_err(|e| MarketError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(MarketError::Network(format!("HTTP {}", resp.status())));
        }

        let json: GoldApiResponse = resp
            .json()
            .await
            .map_err(|e| MarketError::Parse(e.to_string()))?;

        let price = json
            .price
            .filter(|p| *p > 0.0)
            .ok_or(MarketError::Parse("price missing".into()))?;

        Ok(QuoteTick {
            value: price,
            change24h: json.chp.unwrap_or(0.0),
        })
    }

    /// exchangerate-api: 把 XAU 当作货币报价，同样取 USD 汇率的倒数
    async fn gold_from_exchangerate(&self) -> Result<QuoteTick, MarketError> {
        let usd_per_xau = self
            .currency_rate("https://api.exchangerate-api.com/v4/latest/XAU", "USD")
            .await?;
        Ok(QuoteTick {
            value: 1.0 / usd_per_xau,
            change24h: 0.0,
        })
    }

    /// 通用货币汇率请求：GET 给定 URL 并取 rates 中指定币种的值
    async fn currency_rate(&self, url: &str, currency: &str) -> Result<f64, MarketError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MarketError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(MarketError::Network(format!("HTTP {}", resp.status())));
        }

        let json: CurrencyRatesResponse = resp
            .json()
            .await
            .map_err(|e| MarketError::Parse(e.to_string()))?;

        json.rate(currency)
            .filter(|r| *r > 0.0)
            .ok_or_else(|| MarketError::Parse(format!("rates.{} missing", currency)))
    }
}

impl Default for RestQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// # Summary
/// 通用"基准币种 → 汇率表"响应结构，
/// metalpriceapi 与 exchangerate 系列接口共用。
#[derive(Deserialize, Debug)]
struct CurrencyRatesResponse {
    rates: Option<HashMap<String, f64>>,
}

impl CurrencyRatesResponse {
    fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.as_ref().and_then(|r| r.get(currency)).copied()
    }
}

/// # Summary
/// goldapi 现货响应结构。
#[derive(Deserialize, Debug)]
struct GoldApiResponse {
    // 现价 (USD/oz)
    price: Option<f64>,
    // 24 小时涨跌幅 (%)
    chp: Option<f64>,
}

#[async_trait]
impl QuoteProvider for RestQuoteProvider {
    /// # Summary
    /// 获取国际金价腿。
    ///
    /// # Logic
    /// 1. 依次尝试 metalpriceapi、goldapi、exchangerate-api。
    /// 2. 任一源成功即返回；单源失败记 warn 后尝试下一个。
    /// 3. 全部失败返回 `Exhausted`。
    ///
    /// # Returns
    /// 成功返回报价腿，失败返回 MarketError。
    async fn fetch_gold_usd(&self) -> Result<QuoteTick, MarketError> {
        match self.gold_from_metalpriceapi().await {
            Ok(tick) => return Ok(tick),
            Err(e) => warn!("metalpriceapi gold quote failed: {}", e),
        }
        match self.gold_from_goldapi().await {
            Ok(tick) => return Ok(tick),
            Err(e) => warn!("goldapi gold quote failed: {}", e),
        }
        match self.gold_from_exchangerate().await {
            Ok(tick) => return Ok(tick),
            Err(e) => warn!("exchangerate gold quote failed: {}", e),
        }
        Err(MarketError::Exhausted)
    }

    /// # Summary
    /// 获取美元兑韩元汇率腿。
    ///
    /// # Logic
    /// 1. 依次尝试 exchangerate-api、open.er-api。
    /// 2. 免费源不提供涨跌幅，change24h 固定为 0。
    /// 3. 全部失败返回 `Exhausted`。
    ///
    /// # Returns
    /// 成功返回报价腿，失败返回 MarketError。
    async fn fetch_usd_krw(&self) -> Result<QuoteTick, MarketError> {
        match self
            .currency_rate("https://api.exchangerate-api.com/v4/latest/USD", "KRW")
            .await
        {
            Ok(rate) => {
                return Ok(QuoteTick {
                    value: rate,
                    change24h: 0.0,
                });
            }
            Err(e) => warn!("exchangerate fx quote failed: {}", e),
        }
        match self
            .currency_rate("https://open.er-api.com/v6/latest/USD", "KRW")
            .await
        {
            Ok(rate) => {
                return Ok(QuoteTick {
                    value: rate,
                    change24h: 0.0,
                });
            }
            Err(e) => warn!("er-api fx quote failed: {}", e),
        }
        Err(MarketError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_response_lookup() {
        let json = r#"{"rates": {"USD": 0.000377, "KRW": 1385.2}}"#;
        let parsed: CurrencyRatesResponse = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.rate("KRW"), Some(1385.2));
        assert_eq!(parsed.rate("JPY"), None);

        // XAU 基准报价取倒数后应回到 USD/oz 量级
        let per_oz = 1.0 / parsed.rate("USD").unwrap();
        assert!(per_oz > 2000.0 && per_oz < 3500.0);
    }

    #[test]
    fn test_goldapi_response_tolerates_missing_chp() {
        let json = r#"{"price": 2651.4}"#;
        let parsed: GoldApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.price, Some(2651.4));
        assert!(parsed.chp.is_none());
    }
}
