use crate::{Config, WeatherRecord, error::FetchError, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod weatherapi;

/// Source of current conditions. One call is one outbound request, never retried.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, location: &str) -> Result<WeatherRecord, FetchError>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Arc<P> {
    async fn current(&self, location: &str) -> Result<WeatherRecord, FetchError> {
        (**self).current(location).await
    }
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn current(&self, location: &str) -> Result<WeatherRecord, FetchError> {
        (**self).current(location).await
    }
}

/// Construct the weatherapi.com provider from resolved configuration.
///
/// A missing key is not an error here: the request still goes out and the
/// provider's rejection surfaces through the normal failure path.
pub fn provider_from_config(config: &Config) -> WeatherApiProvider {
    let api_key = config.api_key().unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!(
            "no API key configured; hint: run `weather-widget configure` or set WEATHER_API_KEY"
        );
    }

    WeatherApiProvider::new(api_key.to_owned()).with_base_url(config.base_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_uses_configured_base_url() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: Some("http://127.0.0.1:9/v1/".into()),
        };

        let provider = provider_from_config(&cfg);
        let url = provider.current_url();

        assert_eq!(url, "http://127.0.0.1:9/v1/current.json");
    }

    #[test]
    fn provider_from_config_tolerates_missing_key() {
        let provider = provider_from_config(&Config::default());
        assert_eq!(provider.current_url(), "http://api.weatherapi.com/v1/current.json");
    }

    #[tokio::test]
    async fn boxed_provider_delegates() {
        #[derive(Debug)]
        struct Fixed;

        #[async_trait]
        impl WeatherProvider for Fixed {
            async fn current(&self, location: &str) -> Result<WeatherRecord, FetchError> {
                Ok(WeatherRecord::celsius(1.0, "Clear", location))
            }
        }

        let boxed: Box<dyn WeatherProvider> = Box::new(Fixed);
        let record = boxed.current("Oslo").await.expect("fixed provider never fails");
        assert_eq!(record.location, "Oslo");
    }
}
