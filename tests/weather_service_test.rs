/// Integration tests for the weather lookup flow
///
/// Runs the service over the real moka cache and the real OpenWeather
/// client pointed at a mockito server.
mod common;

use std::sync::Arc;

use common::{
    client_for, madrid_body, madrid_report, service_with, setup_test_logging, StaticKey,
    StubProvider, WEATHER_PATH,
};
use mockito::{Matcher, Server};
use weather_gateway::{cache_key, MokaWeatherCache, WeatherCache, WeatherError};

#[tokio::test]
async fn test_miss_fetches_and_caches() {
    setup_test_logging();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", WEATHER_PATH)
        .match_query(Matcher::UrlEncoded("q".into(), "Madrid".into()))
        .with_status(200)
        .with_body(madrid_body())
        .expect(1)
        .create_async()
        .await;

    let cache = Arc::new(MokaWeatherCache::new());
    let service = service_with(
        cache.clone(),
        Arc::new(client_for(&server.url())),
        StaticKey::some(),
    );

    let report = service.get_weather("Madrid").await.expect("lookup failed");
    assert_eq!(report, madrid_report());

    let cached = cache.get("weather:madrid").await;
    assert_eq!(cached, Some(madrid_report()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_repeat_lookup_is_served_from_cache() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", WEATHER_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(madrid_body())
        .expect(1)
        .create_async()
        .await;

    let service = service_with(
        Arc::new(MokaWeatherCache::new()),
        Arc::new(client_for(&server.url())),
        StaticKey::some(),
    );

    let first = service.get_weather("Madrid").await.expect("first lookup");
    let second = service.get_weather("Madrid").await.expect("second lookup");

    assert_eq!(first, second);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_city_case_shares_one_entry() {
    let provider = StubProvider::returning(Ok(madrid_report()));
    let cache = Arc::new(MokaWeatherCache::new());
    let service = service_with(cache.clone(), provider.clone(), StaticKey::some());

    service.get_weather("Madrid").await.expect("first lookup");
    service.get_weather("MADRID").await.expect("second lookup");
    service.get_weather("madrid").await.expect("third lookup");

    assert_eq!(provider.calls(), 1);
    assert_eq!(cache_key("MaDrId"), "weather:madrid");
}

#[tokio::test]
async fn test_cache_hit_needs_no_credential() {
    let cache = Arc::new(MokaWeatherCache::new());
    cache.insert(&cache_key("Madrid"), madrid_report()).await;

    let provider = StubProvider::returning(Err(WeatherError::UpstreamUnavailable(
        "should not be called".to_string(),
    )));
    let service = service_with(cache, provider.clone(), StaticKey::none());

    let report = service.get_weather("Madrid").await.expect("cache hit");
    assert_eq!(report, madrid_report());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_missing_credential_is_configuration_error() {
    let provider = StubProvider::returning(Ok(madrid_report()));
    let service = service_with(
        Arc::new(MokaWeatherCache::new()),
        provider.clone(),
        StaticKey::none(),
    );

    let err = service.get_weather("Madrid").await.unwrap_err();

    assert!(matches!(err, WeatherError::Configuration(_)));
    assert_eq!(err.status_code(), 500);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_upstream_failure_is_not_cached() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", WEATHER_PATH)
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"cod":"404","message":"city not found"}"#)
        .create_async()
        .await;

    let cache = Arc::new(MokaWeatherCache::new());
    let service = service_with(
        cache.clone(),
        Arc::new(client_for(&server.url())),
        StaticKey::some(),
    );

    let err = service.get_weather("Atlantis").await.unwrap_err();
    assert!(matches!(err, WeatherError::NotFound(_)));

    assert!(cache.get("weather:atlantis").await.is_none());
}
