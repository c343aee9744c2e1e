//! Integration tests for WeatherProvider using wiremock.

use poiview_weather::{Coordinate, WeatherError, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> WeatherProvider {
    WeatherProvider::new(format!("{}/v1/forecast", server.uri()), None).unwrap()
}

#[tokio::test]
async fn test_fetch_weather_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "48.8566"))
        .and(query_param("longitude", "2.3522"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 48.86,
            "longitude": 2.35,
            "current_weather": {
                "temperature": 21.3,
                "windspeed": 12.0,
                "winddirection": 240,
                "weathercode": 1
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let report = provider
        .fetch_weather(&Coordinate::new(48.8566, 2.3522))
        .await
        .unwrap();

    assert_eq!(report.temperature_celsius, 21.3);
    assert_eq!(report.wind_speed_kmh, 12.0);
}

#[tokio::test]
async fn test_server_error_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    assert!(provider.fetch_weather(&Coordinate::new(0.0, 0.0)).await.is_none());
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider
        .try_fetch(&Coordinate::new(0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, WeatherError::Parse(_)));
    assert!(provider.fetch_weather(&Coordinate::new(0.0, 0.0)).await.is_none());
}

#[tokio::test]
async fn test_missing_current_weather_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": 0.0,
            "longitude": 0.0
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider
        .try_fetch(&Coordinate::new(0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, WeatherError::MissingCurrent));
}

#[tokio::test]
async fn test_repeated_calls_refetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "current_weather": {"temperature": 5.0, "windspeed": 3.5}
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let here = Coordinate::new(10.0, 20.0);
    assert!(provider.fetch_weather(&here).await.is_some());
    assert!(provider.fetch_weather(&here).await.is_some());
}

#[tokio::test]
async fn test_unreachable_host_yields_none() {
    // Nothing listens on port 9 of localhost in the test environment.
    let provider = WeatherProvider::new("http://127.0.0.1:9/v1/forecast", None).unwrap();
    assert!(provider.fetch_weather(&Coordinate::new(0.0, 0.0)).await.is_none());
}

#[test]
fn test_provider_keeps_base_url() {
    let provider =
        WeatherProvider::new("https://api.open-meteo.com/v1/forecast", None).unwrap();
    assert_eq!(provider.base_url(), "https://api.open-meteo.com/v1/forecast");
}
