//! End-to-end lookup tests against a mock Open-Meteo server.
//!
//! These drive the full geocode -> forecast -> season -> render pipeline
//! through `App::lookup` with both endpoints pointed at wiremock.

use seasoncast::{App, SeasonCastConfig, SeasonCastError, Service, WeatherApiClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server_uri: &str) -> SeasonCastConfig {
    SeasonCastConfig {
        geocoding_base_url: server_uri.to_string(),
        forecast_base_url: server_uri.to_string(),
        timeout_seconds: 5,
        default_place: "London".to_string(),
    }
}

fn test_app(server_uri: &str) -> App {
    let client = WeatherApiClient::new(test_config(server_uri)).unwrap();
    App::new(client, "London".to_string())
}

fn london_geocoding_body() -> serde_json::Value {
    json!({
        "results": [{
            "latitude": 51.5,
            "longitude": -0.12,
            "name": "London",
            "country": "United Kingdom",
            "timezone": "Europe/London"
        }]
    })
}

fn london_forecast_body() -> serde_json::Value {
    json!({
        "current_weather": {
            "temperature": 15.4,
            "windspeed": 10.0,
            "weathercode": 3,
            "time": "2024-03-15T12:00"
        }
    })
}

#[tokio::test]
async fn test_full_lookup_london() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "London"))
        .and(query_param("count", "1"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_geocoding_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "51.5"))
        .and(query_param("longitude", "-0.12"))
        .and(query_param("current_weather", "true"))
        .and(query_param("timezone", "Europe/London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_forecast_body()))
        .mount(&server)
        .await;

    let model = test_app(&server.uri()).lookup("London").await.unwrap();

    assert_eq!(model.place, "London, United Kingdom");
    assert_eq!(model.meta, "Time zone: Europe/London");
    assert_eq!(model.temperature, "15°C");
    assert_eq!(model.condition, "Overcast");
    assert_eq!(model.wind, "10.0 km/h (2.8 m/s)");
    // March observation at latitude >= 0 -> northern table -> spring
    assert_eq!(model.season_label, "Spring");
    assert_eq!(model.theme, "season-spring");
}

#[tokio::test]
async fn test_southern_hemisphere_season() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "latitude": -33.87,
                "longitude": 151.21,
                "name": "Sydney",
                "country": "Australia",
                "timezone": "Australia/Sydney"
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": {
                "temperature": 24.2,
                "windspeed": 18.5,
                "weathercode": 1,
                "time": "2024-03-15T22:00"
            }
        })))
        .mount(&server)
        .await;

    let model = test_app(&server.uri()).lookup("Sydney").await.unwrap();

    // Same March month lands in autumn below the equator
    assert_eq!(model.season_label, "Autumn");
    assert_eq!(model.condition, "Mainly clear");
}

#[tokio::test]
async fn test_place_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let err = test_app(&server.uri()).lookup("Atlantis").await.unwrap_err();

    assert!(matches!(err, SeasonCastError::NotFound { .. }));
    assert_eq!(
        err.user_message(),
        "Place not found. Try another city or spelling."
    );
}

#[tokio::test]
async fn test_missing_results_field_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "generationtime_ms": 0.5 })))
        .mount(&server)
        .await;

    let err = test_app(&server.uri()).lookup("Atlantis").await.unwrap_err();
    assert!(matches!(err, SeasonCastError::NotFound { .. }));
}

#[tokio::test]
async fn test_geocoding_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = test_app(&server.uri()).lookup("London").await.unwrap_err();

    assert!(matches!(
        err,
        SeasonCastError::ServiceUnavailable {
            service: Service::Geocoding,
            ..
        }
    ));
    assert_eq!(err.user_message(), "Could not reach the geocoding service.");
}

#[tokio::test]
async fn test_forecast_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_geocoding_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_app(&server.uri()).lookup("London").await.unwrap_err();

    assert!(matches!(
        err,
        SeasonCastError::ServiceUnavailable {
            service: Service::Forecast,
            ..
        }
    ));
    assert_eq!(err.user_message(), "Could not reach the weather service.");
}

#[tokio::test]
async fn test_forecast_without_current_weather_is_no_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_geocoding_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "latitude": 51.5, "longitude": -0.12 })),
        )
        .mount(&server)
        .await;

    let err = test_app(&server.uri()).lookup("London").await.unwrap_err();

    assert!(matches!(err, SeasonCastError::NoData));
    assert_eq!(
        err.user_message(),
        "No weather data available for this location right now."
    );
}

#[tokio::test]
async fn test_first_geocoding_match_wins() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {
                    "latitude": 51.5,
                    "longitude": -0.12,
                    "name": "London",
                    "country": "United Kingdom",
                    "timezone": "Europe/London"
                },
                {
                    "latitude": 42.98,
                    "longitude": -81.24,
                    "name": "London",
                    "country": "Canada",
                    "timezone": "America/Toronto"
                }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "51.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_forecast_body()))
        .mount(&server)
        .await;

    let model = test_app(&server.uri()).lookup("London").await.unwrap();
    assert_eq!(model.place, "London, United Kingdom");
}

#[tokio::test]
async fn test_query_is_url_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Rio de Janeiro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "latitude": -22.9,
                "longitude": -43.2,
                "name": "Rio de Janeiro",
                "country": "Brazil",
                "timezone": "America/Sao_Paulo"
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("timezone", "America/Sao_Paulo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_weather": {
                "temperature": 30.0,
                "windspeed": 5.0,
                "weathercode": 0,
                "time": "2024-01-10T15:00"
            }
        })))
        .mount(&server)
        .await;

    let model = test_app(&server.uri())
        .lookup("Rio de Janeiro")
        .await
        .unwrap();

    assert_eq!(model.place, "Rio de Janeiro, Brazil");
    assert_eq!(model.condition, "Clear sky");
    // January below the equator is summer
    assert_eq!(model.season_label, "Summer");
}
