use super::*;

const SAMPLE: &str = r#"{
    "name": "Algiers",
    "main": { "temp": 31.4, "humidity": 48, "pressure": 1012 },
    "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
    "wind": { "speed": 4.1, "deg": 40 }
}"#;

#[test]
fn parse_weather_reads_core_fields() {
    let w = parse_weather(SAMPLE).unwrap();
    assert_eq!(w.city, "Algiers");
    assert!((w.temperature_c - 31.4).abs() < f64::EPSILON);
    assert_eq!(w.humidity, 48);
    assert_eq!(w.description, "clear sky");
    assert_eq!(w.icon, "01d");
    assert!((w.wind_speed - 4.1).abs() < f64::EPSILON);
    assert!(!w.is_fallback);
}

#[test]
fn parse_weather_tolerates_missing_optional_sections() {
    let w = parse_weather(r#"{"name":"Blida","main":{"temp":18.0,"humidity":70}}"#).unwrap();
    assert_eq!(w.description, "");
    assert_eq!(w.icon, "01d");
    assert_eq!(w.wind_speed, 0.0);
}

#[test]
fn parse_weather_rejects_bad_body() {
    assert!(parse_weather("<html>rate limited</html>").is_err());
    assert!(parse_weather(r#"{"cod":401,"message":"Invalid API key"}"#).is_err());
}

#[test]
fn query_passes_city_and_key_unescaped() {
    assert_eq!(
        weather_query("Tizi & Ouzou #2", "k123"),
        [("q", "Tizi & Ouzou #2"), ("units", "metric"), ("appid", "k123")]
    );
}

#[test]
fn query_keeps_non_ascii_city() {
    let [(_, city), ..] = weather_query("Béjaïa", "k");
    assert_eq!(city, "Béjaïa");
}

#[test]
fn failed_message_formats_status() {
    assert_eq!(weather_failed_message(401), "weather request failed: 401");
}

#[test]
fn config_defaults_and_trims() {
    let cfg = WeatherConfig::from_values(None, None);
    assert_eq!(cfg, WeatherConfig { api_key: None, city: DEFAULT_CITY.to_owned() });

    let cfg = WeatherConfig::from_values(Some("  "), Some(" Oran "));
    assert_eq!(cfg.api_key, None);
    assert_eq!(cfg.city, "Oran");

    let cfg = WeatherConfig::from_values(Some("abc"), None);
    assert_eq!(cfg.api_key.as_deref(), Some("abc"));
}

#[test]
fn fallback_is_marked() {
    let w = Weather::fallback("Tipaza");
    assert!(w.is_fallback);
    assert_eq!(w.city, "Tipaza");
    assert_eq!(w.icon_url(), "https://openweathermap.org/img/wn/02d@2x.png");
}

#[test]
fn cold_chain_advisory_only_when_hot() {
    let mut w = Weather::fallback("Algiers");
    assert!(cold_chain_advisory(&w).is_none());

    w.temperature_c = 30.0;
    let n = cold_chain_advisory(&w).unwrap();
    assert_eq!(n.priority, Priority::High);
    assert!(n.persistent);
    assert!(n.message.contains("30 °C in Algiers"));
    assert_eq!(n.action.unwrap().href, "/deliveries");
}

#[test]
fn repeated_hot_readings_publish_one_advisory() {
    use crate::state::notifications::NotificationStore;

    let mut w = Weather::fallback("Oran");
    w.temperature_c = 34.0;
    let mut store = NotificationStore::default();

    for visit in 0..3 {
        if let Some(advisory) = cold_chain_advisory(&w) {
            store.push_once(advisory, visit * 1_000);
        }
    }

    assert_eq!(store.panel().len(), 1);
    assert_eq!(store.unread_count(), 1);
}
