//! Current-weather lookup for the dashboard widget.
//!
//! Client-side (hydrate): a real OpenWeatherMap call via `gloo-net`.
//! Server-side (SSR): no request; the fallback reading renders until hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (missing key, transport, status, decode) is logged and
//! replaced by `Weather::fallback`. There is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use serde::Deserialize;

use crate::state::notifications::{NewNotification, Priority};

pub const WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_CITY: &str = "Algiers";

/// Temperature at which chilled goods need extra care in transit.
pub const COLD_CHAIN_ALERT_C: f64 = 30.0;

/// Build-time weather settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub city: String,
}

impl WeatherConfig {
    /// Read `DAIRY_WEATHER_API_KEY` / `DAIRY_WEATHER_CITY` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("DAIRY_WEATHER_API_KEY"), option_env!("DAIRY_WEATHER_CITY"))
    }

    pub fn from_values(api_key: Option<&str>, city: Option<&str>) -> Self {
        Self {
            api_key: api_key.map(str::trim).filter(|k| !k.is_empty()).map(str::to_owned),
            city: city
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_CITY)
                .to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Weather {
    pub city: String,
    pub temperature_c: f64,
    pub humidity: u8,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
    /// `true` when this is the stand-in reading rather than live data.
    pub is_fallback: bool,
}

impl Weather {
    pub fn fallback(city: &str) -> Self {
        Self {
            city: city.to_owned(),
            temperature_c: 22.0,
            humidity: 60,
            description: "partly cloudy".to_owned(),
            icon: "02d".to_owned(),
            wind_speed: 3.5,
            is_fallback: true,
        }
    }

    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }
}

#[derive(Debug, Deserialize)]
struct OwmResponse {
    name: String,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
    #[serde(default)]
    wind: Option<OwmWind>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

/// Raw query pairs; `gloo_net` percent-encodes them when building the request.
#[cfg(any(test, feature = "hydrate"))]
fn weather_query<'a>(city: &'a str, api_key: &'a str) -> [(&'static str, &'a str); 3] {
    [("q", city), ("units", "metric"), ("appid", api_key)]
}

#[cfg(any(test, feature = "hydrate"))]
fn weather_failed_message(status: u16) -> String {
    format!("weather request failed: {status}")
}

/// Decode an OpenWeatherMap current-weather body.
///
/// # Errors
///
/// Returns an error string when the body is not the expected JSON shape.
pub fn parse_weather(body: &str) -> Result<Weather, String> {
    let raw: OwmResponse = serde_json::from_str(body).map_err(|e| e.to_string())?;
    let condition = raw.weather.into_iter().next();
    Ok(Weather {
        city: raw.name,
        temperature_c: raw.main.temp,
        humidity: raw.main.humidity,
        description: condition.as_ref().map_or_else(String::new, |c| c.description.clone()),
        icon: condition.map_or_else(|| "01d".to_owned(), |c| c.icon),
        wind_speed: raw.wind.map_or(0.0, |w| w.speed),
        is_fallback: false,
    })
}

/// Fetch live weather, falling back to the stand-in reading on any failure.
pub async fn fetch_weather(config: &WeatherConfig) -> Weather {
    match try_fetch_weather(config).await {
        Ok(weather) => weather,
        Err(e) => {
            leptos::logging::error!("weather fetch failed, using fallback: {e}");
            Weather::fallback(&config.city)
        }
    }
}

async fn try_fetch_weather(config: &WeatherConfig) -> Result<Weather, String> {
    let Some(api_key) = config.api_key.as_deref() else {
        return Err("DAIRY_WEATHER_API_KEY not set".to_owned());
    };
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(WEATHER_ENDPOINT)
            .query(weather_query(&config.city, api_key))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(weather_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        parse_weather(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_key;
        Err("not available on server".to_owned())
    }
}

/// Warning for the delivery team when it is hot enough to stress the cold chain.
pub fn cold_chain_advisory(weather: &Weather) -> Option<NewNotification> {
    (weather.temperature_c >= COLD_CHAIN_ALERT_C).then(|| {
        NewNotification::warning(
            "Cold-chain alert",
            format!(
                "{:.0} °C in {}. Check refrigerated vans before dispatch.",
                weather.temperature_c, weather.city
            ),
        )
        .priority(Priority::High)
        .persistent()
        .action("View deliveries", "/deliveries")
    })
}
