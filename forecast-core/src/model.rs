use serde::{Deserialize, Serialize};

// Wire shape of `GET /v1/forecast.json`. Only the fields the mapper reads are
// declared; everything else in the payload is ignored by serde.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawForecastResponse {
    pub location: RawLocation,
    pub current: RawCurrent,
    pub forecast: RawForecast,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLocation {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCurrent {
    pub temp_c: f64,
    pub condition: RawCondition,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCondition {
    pub text: String,
    /// Scheme-relative, e.g. `//cdn.weatherapi.com/weather/64x64/day/113.png`.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawForecast {
    /// Chronological, index 0 is today.
    pub forecastday: Vec<RawDay>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDay {
    pub date_epoch: i64,
    pub day: RawDayStats,
    pub hour: Vec<RawHour>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDayStats {
    pub mintemp_c: f64,
    pub maxtemp_c: f64,
    pub condition: RawCondition,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHour {
    pub time_epoch: i64,
    pub temp_c: f64,
    pub condition: RawHourCondition,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHourCondition {
    pub icon: String,
}

impl RawForecastResponse {
    pub fn days(&self) -> &[RawDay] {
        &self.forecast.forecastday
    }
}

/// One complete fetch result, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub current_temperature: i32,
    pub condition_description: String,
    pub high_temperature: i32,
    pub low_temperature: i32,
    /// Today's hours only.
    pub hourly: Vec<HourlyPoint>,
    /// One entry per forecast day, in order.
    pub daily: Vec<DailyPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyPoint {
    /// `HH:MM`, 24-hour clock.
    pub local_time_label: String,
    pub temperature: i32,
    pub icon_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    /// Abbreviated weekday name with the first letter upper-cased.
    pub day_label: String,
    pub low: i32,
    pub high: i32,
    pub icon_url: String,
}
