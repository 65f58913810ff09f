//! Fixtures shared by the unit tests.

use serde_json::{Value, json};

use crate::model::RawForecastResponse;

/// 2024-05-06 00:00:00 UTC, a Monday.
pub const MONDAY_MIDNIGHT_UTC: i64 = 1_714_953_600;

const DAY: i64 = 86_400;
const HOUR: i64 = 3_600;

pub fn sample_json() -> Value {
    json!({
        "location": { "name": "Moscow", "region": "Moscow City", "tz_id": "Europe/Moscow" },
        "current": {
            "temp_c": 20.5,
            "is_day": 1,
            "condition": {
                "text": "Partly cloudy",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png",
                "code": 1003
            }
        },
        "forecast": {
            "forecastday": [
                day_json(MONDAY_MIDNIGHT_UTC, 11.6, 21.5, "113"),
                day_json(MONDAY_MIDNIGHT_UTC + DAY, 9.2, 18.4, "176"),
                day_json(MONDAY_MIDNIGHT_UTC + 2 * DAY, -2.5, 7.49, "332"),
            ]
        }
    })
}

fn day_json(date_epoch: i64, min: f64, max: f64, code: &str) -> Value {
    json!({
        "date": "ignored",
        "date_epoch": date_epoch,
        "day": {
            "mintemp_c": min,
            "maxtemp_c": max,
            "avgtemp_c": (min + max) / 2.0,
            "condition": {
                "text": "Sunny",
                "icon": format!("//cdn.weatherapi.com/weather/64x64/day/{code}.png"),
                "code": 1000
            }
        },
        "hour": [
            hour_json(date_epoch, 12.4),
            hour_json(date_epoch + HOUR, 11.5),
            hour_json(date_epoch + 14 * HOUR + 5 * 60, 20.0),
        ]
    })
}

fn hour_json(time_epoch: i64, temp: f64) -> Value {
    json!({
        "time_epoch": time_epoch,
        "time": "ignored",
        "temp_c": temp,
        "condition": {
            "text": "Clear",
            "icon": "//cdn.weatherapi.com/weather/64x64/night/113.png",
            "code": 1000
        }
    })
}

pub fn sample_raw() -> RawForecastResponse {
    serde_json::from_value(sample_json()).expect("sample fixture must deserialize")
}
