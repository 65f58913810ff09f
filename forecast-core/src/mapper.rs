//! Wire response → [`WeatherSnapshot`].
//!
//! Temperatures are rounded half away from zero (`20.5 → 21`, `-2.5 → -3`).
//! Timestamps are rendered in the requested time zone; [`ForecastMapper::to_snapshot`]
//! uses the system one.

use std::fmt::Display;

use chrono::{DateTime, Local, Locale, TimeZone};

use crate::{
    error::MappingError,
    model::{DailyPoint, HourlyPoint, RawDay, RawForecastResponse, WeatherSnapshot},
};

/// Locale used for weekday labels unless configured otherwise.
pub const DEFAULT_LOCALE: Locale = Locale::ru_RU;

#[derive(Debug, Clone, Copy)]
pub struct ForecastMapper {
    locale: Locale,
}

impl Default for ForecastMapper {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl ForecastMapper {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn to_snapshot(&self, raw: &RawForecastResponse) -> Result<WeatherSnapshot, MappingError> {
        self.to_snapshot_in(raw, &Local)
    }

    /// Same as [`to_snapshot`](Self::to_snapshot) with an explicit time zone.
    ///
    /// An empty day list is rejected up front, so a snapshot is either complete
    /// or not produced at all.
    pub fn to_snapshot_in<Tz>(
        &self,
        raw: &RawForecastResponse,
        tz: &Tz,
    ) -> Result<WeatherSnapshot, MappingError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let today = raw.days().first().ok_or(MappingError::NoForecastDays)?;

        let hourly = today
            .hour
            .iter()
            .map(|hour| {
                Ok::<_, MappingError>(HourlyPoint {
                    local_time_label: local_time(hour.time_epoch, tz)?.format("%H:%M").to_string(),
                    temperature: round_temp(hour.temp_c),
                    icon_url: icon_url(&hour.condition.icon),
                })
            })
            .collect::<Result<Vec<_>, MappingError>>()?;

        let daily = raw
            .days()
            .iter()
            .map(|day| self.daily_point(day, tz))
            .collect::<Result<Vec<_>, MappingError>>()?;

        Ok(WeatherSnapshot {
            city: raw.location.name.clone(),
            current_temperature: round_temp(raw.current.temp_c),
            condition_description: raw.current.condition.text.clone(),
            high_temperature: round_temp(today.day.maxtemp_c),
            low_temperature: round_temp(today.day.mintemp_c),
            hourly,
            daily,
        })
    }

    fn daily_point<Tz>(&self, day: &RawDay, tz: &Tz) -> Result<DailyPoint, MappingError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let weekday = local_time(day.date_epoch, tz)?
            .format_localized("%a", self.locale)
            .to_string();

        Ok(DailyPoint {
            day_label: capitalize_first(&weekday),
            low: round_temp(day.day.mintemp_c),
            high: round_temp(day.day.maxtemp_c),
            icon_url: icon_url(&day.day.condition.icon),
        })
    }
}

fn local_time<Tz: TimeZone>(epoch_seconds: i64, tz: &Tz) -> Result<DateTime<Tz>, MappingError> {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|utc| utc.with_timezone(tz))
        .ok_or(MappingError::InvalidTimestamp(epoch_seconds))
}

pub fn round_temp(celsius: f64) -> i32 {
    // `as` saturates; NaN becomes 0.
    celsius.round() as i32
}

/// The API hands out scheme-relative icon paths (`//cdn...`).
pub fn icon_url(path: &str) -> String {
    format!("https:{path}")
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MONDAY_MIDNIGHT_UTC, sample_raw};
    use chrono::{FixedOffset, Utc};

    fn utc_snapshot(locale: Locale) -> WeatherSnapshot {
        ForecastMapper::new(locale)
            .to_snapshot_in(&sample_raw(), &Utc)
            .expect("sample must map")
    }

    #[test]
    fn maps_current_conditions() {
        let snapshot = utc_snapshot(Locale::en_US);

        assert_eq!(snapshot.city, "Moscow");
        assert_eq!(snapshot.condition_description, "Partly cloudy");
        assert_eq!(snapshot.current_temperature, 21);
        assert_eq!(snapshot.high_temperature, 22);
        assert_eq!(snapshot.low_temperature, 12);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_temp(20.5), 21);
        assert_eq!(round_temp(20.49), 20);
        assert_eq!(round_temp(-2.5), -3);
        assert_eq!(round_temp(-0.4), 0);

        let snapshot = utc_snapshot(Locale::en_US);
        assert_eq!(snapshot.daily[2].low, -3);
        assert_eq!(snapshot.daily[2].high, 7);
        assert_eq!(snapshot.hourly[1].temperature, 12);
    }

    #[test]
    fn icon_urls_get_https_scheme() {
        assert_eq!(icon_url("//cdn.example/sun.png"), "https://cdn.example/sun.png");

        let snapshot = utc_snapshot(Locale::en_US);
        assert_eq!(
            snapshot.daily[1].icon_url,
            "https://cdn.weatherapi.com/weather/64x64/day/176.png"
        );
        assert!(snapshot.hourly.iter().all(|h| h.icon_url.starts_with("https://")));
    }

    #[test]
    fn list_lengths_follow_input() {
        let raw = sample_raw();
        let snapshot = utc_snapshot(Locale::en_US);

        assert_eq!(snapshot.hourly.len(), raw.days()[0].hour.len());
        assert_eq!(snapshot.daily.len(), raw.days().len());
    }

    #[test]
    fn hour_labels_are_zero_padded_24h() {
        let snapshot = utc_snapshot(Locale::en_US);
        let labels: Vec<_> = snapshot.hourly.iter().map(|h| h.local_time_label.as_str()).collect();

        assert_eq!(labels, ["00:00", "01:00", "14:05"]);
    }

    #[test]
    fn hour_labels_follow_time_zone() {
        let moscow = FixedOffset::east_opt(3 * 3600).expect("valid offset");
        let snapshot = ForecastMapper::default()
            .to_snapshot_in(&sample_raw(), &moscow)
            .expect("sample must map");

        assert_eq!(snapshot.hourly[0].local_time_label, "03:00");
        assert_eq!(snapshot.hourly[2].local_time_label, "17:05");
    }

    #[test]
    fn system_time_zone_label_matches_local_clock() {
        let epoch = Local
            .with_ymd_and_hms(2024, 7, 1, 14, 5, 0)
            .earliest()
            .expect("14:05 exists locally")
            .timestamp();

        let mut raw = sample_raw();
        raw.forecast.forecastday[0].hour[0].time_epoch = epoch;

        let snapshot = ForecastMapper::default().to_snapshot(&raw).expect("must map");
        assert_eq!(snapshot.hourly[0].local_time_label, "14:05");
    }

    #[test]
    fn english_day_labels() {
        let labels: Vec<_> = utc_snapshot(Locale::en_US)
            .daily
            .into_iter()
            .map(|d| d.day_label)
            .collect();

        assert_eq!(labels, ["Mon", "Tue", "Wed"]);
    }

    #[test]
    fn russian_day_labels_are_capitalized_cyrillic() {
        let snapshot = utc_snapshot(DEFAULT_LOCALE);

        for day in &snapshot.daily {
            let first = day.day_label.chars().next().expect("label is not empty");
            assert!(first.is_uppercase(), "{} is not capitalized", day.day_label);
            assert!(!first.is_ascii(), "{} is not localized", day.day_label);
        }
        assert_ne!(snapshot.daily[0].day_label, snapshot.daily[1].day_label);
    }

    #[test]
    fn capitalize_first_handles_multibyte() {
        assert_eq!(capitalize_first("пн"), "Пн");
        assert_eq!(capitalize_first("Mon"), "Mon");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn day_label_uses_local_date() {
        // Midnight UTC Monday is still Sunday evening in New York.
        let new_york = FixedOffset::west_opt(4 * 3600).expect("valid offset");
        let snapshot = ForecastMapper::new(Locale::en_US)
            .to_snapshot_in(&sample_raw(), &new_york)
            .expect("sample must map");

        assert_eq!(snapshot.daily[0].day_label, "Sun");
    }

    #[test]
    fn mapping_is_deterministic() {
        let raw = sample_raw();
        let mapper = ForecastMapper::default();

        assert_eq!(mapper.to_snapshot_in(&raw, &Utc), mapper.to_snapshot_in(&raw, &Utc));
    }

    #[test]
    fn empty_day_list_is_a_mapping_error() {
        let mut raw = sample_raw();
        raw.forecast.forecastday.clear();

        let err = ForecastMapper::default().to_snapshot(&raw).unwrap_err();
        assert_eq!(err, MappingError::NoForecastDays);
    }

    #[test]
    fn empty_hour_list_maps_to_empty_hourly() {
        let mut raw = sample_raw();
        raw.forecast.forecastday[0].hour.clear();

        let snapshot = ForecastMapper::default()
            .to_snapshot_in(&raw, &Utc)
            .expect("hours are optional");
        assert!(snapshot.hourly.is_empty());
        assert_eq!(snapshot.daily.len(), 3);
    }

    #[test]
    fn out_of_range_timestamp_is_rejected() {
        let mut raw = sample_raw();
        raw.forecast.forecastday[1].date_epoch = i64::MAX;

        let err = ForecastMapper::default().to_snapshot_in(&raw, &Utc).unwrap_err();
        assert_eq!(err, MappingError::InvalidTimestamp(i64::MAX));
    }

    #[test]
    fn monday_fixture_is_monday() {
        let date = DateTime::from_timestamp(MONDAY_MIDNIGHT_UTC, 0).expect("in range");
        assert_eq!(date.format("%Y-%m-%d %a").to_string(), "2024-05-06 Mon");
    }
}
