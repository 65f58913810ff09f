use std::fmt;

use forecast_core::WeatherSnapshot;

pub fn loading() -> &'static str {
    "Loading forecast..."
}

pub fn error(message: &str) -> String {
    format!("Error: {message}")
}

/// Content view: header, today's hours, then one line per day.
pub struct SnapshotView<'a>(pub &'a WeatherSnapshot);

impl fmt::Display for SnapshotView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;

        writeln!(f, "{}", s.city)?;
        writeln!(f, "{}°  {}", s.current_temperature, s.condition_description)?;
        writeln!(f, "H:{}°  L:{}°", s.high_temperature, s.low_temperature)?;

        if !s.hourly.is_empty() {
            writeln!(f)?;
            let row: Vec<String> = s
                .hourly
                .iter()
                .map(|h| format!("{} {}°", h.local_time_label, h.temperature))
                .collect();
            writeln!(f, "{}", row.join("  "))?;
        }

        writeln!(f)?;
        for day in &s.daily {
            writeln!(f, "{:<4} {:>4}° .. {:>3}°", day.day_label, day.low, day.high)?;
        }

        Ok(())
    }
}
