//! Weather values read from the simulator and the text shown for them.

/// Millibars per inch of mercury.
pub const INHG_TO_MB: f64 = 33.8637526;

/// One reading of the three weather data references.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeatherSample {
    /// Degrees true.
    pub wind_direction_degt: f32,
    /// Knots.
    pub wind_speed_kt: f32,
    /// Sea-level barometric pressure, inHg.
    pub qnh_inhg: f32,
}

/// Something the overlay can read current weather from.
pub trait WeatherSource {
    fn sample(&self) -> WeatherSample;
}

pub fn inhg_to_mb(inhg: f64) -> f64 {
    inhg * INHG_TO_MB
}

impl WeatherSample {
    /// `Wind: 270° 13kts`
    pub fn wind_line(&self) -> String {
        format!(
            "Wind: {:03}° {}kts",
            round_whole(self.wind_direction_degt.into()),
            round_whole(self.wind_speed_kt.into())
        )
    }

    /// `QNH: 29.92 InHg - 1013 mb`
    pub fn qnh_line(&self) -> String {
        let inhg = finite_or_zero(self.qnh_inhg.into());
        // millibars are truncated, not rounded
        let mb = inhg_to_mb(inhg).trunc() as i64;
        format!("QNH: {:.2} InHg - {} mb", inhg, mb)
    }
}

// Half-way values go away from zero.
fn round_whole(value: f64) -> i64 {
    finite_or_zero(value).round() as i64
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
