use xplm::data::borrowed::DataRef;
use xplm::data::{DataRead, ReadOnly};

use windpressure_core::{Error, Result, WeatherSample, WeatherSource};

const WIND_DIRECTION: &str = "sim/weather/wind_direction_degt";
const WIND_SPEED: &str = "sim/weather/wind_speed_kt";
const QNH: &str = "sim/weather/barometer_sealevel_inhg";

/// Handles to the weather datarefs shown on the panel.
pub struct WeatherRefs {
    wind_direction: DataRef<f32, ReadOnly>, // degrees true, at the aircraft
    wind_speed: DataRef<f32, ReadOnly>,     // knots
    qnh: DataRef<f32, ReadOnly>,            // inHg, sea level
}

impl WeatherRefs {
    pub fn find() -> Result<Self> {
        Ok(WeatherRefs {
            wind_direction: find_f32(WIND_DIRECTION)?,
            wind_speed: find_f32(WIND_SPEED)?,
            qnh: find_f32(QNH)?,
        })
    }
}

fn find_f32(name: &'static str) -> Result<DataRef<f32, ReadOnly>> {
    DataRef::find(name).map_err(|e| Error::data_ref(name, format!("{:?}", e)))
}

impl WeatherSource for WeatherRefs {
    fn sample(&self) -> WeatherSample {
        WeatherSample {
            wind_direction_degt: self.wind_direction.get(),
            wind_speed_kt: self.wind_speed.get(),
            qnh_inhg: self.qnh.get(),
        }
    }
}
