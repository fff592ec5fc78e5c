use crate::core::input_error::InputValueError;
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Dry,
    Wet,
    Damp,
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Weather::Dry => write!(f, "Dry"),
            Weather::Wet => write!(f, "Wet"),
            Weather::Damp => write!(f, "Damp"),
        }
    }
}

/// RaceConditions describe the weather package a race is run under. The fields
/// are fixed at construction, a changed forecast means a new instance.
#[derive(Debug, Clone)]
pub struct RaceConditions {
    name: String,
    weather: Weather,
    air_temperature: f64,
    track_temperature: f64,
    humidity: f64,
}

impl RaceConditions {
    /// Humidity is a fraction and must lie within [0.0, 1.0].
    pub fn new(
        name: &str,
        weather: Weather,
        air_temperature: f64,
        track_temperature: f64,
        humidity: f64,
    ) -> Result<RaceConditions, InputValueError> {
        if !(0.0..=1.0).contains(&humidity) {
            return Err(InputValueError::HumidityOutOfRange(humidity));
        }

        Ok(RaceConditions {
            name: name.to_owned(),
            weather,
            air_temperature,
            track_temperature,
            humidity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weather(&self) -> Weather {
        self.weather
    }

    pub fn air_temperature(&self) -> f64 {
        self.air_temperature
    }

    pub fn track_temperature(&self) -> f64 {
        self.track_temperature
    }

    pub fn humidity(&self) -> f64 {
        self.humidity
    }
}

impl fmt::Display for RaceConditions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} (Air: {:.0}°C, Track: {:.0}°C)",
            self.name, self.air_temperature, self.track_temperature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humidity_bounds_are_inclusive() {
        assert!(RaceConditions::new("Dry", Weather::Dry, 25.0, 35.0, 0.0).is_ok());
        assert!(RaceConditions::new("Humid", Weather::Dry, 25.0, 35.0, 1.0).is_ok());
    }

    #[test]
    fn out_of_range_humidity_is_rejected() {
        let too_low = RaceConditions::new("Dry", Weather::Dry, 25.0, 35.0, -0.1);
        assert_eq!(too_low.unwrap_err(), InputValueError::HumidityOutOfRange(-0.1));

        let too_high = RaceConditions::new("Wet", Weather::Wet, 15.0, 18.0, 1.1);
        assert_eq!(too_high.unwrap_err(), InputValueError::HumidityOutOfRange(1.1));
    }
}
