use serde::Deserialize;
use std::fmt;

/// Optimal working window of a tyre compound. The bounds are taken as given,
/// min_temp may exceed max_temp.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct TemperatureRange {
    pub min_temp: f64,
    pub max_temp: f64,
}

impl fmt::Display for TemperatureRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} - {} °C)", self.min_temp, self.max_temp)
    }
}

/// * `compound` - Compound name, e.g. Soft Compound
/// * `grip_level` - Base grip on an integer scale
/// * `wear_rate` - Wear fraction added per lap on a standard track
/// * `optimal_temp_range` - (°C) Working window of the compound
#[derive(Debug, Deserialize, Clone)]
pub struct Tyres {
    pub compound: String,
    pub grip_level: i32,
    pub wear_rate: f64,
    pub optimal_temp_range: TemperatureRange,
}

impl Tyres {
    pub fn new(
        compound: &str,
        grip_level: i32,
        wear_rate: f64,
        min_optimal_temp: f64,
        max_optimal_temp: f64,
    ) -> Tyres {
        Tyres {
            compound: compound.to_owned(),
            grip_level,
            wear_rate,
            optimal_temp_range: TemperatureRange {
                min_temp: min_optimal_temp,
                max_temp: max_optimal_temp,
            },
        }
    }
}

impl fmt::Display for Tyres {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Tyres{{compound='{}', gripLevel={}, wearRate={:.2}, optimalTempRange={}}}",
            self.compound, self.grip_level, self.wear_rate, self.optimal_temp_range
        )
    }
}
