use serde::Deserialize;
use std::fmt;

/// * `name` - Track name
/// * `length_km` - (km) Length of one lap
/// * `number_of_laps` - Race distance in laps
/// * `tyre_wear_factor` - Tyre wear multiplier relative to a standard lap
/// * `fuel_consumption_factor` - Fuel consumption multiplier relative to a
/// standard lap
#[derive(Debug, Deserialize, Clone)]
pub struct RaceTrack {
    pub name: String,
    pub length_km: f64,
    pub number_of_laps: u32,
    pub tyre_wear_factor: f64,
    pub fuel_consumption_factor: f64,
}

impl fmt::Display for RaceTrack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "RaceTrack{{name='{}', length_km={:.3} km, numberOfLaps={}, tyreWearFactor={:.2}, fuelConsumptionFactor={:.2}}}",
            self.name,
            self.length_km,
            self.number_of_laps,
            self.tyre_wear_factor,
            self.fuel_consumption_factor
        )
    }
}
