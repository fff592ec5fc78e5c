use serde::Deserialize;
use std::fmt;

/// * `name` - Engine name, e.g. Turbocharged V8
/// * `power_rating` - (HP) Peak power output
/// * `fuel_efficiency` - (km/l) Fuel efficiency under race load
/// * `reliability` - Reliability factor within [0.0, 1.0]
#[derive(Debug, Deserialize, Clone)]
pub struct Engine {
    pub name: String,
    pub power_rating: u32,
    pub fuel_efficiency: f64,
    pub reliability: f64,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Engine{{name='{}', powerRating={} HP, fuelEfficiency={:.1} km/l, reliability={:.0}%}}",
            self.name,
            self.power_rating,
            self.fuel_efficiency,
            self.reliability * 100.0
        )
    }
}
