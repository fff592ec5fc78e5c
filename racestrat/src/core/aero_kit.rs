use serde::Deserialize;
use std::fmt;

/// * `kit_name` - Kit name, e.g. Low-Drag Kit
/// * `drag_coefficient` - Aerodynamic drag coefficient
/// * `downforce_value` - (N) Downforce generated at reference speed
/// * `top_speed` - (km/h) Top speed contribution of the kit
/// * `fuel_efficiency` - (km/l) Fuel efficiency contribution of the kit
/// * `cornering_ability` - Cornering ability on a 1-10 scale
#[derive(Debug, Deserialize, Clone)]
pub struct AerodynamicKit {
    pub kit_name: String,
    pub drag_coefficient: f64,
    pub downforce_value: i32,
    pub top_speed: f64,
    pub fuel_efficiency: f64,
    pub cornering_ability: i32,
}

impl fmt::Display for AerodynamicKit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kit_name)
    }
}
