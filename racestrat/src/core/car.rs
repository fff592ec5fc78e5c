use crate::core::aero_kit::AerodynamicKit;
use crate::core::engine::Engine;
use crate::core::input_error::InputValueError;
use crate::core::tyres::Tyres;
use std::fmt;
use std::rc::Rc;

/// Preset values a car may be configured with. Weight and tank size come from
/// a closed list, not an open numeric range.
pub const ALLOWED_WEIGHTS: [f64; 3] = [900.0, 1000.0, 1100.0];
pub const ALLOWED_FUEL_CAPACITIES: [f64; 3] = [60.0, 70.0, 80.0];

/// Categorical acceleration behavior derived from the power-to-weight ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelerationProfile {
    Aggressive,
    Balanced,
    Conservative,
}

impl fmt::Display for AccelerationProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AccelerationProfile::Aggressive => write!(f, "Aggressive"),
            AccelerationProfile::Balanced => write!(f, "Balanced"),
            AccelerationProfile::Conservative => write!(f, "Conservative"),
        }
    }
}

/// RaceCar combines one engine, one tyre set and one aero kit with the chosen
/// weight and tank size. The performance metrics are derived once at
/// construction and never change afterwards. Only the race state (fuel and
/// tyre wear) is mutable, and only through the clamped setters.
#[derive(Debug, Clone)]
pub struct RaceCar {
    engine: Rc<Engine>,
    tyres: Rc<Tyres>,
    aero_kit: Rc<AerodynamicKit>,
    car_weight: f64,         // (kg)
    fuel_tank_capacity: f64, // (l)

    // race state
    current_fuel: f64,      // (l)
    current_tyre_wear: f64, // fraction within [0, 1], 1.0 is fully worn

    // performance metrics, fixed at construction
    top_speed: f64,                     // (km/h)
    acceleration_time_0_to_100: f64,    // (s)
    acceleration_profile: AccelerationProfile,
    handling_rating: i32,               // 1-10 scale, see DESIGN.md
    cornering_ability_rating: i32,      // 1-100 scale
    base_fuel_consumption_per_lap: f64, // (l) on a standard lap
}

impl RaceCar {
    /// The weight and tank presets are checked before anything is derived, a
    /// car with an off-list configuration is never constructed.
    pub fn new(
        engine: Rc<Engine>,
        tyres: Rc<Tyres>,
        aero_kit: Rc<AerodynamicKit>,
        car_weight: f64,
        fuel_tank_capacity: f64,
    ) -> Result<RaceCar, InputValueError> {
        if !ALLOWED_WEIGHTS.contains(&car_weight) {
            return Err(InputValueError::InvalidCarWeight(car_weight));
        }
        if !ALLOWED_FUEL_CAPACITIES.contains(&fuel_tank_capacity) {
            return Err(InputValueError::InvalidFuelCapacity(fuel_tank_capacity));
        }

        let power = engine.power_rating as f64;

        // The aero kit dominates the top speed, the engine adds a small bonus.
        let top_speed = aero_kit.top_speed + power / 100.0;
        let acceleration_time_0_to_100 = car_weight / power * 5.0;

        let power_to_weight = power / car_weight;
        let acceleration_profile = if power_to_weight > 0.45 {
            AccelerationProfile::Aggressive
        } else if power_to_weight > 0.25 {
            AccelerationProfile::Balanced
        } else {
            AccelerationProfile::Conservative
        };

        // Handling and cornering both start from the kit's cornering ability,
        // adjusted by how far the tyre grip sits from the neutral level 5.
        let grip_offset = (tyres.grip_level - 5) as f64;
        let handling_rating =
            (aero_kit.cornering_ability as f64 * (1.0 + grip_offset / 50.0)).round() as i32;
        let cornering_ability_rating = (aero_kit.cornering_ability as f64 * 10.0
            * (1.0 + grip_offset / 20.0))
            .clamp(1.0, 100.0)
            .round() as i32;

        let combined_efficiency = (engine.fuel_efficiency + aero_kit.fuel_efficiency) / 2.0;
        let base_fuel_consumption_per_lap = 30.0 / combined_efficiency;

        Ok(RaceCar {
            engine,
            tyres,
            aero_kit,
            car_weight,
            fuel_tank_capacity,
            current_fuel: fuel_tank_capacity,
            current_tyre_wear: 0.0,
            top_speed,
            acceleration_time_0_to_100,
            acceleration_profile,
            handling_rating,
            cornering_ability_rating,
            base_fuel_consumption_per_lap,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn tyres(&self) -> &Tyres {
        &self.tyres
    }

    pub fn aero_kit(&self) -> &AerodynamicKit {
        &self.aero_kit
    }

    pub fn car_weight(&self) -> f64 {
        self.car_weight
    }

    pub fn fuel_tank_capacity(&self) -> f64 {
        self.fuel_tank_capacity
    }

    pub fn current_fuel(&self) -> f64 {
        self.current_fuel
    }

    pub fn current_tyre_wear(&self) -> f64 {
        self.current_tyre_wear
    }

    pub fn top_speed(&self) -> f64 {
        self.top_speed
    }

    pub fn acceleration_time_0_to_100(&self) -> f64 {
        self.acceleration_time_0_to_100
    }

    pub fn acceleration_profile(&self) -> AccelerationProfile {
        self.acceleration_profile
    }

    pub fn handling_rating(&self) -> i32 {
        self.handling_rating
    }

    pub fn cornering_ability_rating(&self) -> i32 {
        self.cornering_ability_rating
    }

    pub fn base_fuel_consumption_per_lap(&self) -> f64 {
        self.base_fuel_consumption_per_lap
    }

    /// set_current_fuel stores the given fuel level, the level never drops
    /// below zero.
    pub fn set_current_fuel(&mut self, current_fuel: f64) {
        self.current_fuel = current_fuel.max(0.0);
    }

    /// set_current_tyre_wear stores the given wear fraction clamped to [0, 1].
    pub fn set_current_tyre_wear(&mut self, current_tyre_wear: f64) {
        self.current_tyre_wear = current_tyre_wear.clamp(0.0, 1.0);
    }

    /// reset_race_state refills the tank and mounts fresh tyres.
    pub fn reset_race_state(&mut self) {
        let fuel_tank_capacity = self.fuel_tank_capacity;
        self.set_current_fuel(fuel_tank_capacity);
        self.set_current_tyre_wear(0.0);
    }
}

impl fmt::Display for RaceCar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "RaceCar configured with:")?;
        writeln!(f, "  {}", self.engine)?;
        writeln!(f, "  {}", self.tyres)?;
        writeln!(f, "  {}", self.aero_kit)?;
        writeln!(f, "  Car Weight: {:.1} kg", self.car_weight)?;
        writeln!(f, "  Fuel Tank Capacity: {:.1} L", self.fuel_tank_capacity)?;
        writeln!(f, "--- Current Status ---")?;
        writeln!(f, "  Current Fuel: {:.2} L", self.current_fuel)?;
        writeln!(f, "  Current Tyre Wear: {:.2}%", self.current_tyre_wear * 100.0)?;
        writeln!(f, "--- Performance Metrics ---")?;
        writeln!(f, "  Top Speed: {:.1} km/h", self.top_speed)?;
        writeln!(f, "  0-100 km/h: {:.2} s", self.acceleration_time_0_to_100)?;
        writeln!(f, "  Acceleration Profile: {}", self.acceleration_profile)?;
        writeln!(f, "  Handling Rating (1-10): {}/10", self.handling_rating)?;
        writeln!(
            f,
            "  Cornering Ability (1-100): {}/100",
            self.cornering_ability_rating
        )?;
        write!(
            f,
            "  Base Fuel Consumption (per 'standard' lap): {:.2} L",
            self.base_fuel_consumption_per_lap
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_engine(power_rating: u32) -> Rc<Engine> {
        Rc::new(Engine {
            name: "Test Unit".to_owned(),
            power_rating,
            fuel_efficiency: 2.0,
            reliability: 0.95,
        })
    }

    fn test_tyres(grip_level: i32) -> Rc<Tyres> {
        Rc::new(Tyres::new("Test Compound", grip_level, 0.02, 80.0, 100.0))
    }

    fn test_kit() -> Rc<AerodynamicKit> {
        Rc::new(AerodynamicKit {
            kit_name: "Test Kit".to_owned(),
            drag_coefficient: 0.30,
            downforce_value: 200,
            top_speed: 300.0,
            fuel_efficiency: 2.0,
            cornering_ability: 8,
        })
    }

    #[test]
    fn construction_succeeds_for_all_preset_pairs() {
        for &weight in ALLOWED_WEIGHTS.iter() {
            for &capacity in ALLOWED_FUEL_CAPACITIES.iter() {
                let car = RaceCar::new(test_engine(500), test_tyres(85), test_kit(), weight, capacity)
                    .expect("Preset pair must be accepted!");
                assert_relative_eq!(car.current_fuel(), capacity);
                assert_relative_eq!(car.current_tyre_wear(), 0.0);
            }
        }
    }

    #[test]
    fn off_list_weight_is_rejected() {
        let result = RaceCar::new(test_engine(500), test_tyres(85), test_kit(), 950.0, 80.0);
        assert_eq!(result.unwrap_err(), InputValueError::InvalidCarWeight(950.0));
    }

    #[test]
    fn off_list_fuel_capacity_is_rejected() {
        let result = RaceCar::new(test_engine(500), test_tyres(85), test_kit(), 900.0, 100.0);
        assert_eq!(
            result.unwrap_err(),
            InputValueError::InvalidFuelCapacity(100.0)
        );
    }

    #[test]
    fn derived_metrics_match_the_component_mix() {
        let car = RaceCar::new(test_engine(500), test_tyres(85), test_kit(), 900.0, 80.0).unwrap();

        assert_relative_eq!(car.top_speed(), 305.0);
        assert_relative_eq!(car.acceleration_time_0_to_100(), 9.0);
        assert_eq!(car.acceleration_profile(), AccelerationProfile::Aggressive);
        assert_relative_eq!(car.base_fuel_consumption_per_lap(), 15.0);
        // grip 85 pushes cornering to the cap
        assert_eq!(car.cornering_ability_rating(), 100);
    }

    #[test]
    fn handling_rating_is_not_clamped_to_ten() {
        // grip 85 with cornering 8 yields 8 * 2.6 = 20.8, rounded to 21
        let car = RaceCar::new(test_engine(500), test_tyres(85), test_kit(), 900.0, 80.0).unwrap();
        assert_eq!(car.handling_rating(), 21);
    }

    #[test]
    fn profile_boundaries_fall_to_the_lower_category() {
        // exactly 0.45 is not Aggressive, exactly 0.25 is not Balanced
        let balanced = RaceCar::new(test_engine(450), test_tyres(85), test_kit(), 1000.0, 80.0).unwrap();
        assert_eq!(balanced.acceleration_profile(), AccelerationProfile::Balanced);

        let conservative =
            RaceCar::new(test_engine(250), test_tyres(85), test_kit(), 1000.0, 80.0).unwrap();
        assert_eq!(
            conservative.acceleration_profile(),
            AccelerationProfile::Conservative
        );
    }

    #[test]
    fn fuel_setter_clamps_at_zero_and_is_idempotent() {
        let mut car = RaceCar::new(test_engine(500), test_tyres(85), test_kit(), 900.0, 80.0).unwrap();

        car.set_current_fuel(-5.0);
        assert_relative_eq!(car.current_fuel(), 0.0);
        car.set_current_fuel(-5.0);
        assert_relative_eq!(car.current_fuel(), 0.0);

        car.set_current_fuel(42.5);
        assert_relative_eq!(car.current_fuel(), 42.5);
    }

    #[test]
    fn tyre_wear_setter_clamps_to_unit_interval() {
        let mut car = RaceCar::new(test_engine(500), test_tyres(85), test_kit(), 900.0, 80.0).unwrap();

        car.set_current_tyre_wear(1.5);
        assert_relative_eq!(car.current_tyre_wear(), 1.0);
        car.set_current_tyre_wear(-0.2);
        assert_relative_eq!(car.current_tyre_wear(), 0.0);
        car.set_current_tyre_wear(0.37);
        assert_relative_eq!(car.current_tyre_wear(), 0.37);
    }
}
