use crate::core::car::RaceCar;
use crate::core::conditions::{RaceConditions, Weather};
use crate::core::input_error::InputValueError;
use crate::core::track::RaceTrack;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pit once tyre wear reaches 80%.
pub const MAX_TYRE_WEAR_THRESHOLD: f64 = 0.80;

/// Why a pit stop was taken. Fuel outranks tyres in the combined case only in
/// naming, the stop itself always refills and re-tyres.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PitStopReason {
    Fuel,
    Tyres,
    FuelAndTyres,
}

impl fmt::Display for PitStopReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PitStopReason::Fuel => write!(f, "Fuel"),
            PitStopReason::Tyres => write!(f, "Tyres"),
            PitStopReason::FuelAndTyres => write!(f, "Fuel & Tyres"),
        }
    }
}

/// RaceStrategyOptimiser advances the race state of a single car around one
/// track under one set of conditions, and decides when the car has to pit.
///
/// The optimiser borrows the car exclusively for the duration of a race
/// attempt. It is the only writer of the car's fuel and wear fields, and it
/// writes them through the clamped setters only. Presentation code observes
/// per-lap snapshots instead of the live fields.
#[derive(Debug)]
pub struct RaceStrategyOptimiser<'a> {
    car: &'a mut RaceCar,
    track: &'a RaceTrack,
    conditions: &'a RaceConditions,
}

impl<'a> RaceStrategyOptimiser<'a> {
    pub fn new(
        car: &'a mut RaceCar,
        track: &'a RaceTrack,
        conditions: &'a RaceConditions,
    ) -> RaceStrategyOptimiser<'a> {
        RaceStrategyOptimiser {
            car,
            track,
            conditions,
        }
    }

    pub fn car(&self) -> &RaceCar {
        self.car
    }

    pub fn track(&self) -> &RaceTrack {
        self.track
    }

    pub fn conditions(&self) -> &RaceConditions {
        self.conditions
    }

    /// A wet track carries less rubber temperature into the compound, so wear
    /// drops below the dry baseline.
    fn weather_wear_factor(&self) -> f64 {
        match self.conditions.weather() {
            Weather::Wet => 0.75,
            Weather::Damp => 0.90,
            Weather::Dry => 1.0,
        }
    }

    /// Cold air is denser and burns more fuel, hot air slightly less. Exactly
    /// 10 °C and exactly 30 °C count as the neutral band.
    fn temperature_fuel_factor(&self) -> f64 {
        let air_temperature = self.conditions.air_temperature();
        if air_temperature < 10.0 {
            1.05
        } else if air_temperature > 30.0 {
            0.98
        } else {
            1.0
        }
    }

    /// simulate_lap advances fuel and tyre state by one lap. The clamped
    /// setters keep fuel at or above zero and wear within [0, 1] no matter
    /// how extreme the component mix is.
    pub fn simulate_lap(&mut self) {
        let fuel_used_this_lap = self.car.base_fuel_consumption_per_lap()
            * self.track.fuel_consumption_factor
            * self.temperature_fuel_factor();
        let fuel_after_lap = self.car.current_fuel() - fuel_used_this_lap;
        self.car.set_current_fuel(fuel_after_lap);

        let tyre_wear_this_lap =
            self.car.tyres().wear_rate * self.track.tyre_wear_factor * self.weather_wear_factor();
        let wear_after_lap = self.car.current_tyre_wear() + tyre_wear_this_lap;
        self.car.set_current_tyre_wear(wear_after_lap);
    }

    /// check_and_perform_pit_stop decides after the given completed lap
    /// whether the car pits before the next one, and executes the stop in the
    /// same call (tank refilled, fresh tyres mounted).
    ///
    /// A lap number beyond the race distance is rejected. On the final lap no
    /// decision is made and `None` is returned. When no threshold is hit the
    /// car state is left untouched.
    pub fn check_and_perform_pit_stop(
        &mut self,
        current_lap_number: u32,
        total_laps: u32,
    ) -> Result<Option<PitStopReason>, InputValueError> {
        if current_lap_number > total_laps {
            return Err(InputValueError::LapOutOfRange {
                current_lap: current_lap_number,
                total_laps,
            });
        }
        if current_lap_number == total_laps {
            return Ok(None);
        }

        // same temperature-adjusted consumption as in simulate_lap
        let fuel_needed_for_next_lap = self.car.base_fuel_consumption_per_lap()
            * self.track.fuel_consumption_factor
            * self.temperature_fuel_factor();

        let pit_for_fuel = self.car.current_fuel() < fuel_needed_for_next_lap;
        let pit_for_tyres = self.car.current_tyre_wear() >= MAX_TYRE_WEAR_THRESHOLD;

        let reason = match (pit_for_fuel, pit_for_tyres) {
            (true, true) => Some(PitStopReason::FuelAndTyres),
            (true, false) => Some(PitStopReason::Fuel),
            (false, true) => Some(PitStopReason::Tyres),
            (false, false) => None,
        };

        if reason.is_some() {
            self.car.reset_race_state();
        }

        Ok(reason)
    }

    /// plan_pit_stops simulates the whole race up front and returns the lap
    /// numbers after which the car would pit, in ascending order.
    ///
    /// The car is reset to full fuel and fresh tyres before the planning run,
    /// and ends up in whatever state the simulated race leaves it in. Plan on
    /// a cloned car if the live state matters.
    ///
    /// Note: the inline fuel threshold here uses the raw track-adjusted
    /// consumption, while check_and_perform_pit_stop also applies the air
    /// temperature factor. The two policies are intentionally kept separate,
    /// see DESIGN.md.
    pub fn plan_pit_stops(&mut self) -> Vec<u32> {
        let mut pit_stop_laps: Vec<u32> = Vec::new();
        let total_laps = self.track.number_of_laps;

        if total_laps == 0 {
            return pit_stop_laps;
        }

        self.car.reset_race_state();

        for current_lap_number in 1..=total_laps {
            self.simulate_lap();

            // no pit stop decision after the final lap
            if current_lap_number < total_laps {
                let fuel_needed_for_next_lap = self.car.base_fuel_consumption_per_lap()
                    * self.track.fuel_consumption_factor;

                let pit_for_fuel = self.car.current_fuel() < fuel_needed_for_next_lap;
                let pit_for_tyres = self.car.current_tyre_wear() >= MAX_TYRE_WEAR_THRESHOLD;

                if pit_for_fuel || pit_for_tyres {
                    pit_stop_laps.push(current_lap_number);
                    self.car.reset_race_state();
                }
            }
        }

        pit_stop_laps
    }
}
