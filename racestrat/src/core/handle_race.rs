use crate::core::car::RaceCar;
use crate::core::conditions::RaceConditions;
use crate::core::strategy::RaceStrategyOptimiser;
use crate::core::track::RaceTrack;
use crate::interfaces::driver_interface::LapSnapshot;
use crate::post::race_report::{PitStopRecord, RaceReport};
use anyhow::Context;
use flume::Sender;
use std::thread::sleep;
use std::time::Duration;

/// handle_race runs the full per-lap loop for one car on one track, and
/// returns the results for post-processing.
///
/// The loop is strictly sequential: one simulate/decide pair per lap, in
/// increasing lap order. When a sender is inserted, one snapshot per lap is
/// emitted for a presentation layer (plus a final message carrying the
/// report), and the loop is paced by `lap_time_ms` so the progression stays
/// visible. A dropped receiver ends the run with an error between laps.
pub fn handle_race(
    car: &mut RaceCar,
    track: &RaceTrack,
    conditions: &RaceConditions,
    tx: Option<&Sender<LapSnapshot>>,
    lap_time_ms: u64,
    print_events: bool,
) -> anyhow::Result<RaceReport> {
    let total_laps = track.number_of_laps;

    let mut pit_stops: Vec<PitStopRecord> = Vec::new();
    let mut lap_fuel: Vec<f64> = Vec::with_capacity(total_laps as usize);
    let mut lap_tyre_wear: Vec<f64> = Vec::with_capacity(total_laps as usize);

    if print_events {
        println!(
            "INFO: Simulation starting under {} conditions",
            conditions.name()
        );
    }

    let mut optimiser = RaceStrategyOptimiser::new(car, track, conditions);

    for current_lap_number in 1..=total_laps {
        optimiser.simulate_lap();

        if print_events {
            println!(
                "INFO: Lap {} completed. Fuel: {:.2} l, Tyres: {:.2}% wear",
                current_lap_number,
                optimiser.car().current_fuel(),
                optimiser.car().current_tyre_wear() * 100.0
            );
        }

        let pit_reason = optimiser.check_and_perform_pit_stop(current_lap_number, total_laps)?;
        let pit_stop = pit_reason.map(|reason| PitStopRecord {
            lap: current_lap_number,
            reason,
        });

        if let Some(pit_stop) = pit_stop {
            pit_stops.push(pit_stop);
            if print_events {
                println!(
                    "INFO: Pit stop taken at end of lap {}. Reason: {}",
                    pit_stop.lap, pit_stop.reason
                );
            }
        }

        lap_fuel.push(optimiser.car().current_fuel());
        lap_tyre_wear.push(optimiser.car().current_tyre_wear());

        if let Some(tx) = tx {
            let snapshot = LapSnapshot {
                lap_no: current_lap_number,
                fuel_remaining: optimiser.car().current_fuel(),
                tyre_wear: optimiser.car().current_tyre_wear(),
                progress: current_lap_number as f64 / total_laps as f64,
                pit_stop,
                final_report: None,
            };
            tx.send(snapshot)
                .context("Failed to send lap snapshot to the presentation channel!")?;

            if lap_time_ms > 0 {
                sleep(Duration::from_millis(lap_time_ms));
            }
        }
    }

    let report = RaceReport {
        track_name: track.name.to_owned(),
        conditions_name: conditions.name().to_owned(),
        tot_no_laps: total_laps,
        pit_stops,
        lap_fuel,
        lap_tyre_wear,
        final_fuel: optimiser.car().current_fuel(),
        final_tyre_wear: optimiser.car().current_tyre_wear(),
    };

    // after the loop finishes, send the final report once
    if let Some(tx) = tx {
        let final_msg = LapSnapshot {
            final_report: Some(report.clone()),
            ..LapSnapshot::default()
        };
        tx.send(final_msg)
            .context("Failed to send the final race report to the presentation channel!")?;
    }

    Ok(report)
}
