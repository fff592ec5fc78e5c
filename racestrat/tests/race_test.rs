use approx::assert_relative_eq;
use racestrat::core::aero_kit::AerodynamicKit;
use racestrat::core::car::RaceCar;
use racestrat::core::conditions::{RaceConditions, Weather};
use racestrat::core::engine::Engine;
use racestrat::core::handle_race::handle_race;
use racestrat::core::strategy::PitStopReason;
use racestrat::core::track::RaceTrack;
use racestrat::core::tyres::Tyres;
use std::rc::Rc;

fn reference_car() -> RaceCar {
    let engine = Rc::new(Engine {
        name: "Test Unit".to_owned(),
        power_rating: 500,
        fuel_efficiency: 2.0,
        reliability: 0.95,
    });
    let tyres = Rc::new(Tyres::new("Test Compound", 85, 0.02, 80.0, 100.0));
    let aero_kit = Rc::new(AerodynamicKit {
        kit_name: "Test Kit".to_owned(),
        drag_coefficient: 0.30,
        downforce_value: 200,
        top_speed: 300.0,
        fuel_efficiency: 2.0,
        cornering_ability: 8,
    });
    RaceCar::new(engine, tyres, aero_kit, 900.0, 80.0)
        .expect("Reference car must be constructible!")
}

fn reference_track() -> RaceTrack {
    RaceTrack {
        name: "Test Ring".to_owned(),
        length_km: 4.5,
        number_of_laps: 10,
        tyre_wear_factor: 1.0,
        fuel_consumption_factor: 1.0,
    }
}

fn dry_conditions() -> RaceConditions {
    RaceConditions::new("Dry", Weather::Dry, 25.0, 35.0, 0.3)
        .expect("Reference conditions must be constructible!")
}

#[test]
fn full_race_produces_a_consistent_report() {
    let mut car = reference_car();
    let track = reference_track();
    let dry = dry_conditions();

    let report = handle_race(&mut car, &track, &dry, None, 0, false)
        .expect("Race must run to completion!");

    // 80 l at 15 l per lap forces one fuel stop after lap five
    assert_eq!(report.tot_no_laps, 10);
    assert_eq!(report.pit_stops.len(), 1);
    assert_eq!(report.pit_stops[0].lap, 5);
    assert_eq!(report.pit_stops[0].reason, PitStopReason::Fuel);

    assert_eq!(report.lap_fuel.len(), 10);
    assert_eq!(report.lap_tyre_wear.len(), 10);
    // the trace shows the refilled tank on the pit lap
    assert_relative_eq!(report.lap_fuel[4], 80.0, epsilon = 1e-12);
    assert_relative_eq!(report.final_fuel, 5.0, epsilon = 1e-12);
    assert_relative_eq!(report.final_tyre_wear, 0.1, epsilon = 1e-12);

    // the report matches the car state left behind
    assert_relative_eq!(car.current_fuel(), 5.0, epsilon = 1e-12);
    assert_relative_eq!(car.current_tyre_wear(), 0.1, epsilon = 1e-12);
}

#[test]
fn race_loop_emits_one_snapshot_per_lap_plus_the_final_report() {
    let mut car = reference_car();
    let track = reference_track();
    let dry = dry_conditions();

    let (tx, rx) = flume::unbounded();
    let report = handle_race(&mut car, &track, &dry, Some(&tx), 0, false)
        .expect("Race must run to completion!");
    drop(tx);

    let snapshots: Vec<_> = rx.try_iter().collect();
    assert_eq!(snapshots.len(), 11);

    for (i, snapshot) in snapshots.iter().take(10).enumerate() {
        assert_eq!(snapshot.lap_no, i as u32 + 1);
        assert!(snapshot.final_report.is_none());
    }

    // lap five carries the pit stop and the refilled tank
    let pit_snapshot = &snapshots[4];
    let pit_stop = pit_snapshot.pit_stop.expect("Lap five must pit!");
    assert_eq!(pit_stop.reason, PitStopReason::Fuel);
    assert_relative_eq!(pit_snapshot.fuel_remaining, 80.0, epsilon = 1e-12);

    assert_relative_eq!(snapshots[9].progress, 1.0, epsilon = 1e-12);

    // the last message carries the same report the call returned
    let final_report = snapshots[10]
        .final_report
        .as_ref()
        .expect("Final message must carry the report!");
    assert_eq!(final_report.pit_stops, report.pit_stops);
    assert_relative_eq!(final_report.final_fuel, report.final_fuel);
}

#[test]
fn zero_lap_race_reports_nothing_but_finishes() {
    let mut car = reference_car();
    let track = RaceTrack {
        number_of_laps: 0,
        ..reference_track()
    };
    let dry = dry_conditions();

    let report = handle_race(&mut car, &track, &dry, None, 0, false)
        .expect("Race must run to completion!");

    assert!(report.pit_stops.is_empty());
    assert!(report.lap_fuel.is_empty());
    assert_relative_eq!(report.final_fuel, 80.0);
}
