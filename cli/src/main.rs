use clap::Parser;
use racestrat::core::handle_race::handle_race;
use racestrat::core::strategy::RaceStrategyOptimiser;
use racestrat::pre::catalog::Catalog;
use racestrat::pre::read_scenario::{build_from_scenario, read_scenario, ScenarioPars};
use racestrat::pre::sim_opts::SimOpts;
use std::thread;
use std::time::Instant;

fn default_scenario() -> ScenarioPars {
    ScenarioPars {
        engine: "Standard V6".to_owned(),
        tyres: "Medium Compound".to_owned(),
        aero_kit: "Standard Kit".to_owned(),
        car_weight: 1000.0,
        fuel_tank_capacity: 70.0,
        track: "Silverstone".to_owned(),
        conditions: "Dry".to_owned(),
    }
}

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get simulation options from the command line arguments
    let sim_opts: SimOpts = SimOpts::parse();

    // load the component catalog
    let catalog = if let Some(assets_dir) = &sim_opts.assets_dir {
        println!("INFO: Seeding component catalog from {:?}", assets_dir);
        Catalog::from_assets_dir(assets_dir)?
    } else {
        Catalog::default_assets()
    };

    // get the race scenario
    let scenario = if let Some(parfile_path) = &sim_opts.parfile_path {
        println!("INFO: Reading race scenario from {:?}", parfile_path);
        read_scenario(parfile_path)?
    } else {
        println!("INFO: No scenario file provided, using the default setup");
        default_scenario()
    };

    let (mut car, track, conditions) = build_from_scenario(&scenario, &catalog)?;

    // print race details
    println!(
        "INFO: Simulating {} laps of {} under {} conditions",
        track.number_of_laps, track.name, conditions
    );
    if sim_opts.debug {
        println!("{}", car);
    }

    // pit stop plan preview, run on a disposable copy since planning resets
    // the race state
    if !sim_opts.skip_plan {
        let mut plan_car = car.clone();
        let mut planner = RaceStrategyOptimiser::new(&mut plan_car, &track, &conditions);
        let planned_stops = planner.plan_pit_stops();
        if planned_stops.is_empty() {
            println!("INFO: Planned pit stops: none");
        } else {
            println!("INFO: Planned pit stops after laps: {:?}", planned_stops);
        }
    }

    // EXECUTION -----------------------------------------------------------------------------------
    let t_start = Instant::now();

    let race_report = if !sim_opts.live {
        // NON-LIVE CASE - run the whole race in place
        handle_race(&mut car, &track, &conditions, None, 0, sim_opts.debug)?
    } else {
        // LIVE CASE - race loop on a worker thread, snapshots presented here
        let (tx, rx) = flume::unbounded();

        let track_thread = track.clone();
        let conditions_thread = conditions.clone();
        let lap_time_ms = sim_opts.lap_time_ms;

        let worker = thread::spawn(move || {
            let mut car = car;
            handle_race(
                &mut car,
                &track_thread,
                &conditions_thread,
                Some(&tx),
                lap_time_ms,
                false,
            )
        });

        for snapshot in rx.iter() {
            if snapshot.final_report.is_some() {
                break;
            }
            let pit_note = snapshot
                .pit_stop
                .map(|pit_stop| format!(" | PIT ({})", pit_stop.reason))
                .unwrap_or_default();
            println!(
                "INFO: Lap {:3}/{} | fuel {:6.2} l | tyres {:5.1}% worn | {:3.0}% done{}",
                snapshot.lap_no,
                track.number_of_laps,
                snapshot.fuel_remaining,
                snapshot.tyre_wear * 100.0,
                snapshot.progress * 100.0,
                pit_note
            );
        }

        worker.join().expect("Race worker thread panicked!")?
    };

    println!("INFO: Execution time: {}ms", t_start.elapsed().as_millis());

    // POST-PROCESSING -----------------------------------------------------------------------------
    race_report.print_lap_table();

    match race_report.write_lap_table_to_file(None) {
        Ok(path) => println!("INFO: Lap report written to {}", path),
        Err(error) => eprintln!("WARNING: Could not write the lap report: {}", error),
    }

    Ok(())
}
