use crate::core::car::RaceCar;
use crate::core::conditions::RaceConditions;
use crate::core::track::RaceTrack;
use crate::pre::catalog::Catalog;
use anyhow::Context;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;

/// ScenarioPars names the catalog entries and presets one race is set up
/// from. Components are referenced by name and resolved against the catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioPars {
    pub engine: String,
    pub tyres: String,
    pub aero_kit: String,
    pub car_weight: f64,
    pub fuel_tank_capacity: f64,
    pub track: String,
    pub conditions: String,
}

/// read_scenario reads the JSON file and decodes the JSON string into the
/// scenario parameter struct.
pub fn read_scenario(filepath: &Path) -> anyhow::Result<ScenarioPars> {
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open scenario file {}!",
            filepath.display()
        ))?;
    let pars = serde_json::from_reader(&fh).context(format!(
        "Failed to parse scenario file {}!",
        filepath.display()
    ))?;
    Ok(pars)
}

/// build_from_scenario resolves the named components against the catalog and
/// constructs the race setup. Every selection must be present, a missing or
/// unknown name fails with an error naming the offending component.
pub fn build_from_scenario(
    scenario: &ScenarioPars,
    catalog: &Catalog,
) -> anyhow::Result<(RaceCar, RaceTrack, RaceConditions)> {
    let engine = catalog
        .engine_by_name(&scenario.engine)
        .with_context(|| format!("Unknown engine '{}' in scenario!", scenario.engine))?;
    let tyres = catalog
        .tyres_by_compound(&scenario.tyres)
        .with_context(|| format!("Unknown tyre compound '{}' in scenario!", scenario.tyres))?;
    let aero_kit = catalog
        .aero_kit_by_name(&scenario.aero_kit)
        .with_context(|| format!("Unknown aero kit '{}' in scenario!", scenario.aero_kit))?;
    let track = catalog
        .track_by_name(&scenario.track)
        .with_context(|| format!("Unknown track '{}' in scenario!", scenario.track))?
        .clone();
    let conditions = catalog
        .conditions_by_name(&scenario.conditions)
        .with_context(|| format!("Unknown race conditions '{}' in scenario!", scenario.conditions))?
        .clone();

    let car = RaceCar::new(
        engine,
        tyres,
        aero_kit,
        scenario.car_weight,
        scenario.fuel_tank_capacity,
    )?;

    Ok((car, track, conditions))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scenario() -> ScenarioPars {
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

    #[test]
    fn valid_scenario_builds_a_race_setup() {
        let catalog = Catalog::default_assets();
        let (car, track, conditions) =
            build_from_scenario(&test_scenario(), &catalog).expect("Scenario must resolve!");

        assert_eq!(car.engine().name, "Standard V6");
        assert_eq!(track.name, "Silverstone");
        assert_eq!(conditions.name(), "Dry");
    }

    #[test]
    fn missing_component_is_reported_by_name() {
        let catalog = Catalog::default_assets();
        let mut scenario = test_scenario();
        scenario.aero_kit = "Anti-Gravity Kit".to_owned();

        let error = build_from_scenario(&scenario, &catalog).unwrap_err();
        assert!(error.to_string().contains("Anti-Gravity Kit"));
    }

    #[test]
    fn off_list_presets_fail_construction() {
        let catalog = Catalog::default_assets();
        let mut scenario = test_scenario();
        scenario.car_weight = 1234.0;

        assert!(build_from_scenario(&scenario, &catalog).is_err());
    }
}
