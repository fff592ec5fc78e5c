use crate::core::aero_kit::AerodynamicKit;
use crate::core::conditions::{RaceConditions, Weather};
use crate::core::engine::Engine;
use crate::core::track::RaceTrack;
use crate::core::tyres::Tyres;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::Path;
use std::rc::Rc;

/// One row of tyres.csv. The temperature range is stored flat in the file.
#[derive(Debug, Deserialize, Clone)]
struct TyresRow {
    compound: String,
    grip_level: i32,
    wear_rate: f64,
    min_optimal_temp: f64,
    max_optimal_temp: f64,
}

/// One row of conditions.csv. Humidity is validated when the row is turned
/// into a RaceConditions record.
#[derive(Debug, Deserialize, Clone)]
struct ConditionsRow {
    name: String,
    weather: Weather,
    air_temperature: f64,
    track_temperature: f64,
    humidity: f64,
}

/// Catalog owns the immutable component tables the rest of the application
/// picks from. It is populated once at startup, afterwards the simulation
/// only reads from it. Component records shared into cars are handed out as
/// reference-counted clones.
#[derive(Debug)]
pub struct Catalog {
    engines: Vec<Rc<Engine>>,
    tyres: Vec<Rc<Tyres>>,
    aero_kits: Vec<Rc<AerodynamicKit>>,
    tracks: Vec<RaceTrack>,
    conditions: Vec<RaceConditions>,
}

impl Catalog {
    /// default_assets returns the built-in component tables.
    pub fn default_assets() -> Catalog {
        let engines = vec![
            Engine {
                name: "Standard V6".to_owned(),
                power_rating: 300,
                fuel_efficiency: 7.5,
                reliability: 0.95,
            },
            Engine {
                name: "Turbocharged V8".to_owned(),
                power_rating: 550,
                fuel_efficiency: 5.0,
                reliability: 0.88,
            },
            Engine {
                name: "EcoBoost I4".to_owned(),
                power_rating: 180,
                fuel_efficiency: 12.0,
                reliability: 0.99,
            },
        ];

        let tyres = vec![
            Tyres::new("Soft Compound", 95, 0.15, 80.0, 100.0),
            Tyres::new("Medium Compound", 80, 0.08, 90.0, 110.0),
            Tyres::new("Hard Compound", 65, 0.03, 100.0, 120.0),
        ];

        let aero_kits = vec![
            aero_kit("Standard Kit", 0.30, 200, 250.0, 12.0, 6),
            aero_kit("Downforce-Focused Kit", 0.35, 350, 220.0, 10.0, 9),
            aero_kit("Low-Drag Kit", 0.25, 150, 280.0, 14.0, 5),
            aero_kit("Adjustable Aero Kit", 0.31, 250, 250.0, 12.0, 8),
            aero_kit("Ground Effect Kit", 0.27, 400, 240.0, 12.0, 8),
            aero_kit("Drag Reduction System", 0.25, 200, 290.0, 13.0, 6),
            aero_kit("Wet Weather Kit", 0.32, 220, 230.0, 11.0, 7),
            aero_kit("Hybrid Kit", 0.29, 260, 260.0, 12.0, 7),
            aero_kit("Extreme Aero Kit", 0.40, 500, 200.0, 9.0, 10),
        ];

        let tracks = vec![
            RaceTrack {
                name: "Monaco".to_owned(),
                length_km: 3.337,
                number_of_laps: 78,
                tyre_wear_factor: 1.3,
                fuel_consumption_factor: 1.1,
            },
            RaceTrack {
                name: "Monza".to_owned(),
                length_km: 5.793,
                number_of_laps: 53,
                tyre_wear_factor: 0.8,
                fuel_consumption_factor: 0.9,
            },
            RaceTrack {
                name: "Silverstone".to_owned(),
                length_km: 5.891,
                number_of_laps: 52,
                tyre_wear_factor: 1.0,
                fuel_consumption_factor: 1.0,
            },
        ];

        let conditions = vec![
            RaceConditions::new("Dry", Weather::Dry, 25.0, 35.0, 0.30),
            RaceConditions::new("Wet", Weather::Wet, 15.0, 18.0, 0.95),
            RaceConditions::new("Damp", Weather::Damp, 20.0, 25.0, 0.70),
        ]
        .into_iter()
        .map(|conditions| conditions.expect("Builtin race conditions must be valid!"))
        .collect();

        Catalog {
            engines: engines.into_iter().map(Rc::new).collect(),
            tyres: tyres.into_iter().map(Rc::new).collect(),
            aero_kits: aero_kits.into_iter().map(Rc::new).collect(),
            tracks,
            conditions,
        }
    }

    /// from_assets_dir seeds the catalog from CSV files in the given
    /// directory (engines.csv, tyres.csv, aero_kits.csv, tracks.csv,
    /// conditions.csv). Tables without a file keep the builtin defaults.
    pub fn from_assets_dir(dir: &Path) -> anyhow::Result<Catalog> {
        let mut catalog = Catalog::default_assets();

        let engines_path = dir.join("engines.csv");
        if engines_path.is_file() {
            catalog.engines = read_csv_table::<Engine>(&engines_path)?
                .into_iter()
                .map(Rc::new)
                .collect();
        }

        let tyres_path = dir.join("tyres.csv");
        if tyres_path.is_file() {
            catalog.tyres = read_csv_table::<TyresRow>(&tyres_path)?
                .into_iter()
                .map(|row| {
                    Rc::new(Tyres::new(
                        &row.compound,
                        row.grip_level,
                        row.wear_rate,
                        row.min_optimal_temp,
                        row.max_optimal_temp,
                    ))
                })
                .collect();
        }

        let aero_kits_path = dir.join("aero_kits.csv");
        if aero_kits_path.is_file() {
            catalog.aero_kits = read_csv_table::<AerodynamicKit>(&aero_kits_path)?
                .into_iter()
                .map(Rc::new)
                .collect();
        }

        let tracks_path = dir.join("tracks.csv");
        if tracks_path.is_file() {
            catalog.tracks = read_csv_table::<RaceTrack>(&tracks_path)?;
        }

        let conditions_path = dir.join("conditions.csv");
        if conditions_path.is_file() {
            let mut conditions = Vec::new();
            for row in read_csv_table::<ConditionsRow>(&conditions_path)? {
                let record = RaceConditions::new(
                    &row.name,
                    row.weather,
                    row.air_temperature,
                    row.track_temperature,
                    row.humidity,
                )
                .context(format!(
                    "Invalid race conditions '{}' in {}!",
                    row.name,
                    conditions_path.display()
                ))?;
                conditions.push(record);
            }
            catalog.conditions = conditions;
        }

        Ok(catalog)
    }

    pub fn engines(&self) -> &[Rc<Engine>] {
        &self.engines
    }

    pub fn tyres(&self) -> &[Rc<Tyres>] {
        &self.tyres
    }

    pub fn aero_kits(&self) -> &[Rc<AerodynamicKit>] {
        &self.aero_kits
    }

    pub fn tracks(&self) -> &[RaceTrack] {
        &self.tracks
    }

    pub fn conditions(&self) -> &[RaceConditions] {
        &self.conditions
    }

    pub fn engine_by_name(&self, name: &str) -> Option<Rc<Engine>> {
        self.engines
            .iter()
            .find(|engine| engine.name == name)
            .cloned()
    }

    pub fn tyres_by_compound(&self, compound: &str) -> Option<Rc<Tyres>> {
        self.tyres
            .iter()
            .find(|tyres| tyres.compound == compound)
            .cloned()
    }

    pub fn aero_kit_by_name(&self, name: &str) -> Option<Rc<AerodynamicKit>> {
        self.aero_kits
            .iter()
            .find(|aero_kit| aero_kit.kit_name == name)
            .cloned()
    }

    pub fn track_by_name(&self, name: &str) -> Option<&RaceTrack> {
        self.tracks.iter().find(|track| track.name == name)
    }

    pub fn conditions_by_name(&self, name: &str) -> Option<&RaceConditions> {
        self.conditions
            .iter()
            .find(|conditions| conditions.name() == name)
    }
}

fn aero_kit(
    kit_name: &str,
    drag_coefficient: f64,
    downforce_value: i32,
    top_speed: f64,
    fuel_efficiency: f64,
    cornering_ability: i32,
) -> AerodynamicKit {
    AerodynamicKit {
        kit_name: kit_name.to_owned(),
        drag_coefficient,
        downforce_value,
        top_speed,
        fuel_efficiency,
        cornering_ability,
    }
}

/// read_csv_table reads one asset file and decodes every row into the given
/// record type.
fn read_csv_table<T: DeserializeOwned>(filepath: &Path) -> anyhow::Result<Vec<T>> {
    let fh = OpenOptions::new()
        .read(true)
        .open(filepath)
        .context(format!(
            "Failed to open asset file {}!",
            filepath.display()
        ))?;

    let mut csv_reader = csv::Reader::from_reader(&fh);
    let mut rows: Vec<T> = vec![];

    for result in csv_reader.deserialize() {
        let row: T = result.context(format!(
            "Failed to parse asset file {}!",
            filepath.display()
        ))?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_resolve_by_name() {
        let catalog = Catalog::default_assets();

        assert_eq!(catalog.engines().len(), 3);
        assert_eq!(catalog.aero_kits().len(), 9);
        assert!(catalog.engine_by_name("Turbocharged V8").is_some());
        assert!(catalog.tyres_by_compound("Soft Compound").is_some());
        assert!(catalog.aero_kit_by_name("Ground Effect Kit").is_some());
        assert!(catalog.track_by_name("Monza").is_some());
        assert!(catalog.conditions_by_name("Damp").is_some());
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        let catalog = Catalog::default_assets();

        assert!(catalog.engine_by_name("Warp Drive").is_none());
        assert!(catalog.track_by_name("Nordschleife").is_none());
    }
}
