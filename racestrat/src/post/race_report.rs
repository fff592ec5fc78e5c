use crate::core::strategy::PitStopReason;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::io::Write as IoWrite;

/// PitStopRecord stores one executed pit stop for post-processing the results.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PitStopRecord {
    pub lap: u32,
    pub reason: PitStopReason,
}

/// RaceReport contains all race information that is required for
/// post-processing the results. The per-lap traces hold the state at the end
/// of each lap, after any pit stop taken on that lap.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RaceReport {
    pub track_name: String,
    pub conditions_name: String,
    pub tot_no_laps: u32,
    pub pit_stops: Vec<PitStopRecord>,
    pub lap_fuel: Vec<f64>,
    pub lap_tyre_wear: Vec<f64>,
    pub final_fuel: f64,
    pub final_tyre_wear: f64,
}

impl RaceReport {
    /// write_lap_table_to_file writes the per-lap state table to a text file
    /// in output/. Returns the path to the written file.
    pub fn write_lap_table_to_file(
        &self,
        path: Option<&std::path::Path>,
    ) -> anyhow::Result<String> {
        let mut content = String::new();
        writeln!(&mut content, "RESULT: Fuel and tyre state per lap")?;
        writeln!(&mut content, "{}", self.format_lap_table()?)?;
        writeln!(&mut content, "{}", self.format_summary())?;

        let out_dir = std::path::Path::new("output");
        std::fs::create_dir_all(out_dir)?;
        let out_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            out_dir.join("last_run.txt")
        };
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&out_path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        Ok(out_path.to_string_lossy().into_owned())
    }

    /// print_lap_table prints the per-lap state table and the race summary to
    /// the console output.
    pub fn print_lap_table(&self) {
        println!("RESULT: Fuel and tyre state per lap");
        println!(
            "{}",
            self.format_lap_table()
                .expect("Writing to a string must not fail!")
        );
        println!("{}", self.format_summary());
    }

    fn format_lap_table(&self) -> Result<String, std::fmt::Error> {
        let mut tmp_string = String::from("lap,     fuel,   wear, pit\n");

        for lap in 1..self.tot_no_laps as usize + 1 {
            let pit_stop = self
                .pit_stops
                .iter()
                .find(|pit_stop| pit_stop.lap as usize == lap);

            write!(
                &mut tmp_string,
                "{:3}, {:6.2} l, {:5.1}%, ",
                lap,
                self.lap_fuel[lap - 1],
                self.lap_tyre_wear[lap - 1] * 100.0
            )?;

            match pit_stop {
                Some(pit_stop) => writeln!(&mut tmp_string, "{}", pit_stop.reason)?,
                None => writeln!(&mut tmp_string, "-")?,
            }
        }

        Ok(tmp_string)
    }

    fn format_summary(&self) -> String {
        format!(
            "RESULT: Race on {} under {} conditions finished with {} pit stop(s), {:.2} l fuel and {:.1}% tyre wear remaining",
            self.track_name,
            self.conditions_name,
            self.pit_stops.len(),
            self.final_fuel,
            self.final_tyre_wear * 100.0
        )
    }
}
