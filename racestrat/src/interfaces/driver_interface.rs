use crate::post::race_report::{PitStopRecord, RaceReport};

/// LapSnapshot is the per-lap message the race loop emits for a presentation
/// layer. It carries the car state at the end of the lap, after any pit stop
/// taken on that lap, so a reader never observes a half-applied stop.
#[derive(Debug, Clone, Default)]
pub struct LapSnapshot {
    pub lap_no: u32,
    pub fuel_remaining: f64,
    /// Tyre wear fraction within [0, 1].
    pub tyre_wear: f64,
    /// Race progress fraction within [0, 1].
    pub progress: f64,
    pub pit_stop: Option<PitStopRecord>,

    // final report payload (sent once when the race finishes)
    pub final_report: Option<RaceReport>,
}
