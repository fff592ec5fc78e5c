pub mod aero_kit;
pub mod car;
pub mod conditions;
pub mod engine;
pub mod handle_race;
pub mod input_error;
pub mod strategy;
pub mod track;
pub mod tyres;
