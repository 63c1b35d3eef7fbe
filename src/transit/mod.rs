//! Graph loading from GTFS schedule data

pub mod stop_times;

pub use stop_times::{load_stop_times, parse_stop_times, parse_time};
