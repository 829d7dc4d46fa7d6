pub mod e101_water_entry;
pub mod e102_irrigation_entry;
pub mod e103_monitoring_entry;
