pub mod fixtures;
pub mod table_settings;
pub mod tags;
