//! Application-wide constants

pub const MAX_PHONE_LENGTH: usize = 15;
pub const MAX_STREET_LENGTH: usize = 200;
pub const MAX_CITY_LENGTH: usize = 100;
pub const MAX_ZIPCODE_LENGTH: usize = 20;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PATH: &str = "users.db";
pub const DEFAULT_API_PREFIX: &str = "/api";
