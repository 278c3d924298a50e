#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

use std::time::Duration;

/// How many readings the data feed returns at most
pub const RECENT_READINGS_LIMIT: i64 = 7;
/// How often keep-alive pings are sent to the public URL
pub const PING_INTERVAL: Duration = Duration::from_secs(300);

pub mod auth;
pub mod db;
pub mod keep_alive;
pub mod rest_api;
pub mod schema;
