use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Optional run parameters read from a TOML file; unset values fall back to
/// the defaults or are overridden from the command line.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub vehicle_capacity: Option<i64>,
    pub time_horizon: Option<i64>,
    pub depot: Option<Depot>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Depot {
    pub x: f64,
    pub y: f64,
}

pub fn read_config(path: impl AsRef<Path>) -> Result<RunConfig> {
    let mut s = String::new();
    File::open(path)?.read_to_string(&mut s)?;
    parse_config(s.as_str())
}

pub fn parse_config(s: &str) -> Result<RunConfig> {
    Ok(toml::from_str(s)?)
}
