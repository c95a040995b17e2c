// © 2024 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::KdlDocument;
use miette::{IntoDiagnostic, Result, miette};
use std::io::ErrorKind;
use std::net::SocketAddr;
use tokio::fs::read_to_string;
use tracing::Level;

pub const DEFAULT_CONFIG_PATH: &str = "config.kdl";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Clone, Debug)]
pub struct ConfigData {
	pub bind_addr: SocketAddr,
	pub log_level: Level,
}

impl Default for ConfigData {
	fn default() -> Self {
		Self {
			bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
			log_level: Level::INFO,
		}
	}
}

/// Loads the configuration file.
///
/// When no path is given, the default path is tried and defaults are used if it doesn't exist. An explicitly given
/// path must exist.
pub async fn load_config(config_path: Option<&str>) -> Result<ConfigData> {
	let path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
	let config_file_contents = match read_to_string(path).await {
		Ok(contents) => contents,
		Err(error) if error.kind() == ErrorKind::NotFound && config_path.is_none() => {
			return Ok(ConfigData::default());
		}
		Err(error) => return Err(error).into_diagnostic(),
	};
	parse_config(&config_file_contents)
}

pub fn parse_config(config_file_contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = config_file_contents.parse()?;
	let mut config = ConfigData::default();

	if let Some(value) = document.get_arg("bind_addr") {
		let bind_addr = value
			.as_string()
			.ok_or_else(|| miette!("bind_addr must be a string"))?;
		config.bind_addr = bind_addr
			.parse()
			.map_err(|_| miette!("bind_addr `{}` is not a valid socket address", bind_addr))?;
	}

	if let Some(value) = document.get_arg("log_level") {
		let log_level = value
			.as_string()
			.ok_or_else(|| miette!("log_level must be a string"))?;
		config.log_level = log_level
			.parse()
			.map_err(|_| miette!("log_level `{}` is not a valid log level", log_level))?;
	}

	Ok(config)
}
