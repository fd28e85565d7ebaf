mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Service, Storage, Words};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if cfg.words.max_word_chars == 0 {
		return Err(Error::Validation {
			message: "words.max_word_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.words.import_max_entries == 0 {
		return Err(Error::Validation {
			message: "words.import_max_entries must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
	cfg.service.log_level = cfg.service.log_level.trim().to_string();
	cfg.storage.postgres.dsn = cfg.storage.postgres.dsn.trim().to_string();
}
