use std::sync::Arc;

use mots_service::WordService;
use mots_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<WordService>,
}
impl AppState {
	pub async fn new(config: mots_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = WordService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
