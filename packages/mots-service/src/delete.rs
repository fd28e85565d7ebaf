use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, WordService};
use mots_storage::queries;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteWordRequest {
	pub owner_id: Uuid,
	pub uuid: Uuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteWordResponse {
	pub uuid: Uuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClearWordsRequest {
	pub owner_id: Uuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClearWordsResponse {
	pub deleted: u64,
}

impl WordService {
	pub async fn delete_word(&self, req: DeleteWordRequest) -> Result<DeleteWordResponse> {
		queries::delete_word(&self.db, req.owner_id, req.uuid).await?;

		Ok(DeleteWordResponse { uuid: req.uuid })
	}

	pub async fn clear_words(&self, req: ClearWordsRequest) -> Result<ClearWordsResponse> {
		let deleted = queries::delete_words_by_owner(&self.db, req.owner_id).await?;

		tracing::info!(owner_id = %req.owner_id, deleted, "Cleared vocabulary.");

		Ok(ClearWordsResponse { deleted })
	}
}
