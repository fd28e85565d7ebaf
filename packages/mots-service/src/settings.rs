use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, WordService};
use mots_storage::{models::VisibilityRow, queries};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SettingsRequest {
	pub user_id: Uuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SettingsResponse {
	pub user_id: Uuid,
	pub is_public_words: bool,
	pub show_others_words: bool,
	#[serde(with = "crate::time_serde")]
	pub updated_at: time::OffsetDateTime,
}
impl SettingsResponse {
	fn from_row(row: VisibilityRow) -> Self {
		Self {
			user_id: row.user_id,
			is_public_words: row.is_public_words,
			show_others_words: row.show_others_words,
			updated_at: row.updated_at,
		}
	}
}

impl WordService {
	/// The user's visibility settings, created with both flags off when the
	/// user has none yet.
	pub async fn get_settings(&self, req: SettingsRequest) -> Result<SettingsResponse> {
		let row = queries::get_or_create_visibility(&self.db, req.user_id).await?;

		Ok(SettingsResponse::from_row(row))
	}

	/// Flips "my entries are visible to others".
	pub async fn toggle_public_words(&self, req: SettingsRequest) -> Result<SettingsResponse> {
		let current = queries::get_or_create_visibility(&self.db, req.user_id).await?;
		let row = queries::set_visibility(
			&self.db,
			req.user_id,
			!current.is_public_words,
			current.show_others_words,
		)
		.await?;

		Ok(SettingsResponse::from_row(row))
	}

	/// Flips "I may see others' public entries".
	pub async fn toggle_show_others_words(&self, req: SettingsRequest) -> Result<SettingsResponse> {
		let current = queries::get_or_create_visibility(&self.db, req.user_id).await?;
		let row = queries::set_visibility(
			&self.db,
			req.user_id,
			current.is_public_words,
			!current.show_others_words,
		)
		.await?;

		Ok(SettingsResponse::from_row(row))
	}

	/// Puts both flags back to their defaults.
	pub async fn reset_settings(&self, req: SettingsRequest) -> Result<SettingsResponse> {
		queries::get_or_create_visibility(&self.db, req.user_id).await?;

		let row = queries::set_visibility(&self.db, req.user_id, false, false).await?;

		Ok(SettingsResponse::from_row(row))
	}
}
