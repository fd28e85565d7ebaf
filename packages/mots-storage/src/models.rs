use time::OffsetDateTime;
use uuid::Uuid;

/// One stored vocabulary entry. Language and type columns stay TEXT here;
/// the service layer converts them to the typed enums.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WordRow {
	pub id: i64,
	pub uuid: Uuid,
	pub owner_id: Uuid,
	pub source_language: String,
	pub target_language: String,
	pub word_type: String,
	pub source_word: String,
	pub translation_word: String,
	pub normalized_word: String,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

/// A publishable candidate row: the entry joined with its owner's public
/// descriptor. Only rows whose owner has `is_public_words` set are fetched.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PublicWordRow {
	pub uuid: Uuid,
	pub owner_id: Uuid,
	pub source_language: String,
	pub target_language: String,
	pub word_type: String,
	pub source_word: String,
	pub translation_word: String,
	pub normalized_word: String,
	pub created_at: OffsetDateTime,
	pub owner_display_name: String,
	pub owner_avatar: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VisibilityRow {
	pub user_id: Uuid,
	pub is_public_words: bool,
	pub show_others_words: bool,
	pub updated_at: OffsetDateTime,
}
