use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
	Error, Result,
	db::Db,
	models::{PublicWordRow, VisibilityRow, WordRow},
};

/// Row filter shared by the find and count paths. Absent fields match
/// everything; `pair` matches either stored direction of the language pair.
#[derive(Clone, Debug, Default)]
pub struct WordFilter {
	pub pair: Option<(String, String)>,
	pub word_type: Option<String>,
	pub text: Option<String>,
}

pub struct NewWord<'a> {
	pub uuid: Uuid,
	pub owner_id: Uuid,
	pub source_language: &'a str,
	pub target_language: &'a str,
	pub word_type: &'a str,
	pub source_word: &'a str,
	pub translation_word: &'a str,
	pub normalized_word: &'a str,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WordChanges<'a> {
	pub source_language: Option<&'a str>,
	pub target_language: Option<&'a str>,
	pub word_type: Option<&'a str>,
	pub source_word: Option<&'a str>,
	pub translation_word: Option<&'a str>,
	pub normalized_word: Option<&'a str>,
}
impl WordChanges<'_> {
	pub fn is_empty(&self) -> bool {
		self.source_language.is_none()
			&& self.target_language.is_none()
			&& self.word_type.is_none()
			&& self.source_word.is_none()
			&& self.translation_word.is_none()
			&& self.normalized_word.is_none()
	}
}

pub async fn find_words_by_owner(
	db: &Db,
	owner_id: Uuid,
	filter: &WordFilter,
) -> Result<Vec<WordRow>> {
	let mut builder = QueryBuilder::new("SELECT * FROM word_entries WHERE owner_id = ");

	builder.push_bind(owner_id);
	push_filter(&mut builder, filter, "");
	builder.push(" ORDER BY created_at DESC, id DESC");

	Ok(builder.build_query_as().fetch_all(&db.pool).await?)
}

/// Fetches unaggregated public candidates: rows of every owner who has
/// opted to publish, joined with the owner's descriptor. Grouping into one
/// representative per near-duplicate cluster happens in the engine.
pub async fn find_public_candidates(
	db: &Db,
	exclude_owner_id: Option<Uuid>,
	filter: &WordFilter,
) -> Result<Vec<PublicWordRow>> {
	let mut builder = QueryBuilder::new(
		"SELECT w.uuid, w.owner_id, w.source_language, w.target_language, w.word_type, \
		 w.source_word, w.translation_word, w.normalized_word, w.created_at, \
		 u.display_name AS owner_display_name, u.avatar AS owner_avatar \
		 FROM word_entries w \
		 JOIN users u ON u.user_id = w.owner_id \
		 JOIN visibility_settings v ON v.user_id = w.owner_id \
		 WHERE v.is_public_words",
	);

	if let Some(owner_id) = exclude_owner_id {
		builder.push(" AND w.owner_id != ");
		builder.push_bind(owner_id);
	}

	push_filter(&mut builder, filter, "w.");
	builder.push(" ORDER BY w.normalized_word ASC, w.created_at ASC, w.id ASC");

	Ok(builder.build_query_as().fetch_all(&db.pool).await?)
}

pub async fn count_words_by_owner(db: &Db, owner_id: Uuid, filter: &WordFilter) -> Result<i64> {
	let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM word_entries WHERE owner_id = ");

	builder.push_bind(owner_id);
	push_filter(&mut builder, filter, "");

	Ok(builder.build_query_scalar().fetch_one(&db.pool).await?)
}

pub async fn count_public_words(
	db: &Db,
	exclude_owner_id: Option<Uuid>,
	filter: &WordFilter,
) -> Result<i64> {
	let mut builder = QueryBuilder::new(
		"SELECT COUNT(*) \
		 FROM word_entries w \
		 JOIN visibility_settings v ON v.user_id = w.owner_id \
		 WHERE v.is_public_words",
	);

	if let Some(owner_id) = exclude_owner_id {
		builder.push(" AND w.owner_id != ");
		builder.push_bind(owner_id);
	}

	push_filter(&mut builder, filter, "w.");

	Ok(builder.build_query_scalar().fetch_one(&db.pool).await?)
}

pub async fn distinct_pairs_by_owner(db: &Db, owner_id: Uuid) -> Result<Vec<(String, String)>> {
	let rows = sqlx::query_as(
		"\
SELECT DISTINCT source_language, target_language
FROM word_entries
WHERE owner_id = $1",
	)
	.bind(owner_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

pub async fn distinct_public_pairs(db: &Db, exclude_owner_id: Uuid) -> Result<Vec<(String, String)>> {
	let rows = sqlx::query_as(
		"\
SELECT DISTINCT w.source_language, w.target_language
FROM word_entries w
JOIN visibility_settings v ON v.user_id = w.owner_id
WHERE v.is_public_words AND w.owner_id != $1",
	)
	.bind(exclude_owner_id)
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Returns the user's visibility settings, creating the default row (both
/// flags off) when none exists yet.
pub async fn get_or_create_visibility(db: &Db, user_id: Uuid) -> Result<VisibilityRow> {
	sqlx::query("INSERT INTO visibility_settings (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
		.bind(user_id)
		.execute(&db.pool)
		.await?;

	let row = sqlx::query_as::<_, VisibilityRow>(
		"\
SELECT user_id, is_public_words, show_others_words, updated_at
FROM visibility_settings
WHERE user_id = $1",
	)
	.bind(user_id)
	.fetch_one(&db.pool)
	.await?;

	Ok(row)
}

pub async fn set_visibility(
	db: &Db,
	user_id: Uuid,
	is_public_words: bool,
	show_others_words: bool,
) -> Result<VisibilityRow> {
	sqlx::query_as::<_, VisibilityRow>(
		"\
UPDATE visibility_settings
SET is_public_words = $2,
	show_others_words = $3,
	updated_at = now()
WHERE user_id = $1
RETURNING user_id, is_public_words, show_others_words, updated_at",
	)
	.bind(user_id)
	.bind(is_public_words)
	.bind(show_others_words)
	.fetch_optional(&db.pool)
	.await?
	.ok_or_else(|| Error::NotFound("Visibility settings not found.".to_string()))
}

pub async fn insert_user(
	db: &Db,
	user_id: Uuid,
	display_name: &str,
	avatar: Option<&str>,
) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO users (user_id, display_name, avatar)
VALUES ($1, $2, $3)
ON CONFLICT (user_id) DO UPDATE
SET
	display_name = EXCLUDED.display_name,
	avatar = EXCLUDED.avatar",
	)
	.bind(user_id)
	.bind(display_name)
	.bind(avatar)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn insert_word(db: &Db, word: &NewWord<'_>) -> Result<WordRow> {
	sqlx::query_as::<_, WordRow>(
		"\
INSERT INTO word_entries (
	uuid,
	owner_id,
	source_language,
	target_language,
	word_type,
	source_word,
	translation_word,
	normalized_word
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
RETURNING *",
	)
	.bind(word.uuid)
	.bind(word.owner_id)
	.bind(word.source_language)
	.bind(word.target_language)
	.bind(word.word_type)
	.bind(word.source_word)
	.bind(word.translation_word)
	.bind(word.normalized_word)
	.fetch_one(&db.pool)
	.await
	.map_err(map_unique_violation)
}

/// Bulk insert that silently drops rows colliding with the uniqueness
/// invariant. Returns the number of rows actually written.
pub async fn insert_words_skip_conflicts(db: &Db, words: &[NewWord<'_>]) -> Result<u64> {
	if words.is_empty() {
		return Ok(0);
	}

	let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
		"INSERT INTO word_entries (uuid, owner_id, source_language, target_language, word_type, \
		 source_word, translation_word, normalized_word) ",
	);

	builder.push_values(words, |mut row, word| {
		row.push_bind(word.uuid)
			.push_bind(word.owner_id)
			.push_bind(word.source_language)
			.push_bind(word.target_language)
			.push_bind(word.word_type)
			.push_bind(word.source_word)
			.push_bind(word.translation_word)
			.push_bind(word.normalized_word);
	});
	builder.push(" ON CONFLICT DO NOTHING");

	let result = builder.build().execute(&db.pool).await?;

	Ok(result.rows_affected())
}

pub async fn find_word_by_uuid(db: &Db, owner_id: Uuid, uuid: Uuid) -> Result<Option<WordRow>> {
	let row = sqlx::query_as::<_, WordRow>(
		"SELECT * FROM word_entries WHERE uuid = $1 AND owner_id = $2",
	)
	.bind(uuid)
	.bind(owner_id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row)
}

pub async fn update_word(
	db: &Db,
	owner_id: Uuid,
	uuid: Uuid,
	changes: &WordChanges<'_>,
) -> Result<WordRow> {
	if changes.is_empty() {
		return Err(Error::InvalidArgument("No fields to update.".to_string()));
	}

	let mut builder = QueryBuilder::new("UPDATE word_entries SET updated_at = now()");

	if let Some(value) = changes.source_language {
		builder.push(", source_language = ");
		builder.push_bind(value);
	}
	if let Some(value) = changes.target_language {
		builder.push(", target_language = ");
		builder.push_bind(value);
	}
	if let Some(value) = changes.word_type {
		builder.push(", word_type = ");
		builder.push_bind(value);
	}
	if let Some(value) = changes.source_word {
		builder.push(", source_word = ");
		builder.push_bind(value);
	}
	if let Some(value) = changes.translation_word {
		builder.push(", translation_word = ");
		builder.push_bind(value);
	}
	if let Some(value) = changes.normalized_word {
		builder.push(", normalized_word = ");
		builder.push_bind(value);
	}

	builder.push(" WHERE uuid = ");
	builder.push_bind(uuid);
	builder.push(" AND owner_id = ");
	builder.push_bind(owner_id);
	builder.push(" RETURNING *");

	builder
		.build_query_as::<WordRow>()
		.fetch_optional(&db.pool)
		.await
		.map_err(map_unique_violation)?
		.ok_or_else(|| Error::NotFound("Word not found.".to_string()))
}

pub async fn delete_word(db: &Db, owner_id: Uuid, uuid: Uuid) -> Result<()> {
	let result = sqlx::query("DELETE FROM word_entries WHERE uuid = $1 AND owner_id = $2")
		.bind(uuid)
		.bind(owner_id)
		.execute(&db.pool)
		.await?;

	if result.rows_affected() == 0 {
		return Err(Error::NotFound("Word not found.".to_string()));
	}

	Ok(())
}

pub async fn delete_words_by_owner(db: &Db, owner_id: Uuid) -> Result<u64> {
	let result = sqlx::query("DELETE FROM word_entries WHERE owner_id = $1")
		.bind(owner_id)
		.execute(&db.pool)
		.await?;

	Ok(result.rows_affected())
}

fn map_unique_violation(err: sqlx::Error) -> Error {
	match &err {
		sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Error::Conflict(
			"An entry with the same normalized word and target language already exists."
				.to_string(),
		),
		_ => Error::Sqlx(err),
	}
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &WordFilter, prefix: &str) {
	if let Some((source, target)) = &filter.pair {
		builder.push(format!(" AND (({prefix}source_language = "));
		builder.push_bind(source.clone());
		builder.push(format!(" AND {prefix}target_language = "));
		builder.push_bind(target.clone());
		builder.push(format!(") OR ({prefix}source_language = "));
		builder.push_bind(target.clone());
		builder.push(format!(" AND {prefix}target_language = "));
		builder.push_bind(source.clone());
		builder.push("))");
	}
	if let Some(word_type) = &filter.word_type {
		builder.push(format!(" AND {prefix}word_type = "));
		builder.push_bind(word_type.clone());
	}
	if let Some(text) = &filter.text {
		let pattern = like_pattern(text);

		builder.push(format!(" AND ({prefix}normalized_word ILIKE "));
		builder.push_bind(pattern.clone());
		builder.push(format!(" ESCAPE '\\' OR {prefix}translation_word ILIKE "));
		builder.push_bind(pattern);
		builder.push(" ESCAPE '\\')");
	}
}

/// Wraps `text` in a contains pattern, escaping LIKE metacharacters.
fn like_pattern(text: &str) -> String {
	let mut pattern = String::with_capacity(text.len() + 2);

	pattern.push('%');

	for ch in text.chars() {
		if matches!(ch, '%' | '_' | '\\') {
			pattern.push('\\');
		}

		pattern.push(ch);
	}

	pattern.push('%');

	pattern
}
