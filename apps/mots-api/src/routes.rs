use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;
use mots_domain::{Language, WordType};
use mots_service::{
	ByLanguagesRequest, ByTypeRequest, ClearWordsRequest, ClearWordsResponse, CountRequest,
	CountResponse, CreateWordRequest, DeleteWordRequest, DeleteWordResponse, ImportRequest,
	ImportResponse, MyWordsRequest, PairsRequest, PairsResponse, SearchRequest, SettingsRequest,
	SettingsResponse, UpdateWordRequest, WordFetchRequest, WordItem, WordsResponse,
};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/words", get(by_languages).post(create_word).delete(clear_words))
		.route("/v1/words/search", get(search))
		.route("/v1/words/by-type", get(by_type))
		.route("/v1/words/count-by-languages", get(count_by_languages))
		.route("/v1/words/language-pairs", get(language_pairs))
		.route("/v1/words/mine", get(my_words))
		.route("/v1/words/import", post(import_words))
		.route("/v1/words/{uuid}", get(word_by_uuid).put(update_word).delete(delete_word))
		.route("/v1/settings", get(get_settings))
		.route("/v1/settings/toggle-public-words", post(toggle_public_words))
		.route("/v1/settings/toggle-show-others-words", post(toggle_show_others_words))
		.route("/v1/settings/reset", post(reset_settings))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
	q: String,
	viewer: Option<Uuid>,
}

async fn search(
	State(state): State<AppState>,
	Query(query): Query<SearchQuery>,
) -> Result<Json<WordsResponse>, ApiError> {
	let response =
		state.service.search_words(SearchRequest { viewer: query.viewer, query: query.q }).await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct LanguagesQuery {
	viewer: Option<Uuid>,
	source_language: Language,
	target_language: Language,
}

async fn by_languages(
	State(state): State<AppState>,
	Query(query): Query<LanguagesQuery>,
) -> Result<Json<WordsResponse>, ApiError> {
	let response = state
		.service
		.get_by_languages(ByLanguagesRequest {
			viewer: query.viewer,
			source_language: query.source_language,
			target_language: query.target_language,
		})
		.await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct TypeQuery {
	viewer: Option<Uuid>,
	#[serde(rename = "type")]
	word_type: WordType,
	source_language: Language,
	target_language: Language,
}

async fn by_type(
	State(state): State<AppState>,
	Query(query): Query<TypeQuery>,
) -> Result<Json<WordsResponse>, ApiError> {
	let response = state
		.service
		.get_by_type(ByTypeRequest {
			viewer: query.viewer,
			word_type: query.word_type,
			source_language: query.source_language,
			target_language: query.target_language,
		})
		.await?;

	Ok(Json(response))
}

async fn count_by_languages(
	State(state): State<AppState>,
	Query(query): Query<LanguagesQuery>,
) -> Result<Json<CountResponse>, ApiError> {
	let response = state
		.service
		.count_by_languages(CountRequest {
			viewer: query.viewer,
			source_language: query.source_language,
			target_language: query.target_language,
		})
		.await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct ViewerQuery {
	viewer: Uuid,
}

async fn language_pairs(
	State(state): State<AppState>,
	Query(query): Query<ViewerQuery>,
) -> Result<Json<PairsResponse>, ApiError> {
	let response = state.service.language_pairs(PairsRequest { viewer: query.viewer }).await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct OwnerQuery {
	owner: Uuid,
}

async fn my_words(
	State(state): State<AppState>,
	Query(query): Query<OwnerQuery>,
) -> Result<Json<WordsResponse>, ApiError> {
	let response = state.service.my_words(MyWordsRequest { owner_id: query.owner }).await?;

	Ok(Json(response))
}

async fn word_by_uuid(
	State(state): State<AppState>,
	Path(uuid): Path<Uuid>,
	Query(query): Query<OwnerQuery>,
) -> Result<Json<WordItem>, ApiError> {
	let response =
		state.service.word_by_uuid(WordFetchRequest { owner_id: query.owner, uuid }).await?;

	Ok(Json(response))
}

async fn create_word(
	State(state): State<AppState>,
	Json(payload): Json<CreateWordRequest>,
) -> Result<(StatusCode, Json<WordItem>), ApiError> {
	let response = state.service.create_word(payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn import_words(
	State(state): State<AppState>,
	Json(payload): Json<ImportRequest>,
) -> Result<Json<ImportResponse>, ApiError> {
	let response = state.service.import_words(payload).await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct UpdateBody {
	owner_id: Uuid,
	source_language: Option<Language>,
	target_language: Option<Language>,
	word_type: Option<WordType>,
	source_word: Option<String>,
	translation_word: Option<String>,
}

async fn update_word(
	State(state): State<AppState>,
	Path(uuid): Path<Uuid>,
	Json(body): Json<UpdateBody>,
) -> Result<Json<WordItem>, ApiError> {
	let response = state
		.service
		.update_word(UpdateWordRequest {
			owner_id: body.owner_id,
			uuid,
			source_language: body.source_language,
			target_language: body.target_language,
			word_type: body.word_type,
			source_word: body.source_word,
			translation_word: body.translation_word,
		})
		.await?;

	Ok(Json(response))
}

async fn delete_word(
	State(state): State<AppState>,
	Path(uuid): Path<Uuid>,
	Query(query): Query<OwnerQuery>,
) -> Result<Json<DeleteWordResponse>, ApiError> {
	let response =
		state.service.delete_word(DeleteWordRequest { owner_id: query.owner, uuid }).await?;

	Ok(Json(response))
}

async fn clear_words(
	State(state): State<AppState>,
	Query(query): Query<OwnerQuery>,
) -> Result<Json<ClearWordsResponse>, ApiError> {
	let response = state.service.clear_words(ClearWordsRequest { owner_id: query.owner }).await?;

	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct UserQuery {
	user: Uuid,
}

async fn get_settings(
	State(state): State<AppState>,
	Query(query): Query<UserQuery>,
) -> Result<Json<SettingsResponse>, ApiError> {
	let response = state.service.get_settings(SettingsRequest { user_id: query.user }).await?;

	Ok(Json(response))
}

async fn toggle_public_words(
	State(state): State<AppState>,
	Query(query): Query<UserQuery>,
) -> Result<Json<SettingsResponse>, ApiError> {
	let response =
		state.service.toggle_public_words(SettingsRequest { user_id: query.user }).await?;

	Ok(Json(response))
}

async fn toggle_show_others_words(
	State(state): State<AppState>,
	Query(query): Query<UserQuery>,
) -> Result<Json<SettingsResponse>, ApiError> {
	let response =
		state.service.toggle_show_others_words(SettingsRequest { user_id: query.user }).await?;

	Ok(Json(response))
}

async fn reset_settings(
	State(state): State<AppState>,
	Query(query): Query<UserQuery>,
) -> Result<Json<SettingsResponse>, ApiError> {
	let response = state.service.reset_settings(SettingsRequest { user_id: query.user }).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<mots_service::Error> for ApiError {
	fn from(err: mots_service::Error) -> Self {
		use mots_service::Error;

		match err {
			Error::InvalidRequest { message } =>
				Self::new(StatusCode::BAD_REQUEST, "invalid_request", message),
			Error::NotFound { message } => Self::new(StatusCode::NOT_FOUND, "not_found", message),
			Error::Conflict { message } => Self::new(StatusCode::CONFLICT, "conflict", message),
			Error::Storage { message } => {
				tracing::error!(%message, "Storage failure.");

				Self::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"storage_error",
					"Internal storage failure.",
				)
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
