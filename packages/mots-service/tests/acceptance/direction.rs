use mots_domain::{Language, WordType};
use mots_service::{ByLanguagesRequest, ByTypeRequest, CreateWordRequest, SearchRequest, WordInput};

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn mirrored_entries_answer_both_directions() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping mirrored_entries_answer_both_directions; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = super::seed_user(&service, "alice").await;

	// Stored AR -> FR.
	service
		.create_word(CreateWordRequest {
			owner_id: owner,
			word: WordInput {
				source_language: Language::Ar,
				target_language: Language::Fr,
				word_type: WordType::Noun,
				source_word: "قط".to_string(),
				translation_word: "chat".to_string(),
			},
		})
		.await
		.expect("Failed to create word.");

	// Queried FR -> AR: same entry, reoriented in the response only.
	let result = service
		.get_by_languages(ByLanguagesRequest {
			viewer: Some(owner),
			source_language: Language::Fr,
			target_language: Language::Ar,
		})
		.await
		.expect("Lookup failed.");

	assert_eq!(result.words.len(), 1);
	assert_eq!(result.words[0].source_language, Language::Fr);
	assert_eq!(result.words[0].target_language, Language::Ar);
	assert_eq!(result.words[0].source_word, "chat");
	assert_eq!(result.words[0].translation_word, "قط");

	// Queried in the stored direction it comes back untouched.
	let stored = service
		.get_by_languages(ByLanguagesRequest {
			viewer: Some(owner),
			source_language: Language::Ar,
			target_language: Language::Fr,
		})
		.await
		.expect("Lookup failed.");

	assert_eq!(stored.words.len(), 1);
	assert_eq!(stored.words[0].source_word, "قط");
	assert_eq!(stored.words[0].translation_word, "chat");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn type_lookup_filters_and_reorients() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping type_lookup_filters_and_reorients; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = super::seed_user(&service, "alice").await;

	service.create_word(super::noun(owner, "chat", "قط")).await.expect("Failed to create word.");
	service
		.create_word(CreateWordRequest {
			owner_id: owner,
			word: WordInput {
				source_language: Language::Ar,
				target_language: Language::Fr,
				word_type: WordType::Verb,
				source_word: "كتب".to_string(),
				translation_word: "écrire".to_string(),
			},
		})
		.await
		.expect("Failed to create word.");

	let verbs = service
		.get_by_type(ByTypeRequest {
			viewer: Some(owner),
			word_type: WordType::Verb,
			source_language: Language::Fr,
			target_language: Language::Ar,
		})
		.await
		.expect("Lookup failed.");

	assert_eq!(verbs.words.len(), 1);
	assert_eq!(verbs.words[0].word_type, WordType::Verb);
	assert_eq!(verbs.words[0].source_word, "écrire");
	assert_eq!(verbs.words[0].source_language, Language::Fr);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn search_is_diacritic_insensitive() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping search_is_diacritic_insensitive; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = super::seed_user(&service, "alice").await;

	// Stored fully vocalized; the normalized column drops the harakat.
	service
		.create_word(super::noun(owner, "chat", "قِطٌّ"))
		.await
		.expect("Failed to create word.");

	for query in ["قط", "قِطٌّ"] {
		let result = service
			.search_words(SearchRequest { viewer: Some(owner), query: query.to_string() })
			.await
			.expect("Search failed.");

		assert_eq!(result.words.len(), 1, "query {query:?} should match");
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
