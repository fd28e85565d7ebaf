use mots_service::{
	ClearWordsRequest, DeleteWordRequest, Error, ImportRequest, MyWordsRequest, SettingsRequest,
	UpdateWordRequest, WordFetchRequest,
};

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn duplicate_creates_conflict_per_owner() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping duplicate_creates_conflict_per_owner; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let first = super::seed_user(&service, "alice").await;
	let second = super::seed_user(&service, "bilal").await;

	service.create_word(super::noun(first, "chat", "قِط")).await.expect("Failed to create word.");

	// Same owner, same word without vocalization: the normalized forms
	// collide and the store rejects it.
	let err = service
		.create_word(super::noun(first, "chat", "قط"))
		.await
		.expect_err("Duplicate create succeeded.");

	assert!(matches!(err, Error::Conflict { .. }));

	// A different owner may hold the same canonical key.
	service.create_word(super::noun(second, "chat", "قط")).await.expect("Failed to create word.");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn update_rederives_the_normalized_form() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping update_rederives_the_normalized_form; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = super::seed_user(&service, "alice").await;
	let created =
		service.create_word(super::noun(owner, "chien", "كلب")).await.expect("Failed to create word.");
	let updated = service
		.update_word(UpdateWordRequest {
			owner_id: owner,
			uuid: created.uuid,
			source_language: None,
			target_language: None,
			word_type: None,
			source_word: None,
			translation_word: Some("قِطٌّ".to_string()),
		})
		.await
		.expect("Update failed.");

	assert_eq!(updated.translation_word, "قِطٌّ");
	assert_eq!(updated.normalized_word, "قط");

	// The re-derived normalized form now occupies the uniqueness slot.
	let err = service
		.create_word(super::noun(owner, "chat", "قط"))
		.await
		.expect_err("Conflicting create succeeded.");

	assert!(matches!(err, Error::Conflict { .. }));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn foreign_entries_are_not_found() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping foreign_entries_are_not_found; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = super::seed_user(&service, "alice").await;
	let stranger = super::seed_user(&service, "bilal").await;
	let created =
		service.create_word(super::noun(owner, "chat", "قط")).await.expect("Failed to create word.");

	// Mutation and fetch paths treat another user's entry exactly like a
	// missing one.
	let err = service
		.word_by_uuid(WordFetchRequest { owner_id: stranger, uuid: created.uuid })
		.await
		.expect_err("Foreign fetch succeeded.");

	assert!(matches!(err, Error::NotFound { .. }));

	let err = service
		.delete_word(DeleteWordRequest { owner_id: stranger, uuid: created.uuid })
		.await
		.expect_err("Foreign delete succeeded.");

	assert!(matches!(err, Error::NotFound { .. }));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn import_skips_duplicates_and_reports_counts() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping import_skips_duplicates_and_reports_counts; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = super::seed_user(&service, "alice").await;

	service.create_word(super::noun(owner, "chat", "قط")).await.expect("Failed to create word.");

	let words = vec![
		// Collides with the existing entry once normalized.
		super::noun(owner, "chat", "قِط").word,
		super::noun(owner, "chien", "كلب").word,
		// In-batch duplicate of the previous line.
		super::noun(owner, "chien", "كِلب").word,
		super::noun(owner, "cheval", "حصان").word,
	];
	let report =
		service.import_words(ImportRequest { owner_id: owner, words }).await.expect("Import failed.");

	assert_eq!(report.created, 2);
	assert_eq!(report.skipped, 2);

	let mine = service.my_words(MyWordsRequest { owner_id: owner }).await.expect("List failed.");

	assert_eq!(mine.words.len(), 3);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn clear_removes_only_the_owners_words() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping clear_removes_only_the_owners_words; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = super::seed_user(&service, "alice").await;
	let bystander = super::seed_user(&service, "bilal").await;

	service.create_word(super::noun(owner, "chat", "قط")).await.expect("Failed to create word.");
	service.create_word(super::noun(owner, "chien", "كلب")).await.expect("Failed to create word.");
	service
		.create_word(super::noun(bystander, "cheval", "حصان"))
		.await
		.expect("Failed to create word.");

	let report =
		service.clear_words(ClearWordsRequest { owner_id: owner }).await.expect("Clear failed.");

	assert_eq!(report.deleted, 2);

	let mine = service.my_words(MyWordsRequest { owner_id: owner }).await.expect("List failed.");

	assert!(mine.words.is_empty());

	let theirs =
		service.my_words(MyWordsRequest { owner_id: bystander }).await.expect("List failed.");

	assert_eq!(theirs.words.len(), 1);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn settings_default_off_and_reset() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping settings_default_off_and_reset; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let user = super::seed_user(&service, "alice").await;

	// First read auto-creates the row with both flags off.
	let initial =
		service.get_settings(SettingsRequest { user_id: user }).await.expect("Get failed.");

	assert!(!initial.is_public_words);
	assert!(!initial.show_others_words);

	service.toggle_public_words(SettingsRequest { user_id: user }).await.expect("Toggle failed.");

	let toggled = service
		.toggle_show_others_words(SettingsRequest { user_id: user })
		.await
		.expect("Toggle failed.");

	assert!(toggled.is_public_words);
	assert!(toggled.show_others_words);

	let reset =
		service.reset_settings(SettingsRequest { user_id: user }).await.expect("Reset failed.");

	assert!(!reset.is_public_words);
	assert!(!reset.show_others_words);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
