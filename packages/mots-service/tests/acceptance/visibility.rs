use mots_domain::Language;
use mots_service::{ByLanguagesRequest, SearchRequest, SettingsRequest};

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn words_hidden_until_both_sides_opt_in() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping words_hidden_until_both_sides_opt_in; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let user_a = super::seed_user(&service, "alice").await;
	let user_b = super::seed_user(&service, "bilal").await;

	// A keeps the defaults: nothing shared, nothing foreign shown.
	service.create_word(super::noun(user_a, "chat", "قط")).await.expect("Failed to create word.");
	// B publishes and adds a word.
	service
		.toggle_public_words(SettingsRequest { user_id: user_b })
		.await
		.expect("Failed to toggle publishing.");
	service.create_word(super::noun(user_b, "chien", "كلب")).await.expect("Failed to create word.");

	let request = ByLanguagesRequest {
		viewer: Some(user_a),
		source_language: Language::Fr,
		target_language: Language::Ar,
	};
	let only_own = service.get_by_languages(request.clone()).await.expect("Lookup failed.");

	assert_eq!(only_own.words.len(), 1);
	assert_eq!(only_own.words[0].source_word, "chat");
	assert!(only_own.words[0].author.is_none());

	// A opts in; B's word appears, tagged with B's public descriptor.
	service
		.toggle_show_others_words(SettingsRequest { user_id: user_a })
		.await
		.expect("Failed to toggle show-others.");

	let both = service.get_by_languages(request).await.expect("Lookup failed.");

	assert_eq!(both.words.len(), 2);

	let foreign = both.words.iter().find(|word| word.source_word == "chien").expect("B's word");
	let author = foreign.author.as_ref().expect("Public word must carry its author.");

	assert_eq!(author.id, user_b);
	assert_eq!(author.display_name, "bilal");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn unpublished_owners_stay_hidden() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping unpublished_owners_stay_hidden; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let viewer = super::seed_user(&service, "alice").await;
	let owner = super::seed_user(&service, "bilal").await;

	// The owner never publishes; an opted-in viewer still sees nothing.
	service.create_word(super::noun(owner, "chien", "كلب")).await.expect("Failed to create word.");
	service
		.toggle_show_others_words(SettingsRequest { user_id: viewer })
		.await
		.expect("Failed to toggle show-others.");

	let result = service
		.get_by_languages(ByLanguagesRequest {
			viewer: Some(viewer),
			source_language: Language::Fr,
			target_language: Language::Ar,
		})
		.await
		.expect("Lookup failed.");

	assert!(result.words.is_empty());

	// Anonymous callers are gated by the owner flag too.
	let anonymous = service
		.search_words(SearchRequest { viewer: None, query: String::new() })
		.await
		.expect("Search failed.");

	assert!(anonymous.words.is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn anonymous_viewers_see_published_words() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping anonymous_viewers_see_published_words; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = super::seed_user(&service, "bilal").await;

	service
		.toggle_public_words(SettingsRequest { user_id: owner })
		.await
		.expect("Failed to toggle publishing.");
	service.create_word(super::noun(owner, "chien", "كلب")).await.expect("Failed to create word.");

	// No viewer-side opt-in exists for signed-out callers; the owner's
	// publish flag alone decides.
	let result = service
		.search_words(SearchRequest { viewer: None, query: "chien".to_string() })
		.await
		.expect("Search failed.");

	assert_eq!(result.words.len(), 1);
	assert!(result.words[0].author.is_some());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MOTS_PG_DSN to run."]
async fn own_entry_wins_merge_collision() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping own_entry_wins_merge_collision; set MOTS_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let viewer = super::seed_user(&service, "alice").await;
	let owner = super::seed_user(&service, "bilal").await;

	service
		.toggle_public_words(SettingsRequest { user_id: owner })
		.await
		.expect("Failed to toggle publishing.");
	// The public twin is created first; precedence must still go to the
	// viewer's own entry.
	service.create_word(super::noun(owner, "chat", "قط")).await.expect("Failed to create word.");
	service.create_word(super::noun(viewer, "chat", "قط")).await.expect("Failed to create word.");
	service
		.toggle_show_others_words(SettingsRequest { user_id: viewer })
		.await
		.expect("Failed to toggle show-others.");

	let result = service
		.get_by_languages(ByLanguagesRequest {
			viewer: Some(viewer),
			source_language: Language::Fr,
			target_language: Language::Ar,
		})
		.await
		.expect("Lookup failed.");

	assert_eq!(result.words.len(), 1);
	assert_eq!(result.words[0].owner_id, viewer);
	assert!(result.words[0].author.is_none());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
