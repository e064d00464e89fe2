use carnet_core::{
    open_store_in_memory, ArticleDraft, ArticlePatch, ArticleRepository, AssociationRepository,
    KvArticleRepository, KvAssociationRepository, RepoError,
};

fn draft(title: &str, content: &str) -> ArticleDraft {
    ArticleDraft {
        title: title.to_string(),
        content: content.to_string(),
        ..ArticleDraft::default()
    }
}

#[test]
fn create_derives_slug_id_and_defaults() {
    let store = open_store_in_memory().unwrap();
    let repo = KvArticleRepository::new(&store);

    let article = repo
        .create(&draft("Café du Matin!", "<p>bonjour</p>"))
        .unwrap();
    assert_eq!(article.id, "cafe-du-matin");
    assert_eq!(article.title, "Café du Matin!");
    assert_eq!(article.summary, "");
    assert!(!article.date.is_empty());
    assert!(article.created_at > 0);

    let all = repo.get_all().unwrap();
    assert_eq!(all.last().unwrap().id, "cafe-du-matin");
}

#[test]
fn create_keeps_explicit_date_and_trims_summary() {
    let store = open_store_in_memory().unwrap();
    let repo = KvArticleRepository::new(&store);

    let article = repo
        .create(&ArticleDraft {
            title: "Essai".to_string(),
            date: Some("3 février 2026".to_string()),
            summary: Some("  aperçu  ".to_string()),
            content: "<p>corps</p>".to_string(),
        })
        .unwrap();
    assert_eq!(article.date, "3 février 2026");
    assert_eq!(article.summary, "aperçu");
}

#[test]
fn create_rejects_empty_title_or_content() {
    let store = open_store_in_memory().unwrap();
    let repo = KvArticleRepository::new(&store);

    let err = repo.create(&draft("   ", "<p>x</p>")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let err = repo.create(&draft("Titre", "   ")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn create_rejects_duplicate_derived_id() {
    let store = open_store_in_memory().unwrap();
    let repo = KvArticleRepository::new(&store);

    repo.create(&draft("Mon Projet", "<p>v1</p>")).unwrap();

    // Same slug even though the titles differ in case and punctuation.
    let err = repo
        .create(&draft("  mon PROJET !!", "<p>encore</p>"))
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[test]
fn update_merges_only_present_fields() {
    let store = open_store_in_memory().unwrap();
    let repo = KvArticleRepository::new(&store);
    let created = repo.create(&draft("Mon Essai", "<p>v1</p>")).unwrap();

    // Empty title and content are ignored; empty date and summary apply.
    let updated = repo
        .update(
            &created.id,
            &ArticlePatch {
                title: Some("   ".to_string()),
                content: Some("".to_string()),
                date: Some("".to_string()),
                summary: Some("".to_string()),
            },
        )
        .unwrap();
    assert_eq!(updated.title, "Mon Essai");
    assert_eq!(updated.content, "<p>v1</p>");
    assert_eq!(updated.date, "");
    assert_eq!(updated.summary, "");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);

    let updated = repo
        .update(
            &created.id,
            &ArticlePatch {
                title: Some("Mon Essai Révisé".to_string()),
                content: Some("<p>v2</p>".to_string()),
                ..ArticlePatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.title, "Mon Essai Révisé");
    assert_eq!(updated.content, "<p>v2</p>");
    // The id stays the creation-time slug even after a title change.
    assert_eq!(updated.id, "mon-essai");
}

#[test]
fn update_unknown_id_is_not_found() {
    let store = open_store_in_memory().unwrap();
    let repo = KvArticleRepository::new(&store);
    let err = repo
        .update("absent", &ArticlePatch::default())
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn delete_removes_article_and_its_association_entry() {
    let store = open_store_in_memory().unwrap();
    let repo = KvArticleRepository::new(&store);
    let associations = KvAssociationRepository::new(&store);
    assert!(associations
        .get_all()
        .unwrap()
        .contains_key("introduction-tipe"));

    repo.delete("introduction-tipe").unwrap();

    assert!(!repo
        .get_all()
        .unwrap()
        .iter()
        .any(|article| article.id == "introduction-tipe"));
    assert!(!associations
        .get_all()
        .unwrap()
        .contains_key("introduction-tipe"));
}

#[test]
fn delete_unknown_id_is_not_found() {
    let store = open_store_in_memory().unwrap();
    let err = KvArticleRepository::new(&store).delete("absent").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}
