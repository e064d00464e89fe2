use carnet_core::{
    open_store_in_memory, ArticleDraft, ArticlePatch, ContentService, RepoError, TagDraft,
};

#[test]
fn create_article_with_tags_writes_both_collections() {
    let store = open_store_in_memory().unwrap();
    let service = ContentService::new(&store);

    let tag = service
        .create_tag(&TagDraft {
            name: "Modélisation".to_string(),
            color: None,
        })
        .unwrap();
    let article = service
        .create_article_with_tags(
            &ArticleDraft {
                title: "Premier Modèle".to_string(),
                content: "<p>contenu</p>".to_string(),
                ..ArticleDraft::default()
            },
            &[tag.id.clone()],
        )
        .unwrap();

    let snapshot = service.snapshot().unwrap();
    assert!(snapshot.articles.iter().any(|a| a.id == article.id));
    assert_eq!(
        snapshot.associations.get(&article.id).unwrap(),
        &vec![tag.id]
    );
}

#[test]
fn create_article_without_tags_leaves_associations_untouched() {
    let store = open_store_in_memory().unwrap();
    let service = ContentService::new(&store);

    let article = service
        .create_article_with_tags(
            &ArticleDraft {
                title: "Sans Balises".to_string(),
                content: "<p>contenu</p>".to_string(),
                ..ArticleDraft::default()
            },
            &[],
        )
        .unwrap();

    let snapshot = service.snapshot().unwrap();
    assert!(!snapshot.associations.contains_key(&article.id));
}

#[test]
fn update_article_with_tags_replaces_the_assignment() {
    let store = open_store_in_memory().unwrap();
    let service = ContentService::new(&store);

    service
        .update_article_with_tags(
            "introduction-tipe",
            &ArticlePatch {
                summary: Some("résumé révisé".to_string()),
                ..ArticlePatch::default()
            },
            &["implementation".to_string()],
        )
        .unwrap();

    let snapshot = service.snapshot().unwrap();
    let intro = snapshot
        .articles
        .iter()
        .find(|a| a.id == "introduction-tipe")
        .unwrap();
    assert_eq!(intro.summary, "résumé révisé");
    assert_eq!(
        snapshot.associations.get("introduction-tipe").unwrap(),
        &vec!["implementation".to_string()]
    );
}

#[test]
fn deleting_through_the_service_cascades_like_the_repositories() {
    let store = open_store_in_memory().unwrap();
    let service = ContentService::new(&store);

    service.delete_article("introduction-tipe").unwrap();
    service.delete_tag("recherche").unwrap();

    let snapshot = service.snapshot().unwrap();
    assert_eq!(snapshot.articles.len(), 1);
    assert!(!snapshot.associations.contains_key("introduction-tipe"));
    assert_eq!(
        snapshot
            .associations
            .get("recherche-bibliographique")
            .unwrap(),
        &Vec::<String>::new()
    );

    let err = service.delete_article("introduction-tipe").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}
