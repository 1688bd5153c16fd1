//! Service layer tests against in-memory repositories

use catalog_core::entities::{Importance, VoteAction};
use catalog_core::ToolFilter;
use catalog_service::{
    ImportOptions, ImportService, ListOptions, ReadmeFetcher, ToolService, VoteService,
};

use catalog_service::testing::{context, tool, InMemoryCatalog};

fn sample_catalog() -> std::sync::Arc<InMemoryCatalog> {
    let mut docker = tool("docker-curriculum", "Containers", 5);
    docker.importance = Importance::Recommended;
    let mut kubectl = tool("kubectl", "Kubernetes", 9);
    kubectl.importance = Importance::Essential;
    let mut lens = tool("lens", "Kubernetes", 2);
    lens.is_open_source = false;

    InMemoryCatalog::with_tools(vec![lens, docker, kubectl, tool("ansible", "Configuration", 5)])
}

#[tokio::test]
async fn test_list_tools_sorted_by_upvotes_across_pages() {
    let ctx = context(sample_catalog(), ReadmeFetcher::disabled(), 3);
    let tools = ToolService::new(&ctx).list_tools(ListOptions::default()).await.unwrap();

    let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["kubectl", "ansible", "docker-curriculum", "lens"]);
    assert!(tools.iter().all(|t| t.readme.is_none()));
}

#[tokio::test]
async fn test_list_tools_applies_filter() {
    let ctx = context(sample_catalog(), ReadmeFetcher::disabled(), 1000);
    let service = ToolService::new(&ctx);

    let filter = ToolFilter::new().with_category("kubernetes").open_source_only(true);
    let tools = service.list_tools(ListOptions::new(filter)).await.unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, "kubectl");

    let filter = ToolFilter::new().with_search("CURRIC");
    let tools = service.list_tools(ListOptions::new(filter)).await.unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, "docker-curriculum");

    let filter = ToolFilter::new()
        .with_importance(Importance::Essential)
        .with_importance(Importance::Recommended);
    let tools = service.list_tools(ListOptions::new(filter)).await.unwrap();
    assert_eq!(tools.len(), 2);
}

#[tokio::test]
async fn test_get_tool_not_found() {
    let ctx = context(sample_catalog(), ReadmeFetcher::disabled(), 1000);
    let err = ToolService::new(&ctx).get_tool("terraform", true).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_category_stats() {
    let ctx = context(sample_catalog(), ReadmeFetcher::disabled(), 1000);
    let stats = ToolService::new(&ctx).category_stats().await.unwrap();

    assert_eq!(stats[0].category, "Kubernetes");
    assert_eq!(stats[0].count, 2);
    assert_eq!(stats.len(), 3);
}

#[tokio::test]
async fn test_toggle_round_trip() {
    let catalog = sample_catalog();
    let ctx = context(catalog.clone(), ReadmeFetcher::disabled(), 1000);
    let votes = VoteService::new(&ctx);

    let added = votes.toggle_upvote("docker-curriculum", "127.0.0.1").await.unwrap();
    assert_eq!(added.action, VoteAction::Added);
    assert_eq!(added.upvotes, 6);
    assert!(added.voted);
    assert_eq!(added.message, "Upvote added");
    assert!(votes.has_upvoted("docker-curriculum", "127.0.0.1").await.unwrap());

    let removed = votes.toggle_upvote("docker-curriculum", "127.0.0.1").await.unwrap();
    assert_eq!(removed.action, VoteAction::Removed);
    assert_eq!(removed.upvotes, 5);
    assert!(!removed.voted);
    assert!(!votes.has_upvoted("docker-curriculum", "127.0.0.1").await.unwrap());

    let other = votes.toggle_upvote("docker-curriculum", "10.0.0.2").await.unwrap();
    assert_eq!(other.action, VoteAction::Added);
    assert_eq!(other.upvotes, 6);
    assert_eq!(catalog.upvotes("docker-curriculum"), Some(6));
}

#[tokio::test]
async fn test_toggle_unknown_tool_changes_nothing() {
    let catalog = sample_catalog();
    let ctx = context(catalog.clone(), ReadmeFetcher::disabled(), 1000);

    let err = VoteService::new(&ctx)
        .toggle_upvote("does-not-exist", "127.0.0.1")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(catalog.upvotes("kubectl"), Some(9));
}

#[tokio::test]
async fn test_toggle_rejects_empty_name() {
    let ctx = context(sample_catalog(), ReadmeFetcher::disabled(), 1000);
    let err = VoteService::new(&ctx).toggle_upvote("", "127.0.0.1").await.unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_toggle_does_not_trim_names() {
    let catalog = sample_catalog();
    let ctx = context(catalog.clone(), ReadmeFetcher::disabled(), 1000);

    let err = VoteService::new(&ctx)
        .toggle_upvote(" kubectl", "127.0.0.1")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(catalog.upvotes("kubectl"), Some(9));
}

#[tokio::test]
async fn test_import_merges_and_keeps_counters() {
    let catalog = sample_catalog();
    let ctx = context(catalog.clone(), ReadmeFetcher::disabled(), 1000);

    let json = r#"[
        {"name": "kubectl", "description": "Kubernetes CLI", "category": "Kubernetes", "stars": 100},
        {"name": "Terraform", "category": "IaC", "tags": ["iac"]},
        {"name": "terraform", "description": "Infrastructure as code", "tags": ["iac", "hcl"]},
        {"name": "", "category": "Broken"},
        {"name": "bad-url", "githubUrl": "nope"}
    ]"#;

    let report = ImportService::new(&ctx)
        .import_json(json, ImportOptions::default())
        .await
        .unwrap();

    assert_eq!(report.received, 5);
    assert_eq!(report.merged, 1);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.imported, 2);
    assert_eq!(report.reset, None);

    assert_eq!(catalog.upvotes("kubectl"), Some(9));
    assert_eq!(catalog.upvotes("Terraform"), Some(0));

    let terraform = ToolService::new(&ctx).get_tool("Terraform", false).await.unwrap();
    assert_eq!(terraform.description, "Infrastructure as code");
    assert_eq!(terraform.tags, vec!["iac", "hcl"]);
    assert_eq!(terraform.importance, Importance::Essential);
}

#[tokio::test]
async fn test_import_reset_and_dry_run() {
    let catalog = sample_catalog();
    let ctx = context(catalog.clone(), ReadmeFetcher::disabled(), 1000);
    let importer = ImportService::new(&ctx);
    let json = r#"[{"name": "helm", "category": "Kubernetes"}]"#;

    let dry = importer
        .import_json(json, ImportOptions { reset: true, dry_run: true })
        .await
        .unwrap();
    assert_eq!(dry.imported, 0);
    assert_eq!(catalog.tool_names().len(), 4);

    let report = importer
        .import_json(json, ImportOptions { reset: true, dry_run: false })
        .await
        .unwrap();
    assert_eq!(report.reset, Some(4));
    assert_eq!(report.imported, 1);
    assert_eq!(catalog.tool_names(), vec!["helm".to_string()]);
}

#[tokio::test]
async fn test_failed_reset_import_leaves_catalog_intact() {
    let catalog = sample_catalog();
    let ctx = context(catalog.clone(), ReadmeFetcher::disabled(), 1000);
    VoteService::new(&ctx)
        .toggle_upvote("kubectl", "10.0.0.7")
        .await
        .unwrap();
    catalog.reject_writes_of("argocd");

    let json = r#"[
        {"name": "helm", "category": "Kubernetes"},
        {"name": "argocd", "category": "GitOps"}
    ]"#;
    let result = ImportService::new(&ctx)
        .import_json(json, ImportOptions { reset: true, dry_run: false })
        .await;

    assert!(result.is_err());
    assert_eq!(catalog.tool_names().len(), 4);
    assert!(!catalog.tool_names().contains(&"helm".to_string()));
    assert_eq!(catalog.upvotes("kubectl"), Some(10));
    assert_eq!(catalog.vote_count(), 1);
}

#[tokio::test]
async fn test_failed_merge_import_writes_nothing() {
    let catalog = sample_catalog();
    let ctx = context(catalog.clone(), ReadmeFetcher::disabled(), 1000);
    catalog.reject_writes_of("argocd");

    let json = r#"[
        {"name": "kubectl", "description": "Changed", "category": "Kubernetes"},
        {"name": "argocd", "category": "GitOps"}
    ]"#;
    let result = ImportService::new(&ctx)
        .import_json(json, ImportOptions::default())
        .await;

    assert!(result.is_err());
    let kubectl = ToolService::new(&ctx).get_tool("kubectl", false).await.unwrap();
    assert_ne!(kubectl.description, "Changed");
}

#[tokio::test]
async fn test_import_rejects_malformed_json() {
    let ctx = context(sample_catalog(), ReadmeFetcher::disabled(), 1000);
    let err = ImportService::new(&ctx)
        .import_json("{\"name\": \"not-an-array\"}", ImportOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}
