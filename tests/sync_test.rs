//! Project-index sync and enrichment against a scripted host.

mod common;

use common::{RepoRecordBuilder, ScriptedHost, commit_record};
use portfolio_terminal::models::NodeKind;
use portfolio_terminal::sync::ProjectIndex;

fn host_with_portfolio() -> ScriptedHost {
    ScriptedHost::new()
        .with_repo(
            RepoRecordBuilder::new(1, "void-engine")
                .description("A bare metal WebGL renderer")
                .topics(&["webgl", "graphics"])
                .build(),
        )
        .with_repo(RepoRecordBuilder::new(2, "forked-thing").fork().build())
        .with_repo(RepoRecordBuilder::new(3, "neural-net-viz").language("Rust").build())
        .with_commits(
            "enterk0d3/void-engine",
            vec![
                commit_record(
                    "a1b2c3d4e5f6",
                    "Merge pull request #3 from enterk0d3/feature",
                    Some("2024-06-05T14:32:10Z"),
                    Some("enterk0d3"),
                ),
                commit_record("b2c3d4e5f6a1", "v1.2.0 release", Some("2024-06-01T09:00:00Z"), None),
                commit_record("c3d4e5f6a1b2", "fix typo", None, Some("enterk0d3")),
            ],
        )
        .with_commits(
            "enterk0d3/neural-net-viz",
            vec![commit_record("d4e5f6a1b2c3", "initial import", None, None)],
        )
}

#[test]
fn test_sync_filters_forks_and_maps_fields() {
    let mut index = ProjectIndex::new(host_with_portfolio(), "enterk0d3");
    index.sync();

    let titles: Vec<&str> = index.projects().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["VOID_ENGINE", "NEURAL_NET_VIZ"]);

    let first = &index.projects()[0];
    assert_eq!(first.repo, "github.com/enterk0d3/void-engine");
    assert_eq!(first.tags, ["webgl", "graphics"]);
    assert_eq!(first.description, "A bare metal WebGL renderer");

    // No topics set: the primary language stands in
    assert_eq!(index.projects()[1].tags, ["Rust"]);
}

#[test]
fn test_sync_enriches_first_project_with_classified_history() {
    let mut index = ProjectIndex::new(host_with_portfolio(), "enterk0d3");
    index.sync();

    let first = &index.projects()[0];
    assert_eq!(first.commit_hash, "a1b2c3d");

    let history = first.history.as_ref().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].kind, NodeKind::Merge);
    assert_eq!(history[0].label, "MERGE PULL REQUEST #3 FROM ENTERK0D3/FEATURE");
    assert_eq!(history[0].date, "2024-06-05");
    assert_eq!(history[1].kind, NodeKind::Release);
    assert_eq!(history[2].kind, NodeKind::Commit);
    assert_eq!(history[2].date, "UNKNOWN");

    // The second project stays lazy until selected
    assert!(index.projects()[1].history.is_none());
}

#[test]
fn test_select_fetches_history_once() {
    let host = std::rc::Rc::new(host_with_portfolio());
    let mut index = ProjectIndex::new(std::rc::Rc::clone(&host), "enterk0d3");
    index.sync();

    index.select("3");
    assert_eq!(index.active().unwrap().title, "NEURAL_NET_VIZ");
    assert_eq!(index.active().unwrap().commit_hash, "d4e5f6a");

    index.select("1");
    index.select("3");

    let commit_calls =
        host.calls.borrow().iter().filter(|c| c.starts_with("commits:")).count();
    // One eager fetch at sync plus one on-demand fetch for project 3
    assert_eq!(commit_calls, 2);
}

#[test]
fn test_resync_replaces_projects_wholesale() {
    let mut index = ProjectIndex::new(host_with_portfolio(), "enterk0d3");
    index.sync();
    index.select("3");

    index.sync();
    assert_eq!(index.active().unwrap().id, "1");
    assert!(index.projects()[1].history.is_none());
}
