use gh_owner::error::OwnerError;
use gh_owner::github::GithubClient;
use gh_owner::orgs::OrganizationLister;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_login(server: &MockServer, login: &str) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": login })))
        .mount(server)
        .await;
}

fn org_page(logins: &[&str], total: usize, end_cursor: Option<&str>) -> serde_json::Value {
    let nodes: Vec<_> = logins.iter().map(|login| json!({ "login": login })).collect();
    json!({
        "data": {
            "user": {
                "organizations": {
                    "totalCount": total,
                    "nodes": nodes,
                    "pageInfo": {
                        "hasNextPage": end_cursor.is_some(),
                        "endCursor": end_cursor,
                    }
                }
            }
        }
    })
}

fn client(server: &MockServer) -> GithubClient {
    let uri = server.uri();
    GithubClient::new(Some("test-token"), Some(&uri), false).unwrap()
}

#[tokio::test]
async fn single_page_list_merges_the_user_first() {
    let server = MockServer::start().await;
    mock_login(&server, "alice").await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(org_page(&["acme-corp", "globex"], 2, None)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let lister = OrganizationLister::new(client(&server));
    let list = lister.list_all().await.unwrap();

    assert_eq!(list.user, "alice");
    assert_eq!(list.logins(), ["alice", "acme-corp", "globex"]);
    assert_eq!(list.total_count, 3);
}

#[tokio::test]
async fn pagination_threads_the_end_cursor() {
    let server = MockServer::start().await;
    mock_login(&server, "alice").await;

    // Second page: matched only when the request carries the first page's
    // cursor. Higher priority so it wins over the catch-all first-page mock.
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("cursor-page-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(org_page(&["globex"], 2, None)))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(org_page(&["acme-corp"], 2, Some("cursor-page-1"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let lister = OrganizationLister::new(client(&server));
    let list = lister.list_all().await.unwrap();

    assert_eq!(list.logins(), ["alice", "acme-corp", "globex"]);
    assert_eq!(list.total_count, 3);
}

#[tokio::test]
async fn graphql_errors_surface_as_fetch_errors() {
    let server = MockServer::start().await;
    mock_login(&server, "alice").await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "something exploded" }]
        })))
        .mount(&server)
        .await;

    let err = OrganizationLister::new(client(&server))
        .list_all()
        .await
        .unwrap_err();

    match err {
        OwnerError::Fetch(message) => assert!(message.contains("something exploded")),
        other => panic!("expected a fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthenticated_login_is_an_auth_resolution_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials"
        })))
        .mount(&server)
        .await;

    let err = OrganizationLister::new(client(&server))
        .list_all()
        .await
        .unwrap_err();

    assert!(matches!(err, OwnerError::AuthResolution(_)));
}
