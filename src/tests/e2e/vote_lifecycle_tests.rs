// End to end: the full router over an in memory store, from submission through reports to deletion.

use axum::Router;
use axum::http::StatusCode;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::app_state::{delete, get, make_test_state, post_json, read_json};

fn app_with_state() -> Router {
    router(make_test_state(), &["http://localhost:5173".to_string()])
}

async fn submit(app: &Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(post_json("/api/vote", body.to_string()))
        .await
        .unwrap();
    read_json(response).await
}

async fn fetch(app: &Router, uri: &str) -> (StatusCode, Value) {
    read_json(app.clone().oneshot(get(uri)).await.unwrap()).await
}

#[tokio::test]
async fn it_should_carry_a_ballot_through_every_endpoint() {
    let app = app_with_state();

    let (status, created) = submit(
        &app,
        json!({
            "userName": "Ada",
            "votes": {
                "Employee of the Year": { "Sept": "Samuel", "Oct": "Elvis", "Nov": "Cecilia" },
                "Team Spirit & Collaboration": { "Sept": "Favour", "Oct": "Gael", "Nov": "Love" },
                "Innovation & Initiative": { "Sept": "Eugene", "Oct": "Steph", "Nov": "Partemus" }
            }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let vote_id = created["voteId"].as_str().unwrap().to_string();

    let (status, second) = submit(
        &app,
        json!({ "userName": "Grace", "votes": { "Employee of the Year": { "Sept": "Elvis" } } }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, duplicate) = submit(
        &app,
        json!({ "userName": " Ada ", "votes": { "Employee of the Year": { "Oct": "Samuel" } } }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(duplicate, json!({ "error": "User has already submitted a vote" }));

    let (_, list) = fetch(&app, "/api/votes").await;
    assert_eq!(list["count"], 2);
    assert_eq!(list["votes"][0]["_id"], second["voteId"]);

    let (_, winners) = fetch(&app, "/api/winners").await;
    assert_eq!(
        winners["Employee of the Year"]["monthly"]["Sept"],
        json!({ "nominee": "Samuel", "votes": 1 })
    );
    assert_eq!(
        winners["Employee of the Year"]["overall"],
        json!({ "nominee": "Elvis", "votes": 2 })
    );

    let (_, admin) = fetch(&app, "/api/admin-summary").await;
    assert_eq!(admin["Employee of the Year"]["Elvis"], 2);

    let (_, summary) = fetch(&app, "/api/votes/summary").await;
    assert_eq!(summary["totalVotes"], 2);
    assert_eq!(summary["categories"]["Employee of the Year"]["Sept"]["Elvis"], 1);

    let (status, record) = fetch(&app, &format!("/api/votes/{vote_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["userName"], "Ada");

    let response = app
        .clone()
        .oneshot(delete(&format!("/api/votes/{vote_id}")))
        .await
        .unwrap();
    let (status, _) = read_json(response).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = fetch(&app, &format!("/api/votes/{vote_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = submit(
        &app,
        json!({ "userName": "Ada", "votes": { "Employee of the Year": { "Oct": "Samuel" } } }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}
