mod support;

use axum::http::StatusCode;
use configs::AuthPolicy;
use sea_orm::ConnectionTrait;
use serde_json::json;

use support::{build_app, build_app_with_db, request, seed_source_types, send, token};

#[tokio::test]
async fn create_then_list_returns_the_new_branch() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    let tok = token();

    let (status, created) = send(
        &app,
        request("POST", "/api/branches", Some(&tok), Some(json!({"areaId": 7, "branchName": "North"}))),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["areaId"], 7);
    assert_eq!(created["branchName"], "North");
    assert_eq!(created["isActive"], true);

    let (status, list) = send(&app, request("GET", "/api/branches", Some(&tok), None)).await?;
    assert_eq!(status, StatusCode::OK);
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], created);
    Ok(())
}

#[tokio::test]
async fn create_honours_explicit_inactive_flag() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    let (status, created) = send(
        &app,
        request(
            "POST",
            "/api/branches",
            Some(&token()),
            Some(json!({"areaId": 1, "branchName": "Closed", "isActive": false})),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["isActive"], false);
    Ok(())
}

#[tokio::test]
async fn missing_or_mistyped_fields_are_bad_requests() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    let tok = token();

    let (status, body) =
        send(&app, request("POST", "/api/branches", Some(&tok), Some(json!({"areaId": 1})))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");

    let (status, _) = send(
        &app,
        request("POST", "/api/branches", Some(&tok), Some(json!({"areaId": "x", "branchName": "A"}))),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        request("POST", "/api/branches", Some(&tok), Some(json!({"areaId": 1, "branchName": "  "}))),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let (_, list) = send(&app, request("GET", "/api/branches", Some(&tok), None)).await?;
    assert!(list.as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn full_create_then_details() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    let tok = token();
    let ids = seed_source_types(&app, &["Web", "Phone"]).await?;

    let (status, created) = send(
        &app,
        request(
            "POST",
            "/api/branch/full-create",
            Some(&tok),
            Some(json!({
                "areaId": 3,
                "branchName": "Central",
                "sourceTypes": [
                    {"id": ids[0], "sourceNames": ["A", "B"]},
                    {"id": ids[1], "sourceNames": []}
                ]
            })),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let branch_id = created["branchId"].as_i64().unwrap();

    let (status, details) =
        send(&app, request("GET", &format!("/api/branch/{branch_id}/details"), Some(&tok), None)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["id"], branch_id);
    assert_eq!(details["branchName"], "Central");
    assert_eq!(details["isActive"], true);

    let types = details["sourceTypes"].as_array().unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0], json!({"id": ids[0], "name": "Web"}));
    assert_eq!(types[1], json!({"id": ids[1], "name": "Phone"}));

    let names = details["sourceNames"].as_array().unwrap();
    assert_eq!(names.len(), 2);
    assert_eq!(names[0]["name"], "A");
    assert_eq!(names[1]["name"], "B");
    assert!(names.iter().all(|n| n["sourceTypeId"] == ids[0]));

    let (status, rows) = send(
        &app,
        request("GET", &format!("/api/branch/{branch_id}/source-names"), Some(&tok), None),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows.as_array().unwrap().len(), 2);
    assert_eq!(rows[0]["branchId"], branch_id);
    Ok(())
}

#[tokio::test]
async fn full_create_with_unknown_source_type_writes_nothing() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    let tok = token();
    let ids = seed_source_types(&app, &["Web"]).await?;

    let (status, body) = send(
        &app,
        request(
            "POST",
            "/api/branch/full-create",
            Some(&tok),
            Some(json!({
                "areaId": 3,
                "branchName": "Ghost",
                "sourceTypes": [{"id": ids[0], "sourceNames": ["A"]}, {"id": 999}]
            })),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let (_, list) = send(&app, request("GET", "/api/branches", Some(&tok), None)).await?;
    assert!(list.as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn linked_create_records_source_types() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    let tok = token();
    let ids = seed_source_types(&app, &["Web", "Phone", "Mail"]).await?;

    let (status, created) = send(
        &app,
        request(
            "POST",
            "/api/branch",
            Some(&tok),
            Some(json!({"areaId": 2, "branchName": "Harbour", "sourceTypeIds": [ids[2], ids[0]]})),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let branch_id = created["branchId"].as_i64().unwrap();

    let (_, details) =
        send(&app, request("GET", &format!("/api/branch/{branch_id}/details"), Some(&tok), None)).await?;
    let types: Vec<i64> = details["sourceTypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(types, vec![ids[0], ids[2]]);
    assert!(details["sourceNames"].as_array().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn details_and_toggle_of_missing_branch_are_not_found() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    let tok = token();

    let (status, body) = send(&app, request("GET", "/api/branch/4242/details", Some(&tok), None)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Branch not found");

    for _ in 0..2 {
        let (status, body) =
            send(&app, request("PUT", "/api/branches/4242/toggle-active", Some(&tok), None)).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Branch not found");
    }
    Ok(())
}

#[tokio::test]
async fn toggling_twice_restores_the_flag() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    let tok = token();
    let (_, created) = send(
        &app,
        request("POST", "/api/branches", Some(&tok), Some(json!({"areaId": 1, "branchName": "Flip"}))),
    )
    .await?;
    let uri = format!("/api/branches/{}/toggle-active", created["id"]);

    let (status, first) = send(&app, request("PUT", &uri, Some(&tok), None)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["isActive"], false);

    let (_, second) = send(&app, request("PUT", &uri, Some(&tok), None)).await?;
    assert_eq!(second["isActive"], true);
    assert_eq!(second, created);
    Ok(())
}

#[tokio::test]
async fn concurrent_toggle_pairs_keep_the_initial_value() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    let tok = token();
    let (_, created) = send(
        &app,
        request("POST", "/api/branches", Some(&tok), Some(json!({"areaId": 1, "branchName": "Busy"}))),
    )
    .await?;
    let uri = format!("/api/branches/{}/toggle-active", created["id"]);

    let mut handles = Vec::new();
    for _ in 0..6 {
        let app = app.clone();
        let req = request("PUT", &uri, Some(&tok), None);
        handles.push(tokio::spawn(async move { send(&app, req).await }));
    }
    for h in handles {
        let (status, _) = h.await??;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, list) = send(&app, request("GET", "/api/branches", Some(&tok), None)).await?;
    assert_eq!(list[0]["isActive"], true);
    Ok(())
}

#[tokio::test]
async fn duplicate_source_type_label_conflicts() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    seed_source_types(&app, &["Web"]).await?;
    let (status, body) = send(
        &app,
        request("POST", "/api/source-types", Some(&token()), Some(json!({"sourceType": "Web"}))),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");

    let (_, list) = send(&app, request("GET", "/api/source-types", Some(&token()), None)).await?;
    assert_eq!(list.as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn non_numeric_branch_ids_get_a_json_bad_request() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    let tok = token();
    let cases = [
        ("GET", "/api/branch/abc/details"),
        ("GET", "/api/branch/99999999999/source-names"),
        ("PUT", "/api/branches/x1/toggle-active"),
    ];
    for (method, uri) in cases {
        let (status, body) = send(&app, request(method, uri, Some(&tok), None)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
        assert_eq!(body["error"], "Bad Request", "{method} {uri}");
        assert!(body["message"].is_string(), "{method} {uri}: {body}");
    }
    Ok(())
}

#[tokio::test]
async fn branch_source_names_lists_every_branch_with_type_labels() -> anyhow::Result<()> {
    let app = build_app(AuthPolicy::Strict).await?;
    let tok = token();
    let ids = seed_source_types(&app, &["Web", "Phone"]).await?;

    let mut branch_ids = Vec::new();
    for (name, type_id, source) in [("East", ids[0], "Desk"), ("West", ids[1], "Hotline")] {
        let (status, created) = send(
            &app,
            request(
                "POST",
                "/api/branch/full-create",
                Some(&tok),
                Some(json!({
                    "areaId": 1,
                    "branchName": name,
                    "sourceTypes": [{"id": type_id, "sourceNames": [source]}]
                })),
            ),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
        branch_ids.push(created["branchId"].as_i64().unwrap());
    }

    let (status, all) = send(&app, request("GET", "/api/branch-source-names", Some(&tok), None)).await?;
    assert_eq!(status, StatusCode::OK);
    let rows = all.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["branchId"], branch_ids[0]);
    assert_eq!(rows[0]["sourceName"], "Desk");
    assert_eq!(rows[0]["sourceTypeName"], "Web");
    assert_eq!(rows[1]["sourceTypeId"], ids[1]);
    assert_eq!(rows[1]["sourceTypeName"], "Phone");
    assert_eq!(rows[1]["isActive"], true);

    let (_, own) = send(
        &app,
        request("GET", &format!("/api/branch/{}/source-names", branch_ids[1]), Some(&tok), None),
    )
    .await?;
    assert_eq!(own, json!([rows[1]]));
    Ok(())
}

#[tokio::test]
async fn persistence_failures_surface_as_500_with_context() -> anyhow::Result<()> {
    let (app, db) = build_app_with_db(AuthPolicy::Strict).await?;
    let tok = token();
    db.execute_unprepared("DROP TABLE branch").await?;

    let (status, body) = send(&app, request("GET", "/api/branches", Some(&tok), None)).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");
    assert!(
        body["message"].as_str().unwrap().starts_with("Failed to get branches: "),
        "{body}"
    );

    let (status, body) = send(&app, request("PUT", "/api/branches/1/toggle-active", Some(&tok), None)).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["message"].as_str().unwrap().starts_with("Failed to update branch status: "),
        "{body}"
    );
    Ok(())
}
