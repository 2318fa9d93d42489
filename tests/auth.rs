mod common;

use actix_web::{http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::json;
use taskpad::build_app;

use common::{login, memory_state, register, send};

#[test_log::test(actix_rt::test)]
async fn test_register_and_login_flow() {
    let (state, _) = memory_state();
    let app = test::init_service(build_app(state)).await;

    let (status, body) = register(&app, "Alice", "a@x.com", "secret1").await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], "a@x.com");
    assert!(body["id"].is_string());

    let (status, body) = login(&app, "a@x.com", "secret1").await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert!(!body["token"].as_str().unwrap_or_default().is_empty());
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["email"], "a@x.com");
}

#[actix_rt::test]
async fn test_duplicate_registration_conflicts() {
    let (state, _) = memory_state();
    let app = test::init_service(build_app(state)).await;

    let (status, _) = register(&app, "Alice", "dup@x.com", "secret1").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = register(&app, "Impostor", "dup@x.com", "other").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({ "error": "Email already registered" }));

    // The first account is untouched.
    let (status, body) = login(&app, "dup@x.com", "secret1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Alice");
}

#[actix_rt::test]
async fn test_responses_never_expose_password_hash() {
    let (state, _) = memory_state();
    let app = test::init_service(build_app(state)).await;

    let (_, registered) = register(&app, "Alice", "a@x.com", "secret1").await;
    let mut keys: Vec<&String> = registered.as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["email", "id", "name"]);

    let (_, logged_in) = login(&app, "a@x.com", "secret1").await;
    let mut keys: Vec<&String> = logged_in["user"].as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["email", "id", "name"]);

    for body in [&registered, &logged_in] {
        let text = body.to_string();
        assert!(!text.contains("password"), "leaked: {}", text);
        assert!(!text.contains("$2b$"), "leaked: {}", text);
    }
}

#[actix_rt::test]
async fn test_invalid_credentials_are_indistinguishable() {
    let (state, _) = memory_state();
    let app = test::init_service(build_app(state)).await;
    register(&app, "Alice", "a@x.com", "secret1").await;

    let wrong_password = login(&app, "a@x.com", "not-it").await;
    let unknown_email = login(&app, "ghost@x.com", "secret1").await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password.1, json!({ "error": "Invalid credentials" }));
}

#[actix_rt::test]
async fn test_email_match_is_exact() {
    let (state, _) = memory_state();
    let app = test::init_service(build_app(state)).await;
    register(&app, "Alice", "a@x.com", "secret1").await;

    let (status, _) = login(&app, "A@X.COM", "secret1").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_invalid_registration_inputs() {
    let (state, _) = memory_state();
    let app = test::init_service(build_app(state)).await;

    let test_cases = vec![
        (json!({ "email": "a@x.com", "password": "pw" }), "missing name"),
        (json!({ "name": "A", "password": "pw" }), "missing email"),
        (json!({ "name": "A", "email": "a@x.com" }), "missing password"),
        (json!({ "name": "", "email": "a@x.com", "password": "pw" }), "empty name"),
        (json!({ "name": "A", "email": "", "password": "pw" }), "empty email"),
        (json!({ "name": "A", "email": "a@x.com", "password": "" }), "empty password"),
        (json!({}), "empty body"),
    ];

    for (payload, description) in test_cases {
        let (status, body) = send(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/register")
                .set_json(&payload),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", description);
        assert_eq!(body, json!({ "error": "Missing fields" }), "{}", description);
    }
}

#[actix_rt::test]
async fn test_invalid_login_inputs() {
    let (state, _) = memory_state();
    let app = test::init_service(build_app(state)).await;

    for payload in [
        json!({ "password": "pw" }),
        json!({ "email": "a@x.com" }),
        json!({ "email": "", "password": "" }),
    ] {
        let (status, body) = send(
            &app,
            test::TestRequest::post().uri("/api/auth/login").set_json(&payload),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(body["error"], "Missing fields");
    }
}

#[actix_rt::test]
async fn test_malformed_body_is_bad_request() {
    let (state, _) = memory_state();
    let app = test::init_service(build_app(state)).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid request body" }));
}

#[actix_rt::test]
async fn test_unknown_route_is_json_404() {
    let (state, _) = memory_state();
    let app = test::init_service(build_app(state)).await;

    let (status, body) = send(&app, test::TestRequest::get().uri("/api/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}
