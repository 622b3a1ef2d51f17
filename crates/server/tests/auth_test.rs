// Session gate and auth endpoint tests
// Run with: cargo test -p east-store-server --test auth_test

mod common;

use axum::http::{header, Method, StatusCode};
use common::*;
use east_store_server::auth::AuthConfig;
use serde_json::json;

#[tokio::test]
async fn test_protected_paths_without_cookie_redirect_to_login() {
    let app = test_app();

    for path in ["/admin", "/admin/", "/admin/artworks", "/admin-tools", "/admin?tab=1"] {
        let response = send(&app, Method::GET, path, None, None).await;
        assert_eq!(
            response.status(),
            StatusCode::TEMPORARY_REDIRECT,
            "expected redirect for {}",
            path
        );
        assert_eq!(response.headers()[header::LOCATION], "/login");
    }
}

#[tokio::test]
async fn test_redirect_uses_configured_login_path() {
    let app = test_app_with(AuthConfig {
        login_path: "/sign-in".to_string(),
        ..auth_config()
    });

    let response = send(&app, Method::GET, "/admin", None, None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/sign-in");
}

#[tokio::test]
async fn test_gate_admits_any_cookie_value() {
    let app = test_app();

    // Valid credential
    let cookie = session_cookie(SESSION_TOKEN);
    let response = send(&app, Method::GET, "/admin", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The gate checks presence only, so an invalid value is forwarded too
    let cookie = session_cookie("not-the-token");
    let response = send(&app, Method::GET, "/admin", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let overview = json_body(response).await;
    assert_eq!(overview["artworks"], 0);
    assert_eq!(overview["storage"], "memory");

    // Forwarded to the router; no route there
    let response = send(&app, Method::GET, "/admin-tools", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unprotected_paths_are_never_redirected() {
    let app = test_app();

    for path in ["/health", "/api/artworks", "/api/settings", "/api/size-cards"] {
        let response = send(&app, Method::GET, path, None, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", path);
    }

    let response = send(&app, Method::GET, "/login", None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, Method::GET, "/api/auth/check", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_check_without_cookie() {
    let app = test_app();

    let response = send(&app, Method::GET, "/api/auth/check", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await, json!({"authenticated": false}));
}

#[tokio::test]
async fn test_check_with_valid_cookie() {
    let app = test_app();
    let cookie = session_cookie(SESSION_TOKEN);

    let response = send(&app, Method::GET, "/api/auth/check", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "authenticated": true,
            "user": {
                "id": "1",
                "email": "admin@eaststore.com",
                "name": "Admin",
                "store_id": null
            }
        })
    );
}

#[tokio::test]
async fn test_check_with_other_values() {
    let app = test_app();

    for value in ["", "wrong", "test-session-token-extra", "TEST-SESSION-TOKEN"] {
        let cookie = session_cookie(value);
        let response = send(&app, Method::GET, "/api/auth/check", Some(&cookie), None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{:?}", value);
        assert_eq!(json_body(response).await, json!({"authenticated": false}));
    }
}

#[tokio::test]
async fn test_repeated_requests_give_same_decision() {
    let app = test_app();
    let valid = session_cookie(SESSION_TOKEN);
    let invalid = session_cookie("wrong");

    for _ in 0..3 {
        let response = send(&app, Method::GET, "/api/auth/check", Some(&valid), None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, Method::GET, "/api/auth/check", Some(&invalid), None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = send(&app, Method::GET, "/admin", None, None).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

        let response = send(&app, Method::GET, "/admin", Some(&invalid), None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_login_check_logout_flow() {
    let app = test_app();

    // Step 1: Login with the admin credentials
    let response = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.contains("HttpOnly"), "{}", set_cookie);
    assert!(set_cookie.contains("SameSite=Lax"), "{}", set_cookie);
    assert!(set_cookie.contains("Path=/"), "{}", set_cookie);
    assert!(set_cookie.contains("Max-Age=604800"), "{}", set_cookie);

    let body = json_body(response).await;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["id"], "1");

    // Step 2: The issued cookie passes the check endpoint
    let cookie = set_cookie.split(';').next().unwrap().to_string();
    assert_eq!(cookie, session_cookie(SESSION_TOKEN));
    let response = send(&app, Method::GET, "/api/auth/check", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Step 3: Logout clears the cookie
    let response = send(&app, Method::POST, "/api/auth/logout", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cleared = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cleared.starts_with("east_admin_token="), "{}", cleared);
    assert!(cleared.contains("Max-Age=0"), "{}", cleared);
}

#[tokio::test]
async fn test_login_rejects_wrong_credentials() {
    let app = test_app();

    for (email, password) in [
        (ADMIN_EMAIL, "wrong"),
        ("someone@eaststore.com", ADMIN_PASSWORD),
        ("", ""),
    ] {
        let response = send(
            &app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": email, "password": password})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(
            json_body(response).await,
            json!({"error": "Invalid email or password"})
        );
    }
}

#[tokio::test]
async fn test_login_disabled_without_admin_credentials() {
    let app = test_app_with(AuthConfig {
        admin: None,
        ..auth_config()
    });

    let response = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({"email": "admin@eaststore.com", "password": ""})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_custom_cookie_name_and_prefix() {
    let app = test_app_with(AuthConfig {
        cookie_name: "sid".to_string(),
        protected_prefix: "/api/settings".to_string(),
        ..auth_config()
    });

    // /admin is no longer protected
    let response = send(&app, Method::GET, "/admin", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, Method::GET, "/api/settings", None, None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let response = send(&app, Method::GET, "/api/settings", Some("sid=x"), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = format!("sid={}", SESSION_TOKEN);
    let response = send(&app, Method::GET, "/api/auth/check", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
