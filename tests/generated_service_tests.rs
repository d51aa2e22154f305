//! Behavior of the checked-in generated module for the sample service.

#![allow(clippy::unwrap_used, clippy::expect_used)]

#[path = "fixtures/service.rs"]
mod service;

use apigen::runtime::{serve_http, ApiRequest, ApiResponse, Service, REQUEST_ID_HEADER};
use http::Method;
use serde_json::{json, Value};
use service::{MyApi, OtherApi};
use std::sync::Arc;
use std::thread;

fn get(path: &str) -> ApiRequest {
    ApiRequest::new(Method::GET, path)
}

fn authed_post(path: &str) -> ApiRequest {
    ApiRequest::new(Method::POST, path).with_header("X-Auth", "100500")
}

fn assert_response(resp: ApiResponse, status: u16, body: Value) {
    assert_eq!(resp.status(), status, "body: {}", resp.body());
    assert_eq!(resp.body(), body);
}

fn valid_create() -> ApiRequest {
    authed_post("/user/create")
        .with_param("login", "mr.moderator")
        .with_param("full_name", "Moderator Moderatorovich")
        .with_param("status", "moderator")
        .with_param("age", "32")
}

#[test]
fn test_profile_ok() {
    let api = MyApi::new();
    assert_response(
        api.serve(&get("/user/profile").with_param("login", "rvasily")),
        200,
        json!({
            "error": "",
            "response": {"id": 42, "login": "rvasily", "full_name": "Vasily Romanov", "status": 20}
        }),
    );
}

#[test]
fn test_profile_any_method_allowed() {
    let api = MyApi::new();
    let req = ApiRequest::new(Method::POST, "/user/profile").with_param("login", "rvasily");
    assert_eq!(api.serve(&req).status(), 200);
}

#[test]
fn test_profile_required_login() {
    let api = MyApi::new();
    assert_response(
        api.serve(&get("/user/profile")),
        400,
        json!({"error": "login must be not empty"}),
    );
}

#[test]
fn test_profile_business_errors() {
    let api = MyApi::new();
    assert_response(
        api.serve(&get("/user/profile").with_param("login", "not_exist_user")),
        404,
        json!({"error": "user not exist"}),
    );
    assert_response(
        api.serve(&get("/user/profile").with_param("login", "bad_user")),
        500,
        json!({"error": "bad user"}),
    );
}

#[test]
fn test_unknown_path() {
    let api = MyApi::new();
    assert_response(
        api.serve(&get("/user/unknown")),
        404,
        json!({"error": "unknown method"}),
    );
}

#[test]
fn test_create_requires_auth() {
    let api = MyApi::new();
    let req = ApiRequest::new(Method::POST, "/user/create").with_param("login", "mr.moderator");
    assert_response(api.serve(&req), 403, json!({"error": "unauthorized"}));

    let req = ApiRequest::new(Method::POST, "/user/create").with_header("X-Auth", "wrong");
    assert_response(api.serve(&req), 403, json!({"error": "unauthorized"}));
}

#[test]
fn test_create_requires_post() {
    let api = MyApi::new();
    let req = ApiRequest::new(Method::GET, "/user/create").with_header("X-Auth", "100500");
    assert_response(api.serve(&req), 406, json!({"error": "bad method"}));
}

#[test]
fn test_auth_checked_before_method() {
    let api = MyApi::new();
    assert_response(
        api.serve(&get("/user/create")),
        403,
        json!({"error": "unauthorized"}),
    );
}

#[test]
fn test_create_ok_then_conflict() {
    let api = MyApi::new();
    assert_response(
        api.serve(&valid_create()),
        200,
        json!({"error": "", "response": {"id": 43}}),
    );
    assert_response(
        api.serve(&get("/user/profile").with_param("login", "mr.moderator")),
        200,
        json!({
            "error": "",
            "response": {
                "id": 43,
                "login": "mr.moderator",
                "full_name": "Moderator Moderatorovich",
                "status": 10
            }
        }),
    );
    assert_response(
        api.serve(&valid_create()),
        409,
        json!({"error": "user mr.moderator exist"}),
    );
}

#[test]
fn test_create_login_rules() {
    let api = MyApi::new();
    assert_response(
        api.serve(&valid_create().with_param("login", "")),
        400,
        json!({"error": "login must be not empty"}),
    );
    assert_response(
        api.serve(&valid_create().with_param("login", "new_m")),
        400,
        json!({"error": "login len must be >= 10"}),
    );
    // length counts characters, not bytes
    assert_response(
        api.serve(&valid_create().with_param("login", "логинчик")),
        400,
        json!({"error": "login len must be >= 10"}),
    );
    assert_eq!(
        api.serve(&valid_create().with_param("login", "логинчик12"))
            .status(),
        200
    );
}

#[test]
fn test_create_status_enum_and_default() {
    let api = MyApi::new();
    assert_response(
        api.serve(&valid_create().with_param("status", "adm")),
        400,
        json!({"error": "status must be one of [user, moderator, admin]"}),
    );

    let resp = api.serve(
        &authed_post("/user/create")
            .with_param("login", "new_user_default")
            .with_param("age", "20"),
    );
    assert_eq!(resp.status(), 200);
    let profile = api.serve(&get("/user/profile").with_param("login", "new_user_default"));
    assert_eq!(profile.body()["response"]["status"], json!(0));
}

#[test]
fn test_create_age_rules() {
    let api = MyApi::new();
    assert_response(
        api.serve(&valid_create().with_param("age", "ten")),
        400,
        json!({"error": "age must be int"}),
    );
    assert_response(
        api.serve(&valid_create().with_param("age", "")),
        400,
        json!({"error": "age must be int"}),
    );
    assert_response(
        api.serve(&valid_create().with_param("age", "-1")),
        400,
        json!({"error": "age must be >= 0"}),
    );
    assert_response(
        api.serve(&valid_create().with_param("age", "129")),
        400,
        json!({"error": "age must be <= 128"}),
    );
    assert_eq!(
        api.serve(&valid_create().with_param("age", "128")).status(),
        200
    );
}

#[test]
fn test_first_violation_wins() {
    let api = MyApi::new();
    let req = authed_post("/user/create")
        .with_param("login", "short")
        .with_param("status", "bogus")
        .with_param("age", "-5");
    assert_response(
        api.serve(&req),
        400,
        json!({"error": "login len must be >= 10"}),
    );
}

#[test]
fn test_create_plain_error_is_500() {
    let api = MyApi::new();
    assert_response(
        api.serve(&valid_create().with_param("login", "bad_username")),
        500,
        json!({"error": "bad user"}),
    );
}

#[test]
fn test_other_api_routes() {
    let api = OtherApi;
    let req = authed_post("/user/create")
        .with_param("username", "moderator")
        .with_param("account_name", "John Smith")
        .with_param("level", "5");
    assert_response(
        api.serve(&req),
        200,
        json!({
            "error": "",
            "response": {"id": 12, "login": "moderator", "full_name": "John Smith", "level": 5}
        }),
    );

    let req = authed_post("/user/create")
        .with_param("username", "moderator")
        .with_param("class", "barbarian")
        .with_param("level", "5");
    assert_response(
        api.serve(&req),
        400,
        json!({"error": "class must be one of [warrior, sorcerer, rouge]"}),
    );

    let req = authed_post("/user/create")
        .with_param("username", "moderator")
        .with_param("level", "51");
    assert_response(api.serve(&req), 400, json!({"error": "level must be <= 50"}));

    let req = authed_post("/user/create")
        .with_param("username", "bad_username")
        .with_param("level", "1");
    assert_response(api.serve(&req), 500, json!({"error": "bad user"}));

    assert_response(
        api.serve(&get("/user/profile")),
        404,
        json!({"error": "unknown method"}),
    );
}

#[test]
fn test_context_is_passed_through() {
    let api = OtherApi;
    let req = get("/ping");
    let expected = req.context().request_id.to_string();
    assert_response(
        api.serve(&req),
        200,
        json!({"error": "", "response": expected}),
    );
}

fn search(code: &str) -> ApiRequest {
    get("/search").with_param("code", code)
}

#[test]
fn test_search_code_length_bounds() {
    let api = OtherApi;
    for code in ["ab", "abc", "abcd", "эюя"] {
        let resp = api.serve(&search(code));
        assert_eq!(resp.status(), 200, "code {code:?}: {}", resp.body());
        assert_eq!(resp.body()["response"]["code"], json!(code));
    }
    assert_response(
        api.serve(&search("a")),
        400,
        json!({"error": "code len must be >= 2"}),
    );
    assert_response(
        api.serve(&search("abcde")),
        400,
        json!({"error": "code len must be <= 4"}),
    );
}

#[test]
fn test_search_page_bounds_and_default() {
    let api = OtherApi;
    assert_response(
        api.serve(&search("abc").with_param("page", "7")),
        200,
        json!({"error": "", "response": {"code": "abc", "page": 7}}),
    );
    assert_response(
        api.serve(&search("abc")),
        200,
        json!({"error": "", "response": {"code": "abc", "page": 3}}),
    );
    assert_eq!(
        api.serve(&search("abc").with_param("page", "")).body()["response"]["page"],
        json!(3)
    );
    assert_response(
        api.serve(&search("abc").with_param("page", "abc")),
        400,
        json!({"error": "page must be int"}),
    );
    assert_response(
        api.serve(&search("abc").with_param("page", "15")),
        400,
        json!({"error": "page must be <= 10"}),
    );
    assert_response(
        api.serve(&search("abc").with_param("page", "0")),
        400,
        json!({"error": "page must be >= 1"}),
    );
    // out of u8 range fails to parse
    assert_response(
        api.serve(&search("abc").with_param("page", "300")),
        400,
        json!({"error": "page must be int"}),
    );
}

#[test]
fn test_serve_http_end_to_end() {
    let api = MyApi::new();
    let req = http::Request::builder()
        .method("POST")
        .uri("/user/create?age=44")
        .header("X-Auth", "100500")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(b"login=over.the.http&full_name=Http+User".to_vec())
        .unwrap();
    let resp = serve_http(&api, req);
    assert_eq!(resp.status(), http::StatusCode::OK);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body, json!({"error": "", "response": {"id": 43}}));

    let id = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
    let req = http::Request::builder()
        .uri("/ping")
        .header(REQUEST_ID_HEADER, id)
        .body(Vec::new())
        .unwrap();
    let resp = serve_http(&OtherApi, req);
    let body: Value = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(body["response"], json!(id));
}

#[test]
fn test_service_shared_across_threads() {
    let api = Arc::new(MyApi::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let api = Arc::clone(&api);
            thread::spawn(move || {
                let req = authed_post("/user/create")
                    .with_param("login", format!("parallel_user_{}", i))
                    .with_param("age", "30");
                api.serve(&req).status()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 200);
    }
    assert_eq!(api.user_count(), 9);
}
