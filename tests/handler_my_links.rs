mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_my_links_requires_auth() {
    let (state, _links) = common::create_test_state();
    let server = common::create_test_server(state);

    server.get("/api/minhas-urls").await.assert_status_unauthorized();
}

#[tokio::test]
async fn test_my_links_default_page() {
    let (state, _links) = common::create_test_state();
    let server = common::create_test_server(state);

    let token = common::register_and_login(&server, "ana@example.com").await;
    for i in 0..15 {
        common::shorten(&server, &format!("https://example.com/{i}"), Some(&token)).await;
    }
    // Anonymous links never show up in anyone's listing
    common::shorten(&server, "https://example.com/anon", None).await;

    let response = server
        .get("/api/minhas-urls")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["totalItens"], 15);
    assert_eq!(json["totalPaginas"], 2);
    assert_eq!(json["paginaAtual"], 1);
    assert_eq!(json["itensPorPagina"], 10);

    let dados = json["dados"].as_array().unwrap();
    assert_eq!(dados.len(), 10);
    assert_eq!(dados[0]["urlOriginal"], "https://example.com/14");
    let code = dados[0]["codigoCurto"].as_str().unwrap();
    assert_eq!(
        dados[0]["urlEncurtadaCompleta"],
        format!("{}/{}", common::BASE_URL, code)
    );
}

#[tokio::test]
async fn test_my_links_second_page() {
    let (state, _links) = common::create_test_state();
    let server = common::create_test_server(state);

    let token = common::register_and_login(&server, "ana@example.com").await;
    for i in 0..15 {
        common::shorten(&server, &format!("https://example.com/{i}"), Some(&token)).await;
    }

    let response = server
        .get("/api/minhas-urls")
        .add_query_param("pagina", 2)
        .add_query_param("limite", 10)
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["dados"].as_array().unwrap().len(), 5);
    assert_eq!(json["paginaAtual"], 2);
}

#[tokio::test]
async fn test_my_links_empty() {
    let (state, _links) = common::create_test_state();
    let server = common::create_test_server(state);

    let token = common::register_and_login(&server, "ana@example.com").await;

    let response = server
        .get("/api/minhas-urls")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["totalItens"], 0);
    assert_eq!(json["totalPaginas"], 0);
    assert!(json["dados"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_my_links_invalid_pagination() {
    let (state, _links) = common::create_test_state();
    let server = common::create_test_server(state);

    let token = common::register_and_login(&server, "ana@example.com").await;

    for (pagina, limite) in [
        ("0", "10"),
        ("1", "0"),
        ("1", "101"),
        ("abc", "10"),
        ("9223372036854775807", "100"),
    ] {
        let response = server
            .get("/api/minhas-urls")
            .add_query_param("pagina", pagina)
            .add_query_param("limite", limite)
            .authorization_bearer(&token)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_update_link_success() {
    let (state, links) = common::create_test_state();
    let server = common::create_test_server(state);

    let token = common::register_and_login(&server, "ana@example.com").await;
    let created = common::shorten(&server, "https://example.com/old", Some(&token)).await;
    let code = created["codigoCurto"].as_str().unwrap();
    let id = links.get_by_code(code).unwrap().id;

    let response = server
        .patch(&format!("/api/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "urlOriginal": "https://example.com/new" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["urlOriginal"], "https://example.com/new");
    assert_eq!(json["codigoCurto"], code);
    assert_eq!(json["cliques"], 0);
    assert_eq!(
        links.get_by_code(code).unwrap().original_url,
        "https://example.com/new"
    );
}

#[tokio::test]
async fn test_update_link_of_other_user_is_forbidden() {
    let (state, links) = common::create_test_state();
    let server = common::create_test_server(state);

    let owner = common::register_and_login(&server, "ana@example.com").await;
    let intruder = common::register_and_login(&server, "bob@example.com").await;

    let created = common::shorten(&server, "https://example.com", Some(&owner)).await;
    let id = links
        .get_by_code(created["codigoCurto"].as_str().unwrap())
        .unwrap()
        .id;

    let response = server
        .patch(&format!("/api/{id}"))
        .authorization_bearer(&intruder)
        .json(&json!({ "urlOriginal": "https://evil.example.com" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    server
        .delete(&format!("/api/{id}"))
        .authorization_bearer(&intruder)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_unknown_link_is_not_found() {
    let (state, _links) = common::create_test_state();
    let server = common::create_test_server(state);

    let token = common::register_and_login(&server, "ana@example.com").await;

    let response = server
        .patch(&format!("/api/{}", Uuid::new_v4()))
        .authorization_bearer(&token)
        .json(&json!({ "urlOriginal": "https://example.com" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_non_uuid_id_is_bad_request() {
    let (state, _links) = common::create_test_state();
    let server = common::create_test_server(state);

    let token = common::register_and_login(&server, "ana@example.com").await;

    server
        .delete("/api/not-a-uuid")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_link_hides_it_from_listing() {
    let (state, links) = common::create_test_state();
    let server = common::create_test_server(state);

    let token = common::register_and_login(&server, "ana@example.com").await;
    let created = common::shorten(&server, "https://example.com", Some(&token)).await;
    let code = created["codigoCurto"].as_str().unwrap().to_string();
    let id = links.get_by_code(&code).unwrap().id;

    let response = server
        .delete(&format!("/api/{id}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["mensagem"],
        "URL encurtada deletada com sucesso."
    );

    let listing = server
        .get("/api/minhas-urls")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();
    assert_eq!(listing["totalItens"], 0);

    // Second delete finds nothing active
    server
        .delete(&format!("/api/{id}"))
        .authorization_bearer(&token)
        .await
        .assert_status_not_found();

    // The code keeps resolving
    server.get(&format!("/{code}")).await.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_shorten_after_delete_creates_new_code() {
    let (state, links) = common::create_test_state();
    let server = common::create_test_server(state);

    let token = common::register_and_login(&server, "ana@example.com").await;
    let first = common::shorten(&server, "https://example.com", Some(&token)).await;
    let id = links
        .get_by_code(first["codigoCurto"].as_str().unwrap())
        .unwrap()
        .id;

    server
        .delete(&format!("/api/{id}"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    let second = common::shorten(&server, "https://example.com", Some(&token)).await;

    assert_ne!(first["codigoCurto"], second["codigoCurto"]);
}
