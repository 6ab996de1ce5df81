use httpmock::prelude::*;
use pastebin::{Error, Expiration, Language, NewPaste, Visibility};

use super::utils::{DEV_KEY, SESSION_KEY, paste_xml, pastebin_for, user_xml};

async fn mock_login(server: &MockServer) -> (httpmock::Mock<'_>, httpmock::Mock<'_>) {
    let login = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/api_login.php")
                .body(format!(
                    "api_dev_key={DEV_KEY}&api_user_name=wiz_kitty&api_user_password=p%40ss%20word"
                ));
            then.status(200).body(SESSION_KEY);
        })
        .await;
    let details = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/api_post.php")
                .body_contains("api_option=userdetails")
                .body_contains(format!("api_user_key={SESSION_KEY}"));
            then.status(200).body(user_xml("1"));
        })
        .await;
    (login, details)
}

#[tokio::test]
async fn login_loads_preferences() {
    let server = MockServer::start_async().await;
    let (login, details) = mock_login(&server).await;

    let user = pastebin_for(&server)
        .login("wiz_kitty", "p@ss word")
        .await
        .unwrap();

    login.assert_async().await;
    details.assert_async().await;
    assert_eq!(user.name(), "wiz_kitty");
    assert_eq!(user.preferred_language(), &Language::RUST);
    assert_eq!(user.preferred_expiration(), Expiration::OneDay);
    assert_eq!(user.preferred_visibility(), Visibility::Unlisted);
    assert_eq!(user.website(), "https://example.com");
    assert_eq!(user.email(), "kitty@example.com");
    assert_eq!(user.location(), "New York");
    assert!(user.is_pro());
}

#[tokio::test]
async fn bad_credentials_surface_as_api_error() {
    let server = MockServer::start_async().await;
    let details = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/api_post.php");
            then.status(200).body(user_xml("0"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/api_login.php");
            then.status(200)
                .body("Bad API request, invalid login");
        })
        .await;

    let err = pastebin_for(&server)
        .login("wiz_kitty", "wrong")
        .await
        .unwrap_err();

    assert!(matches!(&err, Error::Api { message } if message == "Bad API request, invalid login"));
    assert_eq!(details.hits_async().await, 0);
}

#[tokio::test]
async fn user_paste_defaults_to_preferences() {
    let server = MockServer::start_async().await;
    mock_login(&server).await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/api_post.php")
                .body_contains("api_option=paste")
                .body_contains(format!("api_user_key={SESSION_KEY}"))
                .body_contains("api_paste_format=rust")
                .body_contains("api_paste_private=1")
                .body_contains("api_paste_expire_date=1D");
            then.status(200).body(server.url("/mine0001"));
        })
        .await;

    let user = pastebin_for(&server)
        .login("wiz_kitty", "p@ss word")
        .await
        .unwrap();
    let paste = user.create_paste(NewPaste::new("let x = 1;")).await.unwrap();

    create.assert_async().await;
    assert_eq!(paste.key(), "mine0001");
    assert_eq!(paste.language(), &Language::RUST);
    assert_eq!(paste.visibility(), Visibility::Unlisted);
    assert_eq!(paste.expiration(), Expiration::OneDay);
}

#[tokio::test]
async fn list_and_delete() {
    let server = MockServer::start_async().await;
    mock_login(&server).await;
    let listing = format!(
        "{}{}",
        paste_xml(&server, "keep0001", 0),
        paste_xml(&server, "drop0002", 2)
    );
    let list = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/api_post.php")
                .body_contains("api_option=list")
                .body_contains("api_results_limit=25");
            then.status(200).body(listing);
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/api_post.php")
                .body_contains("api_option=delete")
                .body_contains("api_paste_key=drop0002");
            then.status(200).body("Paste Removed");
        })
        .await;

    let user = pastebin_for(&server)
        .login("wiz_kitty", "p@ss word")
        .await
        .unwrap();
    let pastes = user.list_pastes(25).await.unwrap();
    list.assert_async().await;
    assert_eq!(pastes.len(), 2);
    assert_eq!(pastes[1].visibility(), Visibility::Private);

    user.delete_paste(&pastes[1]).await.unwrap();
    delete.assert_async().await;
}

#[tokio::test]
async fn empty_listing_is_empty() {
    let server = MockServer::start_async().await;
    mock_login(&server).await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/api_post.php")
                .body_contains("api_option=list");
            then.status(200).body("No pastes found.");
        })
        .await;

    let user = pastebin_for(&server)
        .login("wiz_kitty", "p@ss word")
        .await
        .unwrap();
    assert!(user.list_pastes(50).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_limit_is_checked_before_sending() {
    let server = MockServer::start_async().await;
    mock_login(&server).await;
    let list = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/api_post.php")
                .body_contains("api_option=list");
            then.status(200).body("");
        })
        .await;

    let user = pastebin_for(&server)
        .login("wiz_kitty", "p@ss word")
        .await
        .unwrap();

    for limit in [0, 1001] {
        let err = user.list_pastes(limit).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }), "{err:?}");
    }
    assert_eq!(list.hits_async().await, 0);
}
