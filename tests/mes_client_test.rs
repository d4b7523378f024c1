// ==========================================
// MES 接口集成测试
// ==========================================
// 测试目标: 认证 token 缓存、cookie 构造、层级查询错误处理
// 工具: wiremock 模拟认证/层级接口
// ==========================================


use container_hierarchy::app::{AppError, AppState};
use container_hierarchy::logging;
use container_hierarchy::mes::{ContainerQueryClient, HierarchySource, MesError, SessionManager};
use container_hierarchy::FieldValue;
use test_helpers::{sample_hierarchy, test_config, HIERARCHY_PATH, SIGNIN_PATH};
use wiremock::matchers::{body_string, header, method, path, query_param};
use std::time::Duration;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_signin(server: &MockServer, token: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(token))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn manager_for(server: &MockServer) -> SessionManager {
    let dir = std::env::temp_dir();
    let config = test_config(&dir).with_api_base_url(server.uri());
    SessionManager::new(config).expect("Failed to create SessionManager")
}

#[tokio::test]
async fn test_token_is_requested_once_and_cached() {
    logging::init_test();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .and(body_string("name=svc_test&password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("  TOKEN-123\n"))
        .expect(1)
        .mount(&server)
        .await;

    let manager = manager_for(&server);
    let first = manager.acquire_token().await.expect("first acquire");
    let second = manager.acquire_token().await.expect("second acquire");

    assert_eq!(first.as_str(), "TOKEN-123");
    assert_eq!(first, second);
    assert!(manager.cached_token().is_some());
    // 构建会话也复用缓存
    manager.build_session().await.expect("session");
}

#[tokio::test]
async fn test_rejected_credentials_are_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid user"))
        .expect(1)
        .mount(&server)
        .await;

    let manager = manager_for(&server);
    let result = manager.acquire_token().await;

    match result {
        Err(MesError::Authentication(msg)) => assert!(msg.contains("401"), "msg = {}", msg),
        other => panic!("expected authentication failure, got {:?}", other),
    }
    assert!(manager.cached_token().is_none());
}

#[tokio::test]
async fn test_empty_token_body_is_authentication_failure() {
    let server = MockServer::start().await;
    mount_signin(&server, "   ", 1).await;

    let manager = manager_for(&server);
    assert!(matches!(
        manager.build_session().await,
        Err(MesError::Authentication(_))
    ));
}

#[tokio::test]
async fn test_name_value_token_becomes_cookie() {
    let server = MockServer::start().await;
    mount_signin(&server, "SessID=abc123;", 1).await;

    Mock::given(method("GET"))
        .and(path(HIERARCHY_PATH))
        .and(header("cookie", "SessID=abc123"))
        .and(query_param("SiteCode", "MAN"))
        .and(query_param("WipSerialNumber", "SN-001"))
        .and(query_param("CustomerId", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_hierarchy()))
        .expect(1)
        .mount(&server)
        .await;

    let manager = manager_for(&server);
    let session = manager.build_session().await.expect("session");
    assert_eq!(session.cookie_name(), "SessID");

    let client = ContainerQueryClient::new(session, manager.config().clone());
    let snapshot = client.fetch_hierarchy("SN-001").await.expect("fetch");

    assert_eq!(snapshot.serial_number, "SN-001");
    assert_eq!(snapshot.raw, sample_hierarchy());
    assert_eq!(
        snapshot.hierarchy.container_number,
        Some(FieldValue::from("PLT-0001"))
    );
    assert_eq!(snapshot.hierarchy.serial_count(), 3);
}

#[tokio::test]
async fn test_plain_token_uses_default_cookie_name() {
    let server = MockServer::start().await;
    mount_signin(&server, "opaque-token-value", 1).await;

    Mock::given(method("GET"))
        .and(path(HIERARCHY_PATH))
        .and(header("cookie", "AuthToken=opaque-token-value"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_hierarchy()))
        .expect(1)
        .mount(&server)
        .await;

    let manager = manager_for(&server);
    let session = manager.build_session().await.expect("session");
    assert_eq!(session.cookie_name(), "AuthToken");

    let client = ContainerQueryClient::new(session, manager.config().clone());
    client.fetch_hierarchy("SN-9").await.expect("fetch");
}

#[tokio::test]
async fn test_non_200_body_is_truncated() {
    let server = MockServer::start().await;
    mount_signin(&server, "tok", 1).await;

    let long_body = "x".repeat(1000);
    Mock::given(method("GET"))
        .and(path(HIERARCHY_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string(long_body))
        .mount(&server)
        .await;

    let manager = manager_for(&server);
    let session = manager.build_session().await.expect("session");
    let client = ContainerQueryClient::new(session, manager.config().clone());

    let err = client.fetch_hierarchy("SN-1").await.expect_err("should fail");
    assert_eq!(err.status(), Some(500));
    let message = err.to_string();
    assert_eq!(message, format!("HTTP 500: {}", "x".repeat(200)));
}

#[tokio::test]
async fn test_non_json_success_is_invalid_response() {
    let server = MockServer::start().await;
    mount_signin(&server, "tok", 1).await;

    Mock::given(method("GET"))
        .and(path(HIERARCHY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let manager = manager_for(&server);
    let session = manager.build_session().await.expect("session");
    let client = ContainerQueryClient::new(session, manager.config().clone());

    assert!(matches!(
        client.fetch_hierarchy("SN-1").await,
        Err(MesError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_query_failure() {
    let server = MockServer::start().await;
    mount_signin(&server, "tok", 1).await;

    let manager = manager_for(&server);
    let session = manager.build_session().await.expect("session");

    // 指向已关闭的端口
    let dead_uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let config = manager.config().clone().with_api_base_url(dead_uri);
    let client = ContainerQueryClient::new(session, config);

    match client.fetch_hierarchy("SN-1").await {
        Err(MesError::Query { status, .. }) => assert_eq!(status, None),
        other => panic!("expected transport failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_signin_times_out_as_authentication_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("tok")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = test_config(&std::env::temp_dir()).with_api_base_url(server.uri());
    config.auth_timeout = Duration::from_millis(300);
    let manager = SessionManager::new(config).expect("Failed to create SessionManager");

    let started = std::time::Instant::now();
    let result = manager.acquire_token().await;

    assert!(matches!(result, Err(MesError::Authentication(_))), "got {:?}", result);
    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(manager.cached_token().is_none());
}

#[tokio::test]
async fn test_slow_query_times_out_as_transport_failure() {
    let server = MockServer::start().await;
    mount_signin(&server, "tok", 1).await;
    Mock::given(method("GET"))
        .and(path(HIERARCHY_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_hierarchy())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let manager = manager_for(&server);
    let session = manager.build_session().await.expect("session");
    let mut config = manager.config().clone();
    config.query_timeout = Duration::from_millis(300);
    let client = ContainerQueryClient::new(session, config);

    let started = std::time::Instant::now();
    match client.fetch_hierarchy("SN-1").await {
        Err(MesError::Query { status, .. }) => assert_eq!(status, None),
        other => panic!("expected timeout failure, got {:?}", other),
    }
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn test_connect_fails_on_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SIGNIN_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path()).with_api_base_url(server.uri());

    match AppState::connect(config).await {
        Err(e @ AppError::AuthenticationFailure(_)) => {
            assert_eq!(e.code(), "AUTHENTICATION_FAILURE");
        }
        Err(other) => panic!("unexpected error: {:?}", other),
        Ok(_) => panic!("connect should fail"),
    }
}
