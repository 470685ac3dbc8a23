mod support;

use admin_api::api::{current, login, monitor, users};
use admin_api::api::login::models::LoginForm;
use admin_api::ApiError;
use serde_json::json;

use support::{MockTransport, failure, success, success_empty};

#[tokio::test]
async fn test_success_returns_data() {
    let mock = MockTransport::ok(json!({ "id": "u1", "userName": "admin", "nickName": "管理员" }));

    let user = current::get_user_info(&mock).await.unwrap();
    assert_eq!(user.id.as_deref(), Some("u1"));
    assert_eq!(user.user_name.as_deref(), Some("admin"));
    assert_eq!(user.nick_name.as_deref(), Some("管理员"));
}

#[tokio::test]
async fn test_server_message_is_surfaced() {
    let mock = MockTransport::with_responses([failure("用户不存在")]);

    let err = users::get_user(&mock, "404").await.unwrap_err();
    assert!(err.is_rejected());
    assert_eq!(err.to_string(), "用户不存在");
    assert_eq!(err.message(), "用户不存在");
}

#[tokio::test]
async fn test_fallback_message_when_error_missing() {
    let mock = MockTransport::with_responses([json!({ "success": false })]);

    let err = users::get_user(&mock, "1").await.unwrap_err();
    assert_eq!(err.to_string(), "根据ID获取用户失败");

    let mock = MockTransport::with_responses([json!({ "success": false, "error": {} })]);
    let err = login::login(&mock, &LoginForm::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "账号登录失败");
}

#[tokio::test]
async fn test_missing_data_is_rejected() {
    let mock = MockTransport::with_responses([success_empty(), success(json!(null))]);

    let err = monitor::get_monitor_data(&mock).await.unwrap_err();
    assert_eq!(err.to_string(), "获取系统监控信息失败");

    let err = monitor::get_monitor_data(&mock).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
}

#[tokio::test]
async fn test_failure_wins_over_data() {
    let mock = MockTransport::with_responses([json!({
        "success": false,
        "data": { "id": "1" },
        "error": { "message": "无权限" }
    })]);

    let err = users::get_user(&mock, "1").await.unwrap_err();
    assert_eq!(err.to_string(), "无权限");
}

#[tokio::test]
async fn test_void_operations_ignore_data() {
    let mock = MockTransport::with_responses([success_empty(), success(json!({ "extra": true }))]);

    current::logout(&mock).await.unwrap();
    users::delete_user(&mock, "7").await.unwrap();
    assert_eq!(mock.requests().len(), 2);
}

#[tokio::test]
async fn test_void_operation_failure_uses_fallback() {
    let mock = MockTransport::with_responses([json!({ "success": false, "error": null })]);

    let err = users::disable_user(&mock, "7").await.unwrap_err();
    assert_eq!(err.to_string(), "禁用账号失败");
}

#[tokio::test]
async fn test_shape_mismatch_is_invalid_response() {
    let mock = MockTransport::ok(json!("not an object"));

    let err = users::get_user(&mock, "1").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_transport_error_passes_through() {
    let mock = MockTransport::new();

    let err = current::logout(&mock).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_page_result_decodes() {
    let mock = MockTransport::ok(json!({
        "list": [{ "id": "1" }, { "id": "2" }],
        "total": 2
    }));

    let page = users::query_users(&mock, None).await.unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.list.len(), 2);
    assert_eq!(page.list[1].id.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_non_object_error_falls_back() {
    let mock = MockTransport::with_responses([
        json!({ "success": false, "error": "boom" }),
        json!({ "success": false, "error": { "message": 500 } }),
    ]);

    let err = users::get_user(&mock, "1").await.unwrap_err();
    assert!(err.is_rejected());
    assert_eq!(err.to_string(), "根据ID获取用户失败");

    let err = current::logout(&mock).await.unwrap_err();
    assert_eq!(err.to_string(), "登出失败");
}

#[tokio::test]
async fn test_success_flag_is_truthy() {
    let mock = MockTransport::with_responses([
        json!({ "success": null }),
        json!({ "success": 0, "error": { "message": "会话已过期" } }),
        json!({ "success": true, "error": "" }),
        json!({ "success": 1, "data": { "id": "u1" } }),
    ]);

    let err = current::logout(&mock).await.unwrap_err();
    assert_eq!(err.to_string(), "登出失败");

    let err = current::logout(&mock).await.unwrap_err();
    assert_eq!(err.to_string(), "会话已过期");

    current::logout(&mock).await.unwrap();

    let user = users::get_user(&mock, "u1").await.unwrap();
    assert_eq!(user.id.as_deref(), Some("u1"));
}

#[tokio::test]
async fn test_non_object_body_falls_back() {
    let mock = MockTransport::with_responses([json!("ok"), json!([1, 2])]);

    let err = current::logout(&mock).await.unwrap_err();
    assert_eq!(err.to_string(), "登出失败");

    let err = monitor::get_monitor_data(&mock).await.unwrap_err();
    assert_eq!(err.to_string(), "获取系统监控信息失败");
}
