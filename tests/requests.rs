mod support;

use admin_api::api::captcha::models::CaptchaQueryParam;
use admin_api::api::dict_items::models::DeleteDictItemForm;
use admin_api::api::loggers::models::{LoggerIdsQueryParam, LoggerModuleQueryParam};
use admin_api::api::options::models::{OptionCategory, OptionsQueryParam};
use admin_api::api::roles::models::{DataScope, RoleDataScopeForm, RoleUsersForm};
use admin_api::api::storages::models::StoragesQueryParam;
use admin_api::api::sys_api::models::{ApiMethod, ApisQueryParam, DeleteApiForm};
use admin_api::api::users::models::{UserSearchField, UsersQueryParam};
use admin_api::api::{
    captcha, codegen, common, current, departments, dict_items, dicts, loggers, login, menus,
    options, roles, social, storages, sys_api, users,
};
use admin_api::common::client::models::common::{ResultType, SortDirection, Status};
use admin_api::{PageParam, RequestBody};
use reqwest::Method;
use serde_json::json;

use support::{MockTransport, pairs, sorted_query, success, success_empty};

#[tokio::test]
async fn test_get_user_interpolates_id() {
    let mock = MockTransport::ok(json!({ "id": "42" }));

    users::get_user(&mock, "42").await.unwrap();

    let request = mock.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/api/v1/users/42");
    assert!(request.query.is_empty());
    assert_eq!(request.body, RequestBody::Empty);
}

#[tokio::test]
async fn test_query_params_pass_through() {
    let mock = MockTransport::ok(json!({ "list": [], "total": 0 }));
    let params = UsersQueryParam {
        page: PageParam::new(2, 10),
        search_field: Some(UserSearchField::Nickname),
        search_value: Some("张".to_string()),
        sort_direction: Some(SortDirection::Desc),
        status: Some(Status::Enable),
        ..Default::default()
    };

    users::query_users(&mock, Some(&params)).await.unwrap();

    let request = mock.last_request();
    assert_eq!(request.path, "/api/v1/users");
    assert_eq!(
        sorted_query(&request),
        pairs(&[
            ("current", "2"),
            ("pageSize", "10"),
            ("searchField", "nickname"),
            ("searchValue", "张"),
            ("sortDirection", "desc"),
            ("status", "enable"),
        ])
    );
}

#[tokio::test]
async fn test_absent_query_sends_nothing() {
    let mock = MockTransport::with_responses([
        success(json!({ "list": [] })),
        success(json!({ "list": [] })),
    ]);

    users::query_users(&mock, None).await.unwrap();
    users::query_users(&mock, Some(&UsersQueryParam::default()))
        .await
        .unwrap();

    for request in mock.requests() {
        assert!(request.query.is_empty());
    }
}

#[tokio::test]
async fn test_array_query_repeats_key() {
    let mock = MockTransport::with_responses([success_empty(), success(json!([]))]);

    loggers::delete_loggers_by_ids(
        &mock,
        &LoggerIdsQueryParam {
            ids: vec!["a".into(), "b".into()],
        },
    )
    .await
    .unwrap();

    let params = OptionsQueryParam {
        category: Some(OptionCategory::Mail),
        codes: Some(vec!["smtp_host".into(), "smtp_port".into()]),
    };
    options::query_options(&mock, Some(&params)).await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].path, "/api/v1/loggers/batchDelete");
    assert_eq!(requests[0].query_string().unwrap(), "ids=a&ids=b");

    assert_eq!(
        sorted_query(&requests[1]),
        pairs(&[("category", "MAIL"), ("codes", "smtp_host"), ("codes", "smtp_port")])
    );
}

#[tokio::test]
async fn test_delete_with_json_body() {
    let mock = MockTransport::with_responses([success_empty(), success_empty(), success_empty()]);

    roles::delete_role_users(
        &mock,
        &RoleUsersForm {
            role_id: "r1".into(),
            user_ids: vec!["u1".into(), "u2".into()],
        },
    )
    .await
    .unwrap();
    dict_items::delete_dict_items(&mock, &DeleteDictItemForm { ids: vec!["d1".into()] })
        .await
        .unwrap();
    sys_api::delete_apis(&mock, &DeleteApiForm { ids: vec!["x".into()] })
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].path, "/api/v1/roles/users");
    assert_eq!(
        requests[0].body,
        RequestBody::Json(json!({ "roleId": "r1", "userIds": ["u1", "u2"] }))
    );
    assert_eq!(requests[1].path, "/api/v1/dict-items");
    assert_eq!(requests[1].body, RequestBody::Json(json!({ "ids": ["d1"] })));
    assert_eq!(requests[2].path, "/api/v1/sys-api");
    assert_eq!(requests[2].body, RequestBody::Json(json!({ "ids": ["x"] })));
}

#[tokio::test]
async fn test_json_body_omits_absent_fields() {
    let mock = MockTransport::with_responses([success_empty()]);

    roles::save_role_data_scope(&mock, "r1", &RoleDataScopeForm::new(DataScope::Dept, None))
        .await
        .unwrap();

    let request = mock.last_request();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.path, "/api/v1/roles/r1/data");
    assert_eq!(request.body, RequestBody::Json(json!({ "dataScope": 3 })));
}

#[tokio::test]
async fn test_path_segment_is_encoded() {
    let mock = MockTransport::with_responses([success(json!([])), success(json!({}))]);

    common::query_common_dicts(&mock, "user status").await.unwrap();
    codegen::get_gen_config(&mock, "sys/users").await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].path, "/api/v1/common/dict/user%20status");
    assert_eq!(requests[1].path, "/api/v1/codegen/configs/sys%2Fusers");
}

#[tokio::test]
async fn test_storage_type_keeps_capitalised_key() {
    let mock = MockTransport::ok(json!({ "list": [] }));
    let params = StoragesQueryParam {
        storage_type: Some(2),
        result_type: Some(ResultType::Select),
        ..Default::default()
    };

    storages::query_storages(&mock, Some(&params)).await.unwrap();

    assert_eq!(
        sorted_query(&mock.last_request()),
        pairs(&[("Type", "2"), ("resultType", "select")])
    );
}

#[tokio::test]
async fn test_sys_api_method_is_uppercase() {
    let mock = MockTransport::ok(json!({ "list": [] }));
    let params = ApisQueryParam {
        method: Some(ApiMethod::Patch),
        ..Default::default()
    };

    sys_api::query_apis(&mock, Some(&params)).await.unwrap();

    assert_eq!(
        sorted_query(&mock.last_request()),
        pairs(&[("method", "PATCH")])
    );
}

#[tokio::test]
async fn test_captcha_image_query() {
    let mock = MockTransport::ok(json!({ "id": "c1" }));

    captcha::get_captcha_content(
        &mock,
        &CaptchaQueryParam {
            id: "c1".into(),
            reload: None,
        },
    )
    .await
    .unwrap();

    let request = mock.last_request();
    assert_eq!(request.path, "/api/v1/captcha/image");
    assert_eq!(request.query_string().unwrap(), "id=c1");
}

#[tokio::test]
async fn test_loggers_delete_by_module() {
    let mock = MockTransport::with_responses([success_empty()]);

    loggers::delete_loggers_by_module(
        &mock,
        &LoggerModuleQueryParam {
            module: "auth".into(),
        },
    )
    .await
    .unwrap();

    let request = mock.last_request();
    assert_eq!(request.path, "/api/v1/loggers/deleteByModule");
    assert_eq!(request.query_string().unwrap(), "module=auth");
}

/// 逐个核对无请求体接口的方法和路径
#[tokio::test]
async fn test_method_and_path_table() {
    let mock = MockTransport::new();
    for _ in 0..40 {
        mock.push(success(json!({})));
    }

    let _ = users::enable_user(&mock, "u").await;
    let _ = users::reset_user_password(&mock, "u").await;
    let _ = current::refresh_token(&mock).await;
    let _ = current::query_current_permissions(&mock).await;
    let _ = current::get_current_social_bindings(&mock).await;
    let _ = departments::delete_department(&mock, "d").await;
    let _ = departments::get_department(&mock, "d").await;
    let _ = dicts::delete_dict(&mock, "k").await;
    let _ = menus::delete_menu(&mock, "m").await;
    let _ = loggers::delete_all_loggers(&mock).await;
    let _ = loggers::get_logger_modules(&mock).await;
    let _ = roles::get_role_menu_data(&mock, "r").await;
    let _ = roles::delete_role(&mock, "r").await;
    let _ = social::get_enabled_social_providers(&mock).await;
    let _ = social::query_social_providers(&mock, None).await;
    let _ = social::disable_social_provider(&mock, "p").await;
    let _ = social::get_social_auth_url(&mock, "github").await;
    let _ = social::unbind_social_account(&mock, "github").await;
    let _ = storages::delete_storage(&mock, "s").await;
    let _ = sys_api::sync_apis(&mock).await;
    let _ = sys_api::get_api_tags(&mock).await;
    let _ = codegen::generate_code(&mock, "users").await;
    let _ = common::query_dept_tree(&mock, None).await;
    let _ = common::query_site_option_dicts(&mock).await;
    let _ = captcha::get_captcha(&mock).await;

    let actual: Vec<(Method, String)> = mock
        .requests()
        .into_iter()
        .map(|r| (r.method, r.path))
        .collect();
    let expected = vec![
        (Method::PATCH, "/api/v1/users/u/enable"),
        (Method::PATCH, "/api/v1/users/u/reset-pwd"),
        (Method::POST, "/api/v1/current/refresh-token"),
        (Method::GET, "/api/v1/current/permissions"),
        (Method::GET, "/api/v1/current/social"),
        (Method::DELETE, "/api/v1/departments/d"),
        (Method::GET, "/api/v1/departments/d"),
        (Method::DELETE, "/api/v1/dicts/k"),
        (Method::DELETE, "/api/v1/menus/m"),
        (Method::DELETE, "/api/v1/loggers"),
        (Method::GET, "/api/v1/loggers/modules"),
        (Method::GET, "/api/v1/roles/r/menus"),
        (Method::DELETE, "/api/v1/roles/r"),
        (Method::GET, "/api/v1/social/providers"),
        (Method::GET, "/api/v1/social/providers/page"),
        (Method::PATCH, "/api/v1/social/providers/p/disable"),
        (Method::GET, "/api/v1/social/github"),
        (Method::DELETE, "/api/v1/social/github"),
        (Method::DELETE, "/api/v1/storages/s"),
        (Method::POST, "/api/v1/sys-api/sync"),
        (Method::GET, "/api/v1/sys-api/tags"),
        (Method::POST, "/api/v1/codegen/tables/users/generate"),
        (Method::GET, "/api/v1/common/tree/dept"),
        (Method::GET, "/api/v1/common/dict/option/site"),
        (Method::GET, "/api/v1/captcha/id"),
    ];
    let expected: Vec<(Method, String)> = expected
        .into_iter()
        .map(|(m, p)| (m, p.to_string()))
        .collect();
    assert_eq!(actual, expected);
    for request in mock.requests() {
        assert_eq!(request.body, RequestBody::Empty);
    }
}

/// 带 JSON 请求体的接口逐个核对方法、路径和请求体类型
#[tokio::test]
async fn test_json_body_operations_table() {
    let mock = MockTransport::always(success(json!({})));

    let _ = captcha::send_mail_captcha(&mock, &Default::default()).await;
    let _ = codegen::update_gen_config(&mock, "x1", &Default::default()).await;
    let _ = current::update_current_password(&mock, &Default::default()).await;
    let _ = current::update_current_user(&mock, &Default::default()).await;
    let _ = departments::create_department(&mock, &Default::default()).await;
    let _ = departments::update_department(&mock, "x1", &Default::default()).await;
    let _ = dict_items::delete_dict_items(&mock, &Default::default()).await;
    let _ = dict_items::create_dict_item(&mock, &Default::default()).await;
    let _ = dict_items::update_dict_item(&mock, "x1", &Default::default()).await;
    let _ = dicts::create_dict(&mock, &Default::default()).await;
    let _ = dicts::update_dict(&mock, "x1", &Default::default()).await;
    let _ = login::login(&mock, &Default::default()).await;
    let _ = menus::create_menu(&mock, &Default::default()).await;
    let _ = menus::update_menu(&mock, "x1", &Default::default()).await;
    let _ = options::update_options(&mock, &Default::default()).await;
    let _ = options::reset_options(&mock, &Default::default()).await;
    let _ = roles::create_role(&mock, &Default::default()).await;
    let _ = roles::add_role_users(&mock, &Default::default()).await;
    let _ = roles::delete_role_users(&mock, &Default::default()).await;
    let _ = roles::update_role(&mock, "x1", &Default::default()).await;
    let _ = roles::save_role_data_scope(&mock, "x1", &Default::default()).await;
    let _ = roles::save_role_menu_data(&mock, "x1", &Default::default()).await;
    let _ = social::social_login(&mock, &Default::default()).await;
    let _ = social::create_social_provider(&mock, &Default::default()).await;
    let _ = social::update_social_provider(&mock, "x1", &Default::default()).await;
    let _ = social::bind_social_account(&mock, "x1", &Default::default()).await;
    let _ = storages::create_storage(&mock, &Default::default()).await;
    let _ = storages::update_storage(&mock, "x1", &Default::default()).await;
    let _ = sys_api::delete_apis(&mock, &Default::default()).await;
    let _ = users::create_user(&mock, &Default::default()).await;
    let _ = users::update_user(&mock, "x1", &Default::default()).await;
    let _ = users::update_user_password(&mock, "x1", &Default::default()).await;

    let expected = [
        (Method::POST, "/api/v1/captcha/email"),
        (Method::PUT, "/api/v1/codegen/configs/x1"),
        (Method::PUT, "/api/v1/current/password"),
        (Method::PUT, "/api/v1/current/user"),
        (Method::POST, "/api/v1/departments"),
        (Method::PUT, "/api/v1/departments/x1"),
        (Method::DELETE, "/api/v1/dict-items"),
        (Method::POST, "/api/v1/dict-items"),
        (Method::PUT, "/api/v1/dict-items/x1"),
        (Method::POST, "/api/v1/dicts"),
        (Method::PUT, "/api/v1/dicts/x1"),
        (Method::POST, "/api/v1/login"),
        (Method::POST, "/api/v1/menus"),
        (Method::PUT, "/api/v1/menus/x1"),
        (Method::PUT, "/api/v1/options"),
        (Method::POST, "/api/v1/options/reset"),
        (Method::POST, "/api/v1/roles"),
        (Method::POST, "/api/v1/roles/users"),
        (Method::DELETE, "/api/v1/roles/users"),
        (Method::PUT, "/api/v1/roles/x1"),
        (Method::PUT, "/api/v1/roles/x1/data"),
        (Method::PUT, "/api/v1/roles/x1/menus"),
        (Method::POST, "/api/v1/social/login"),
        (Method::POST, "/api/v1/social/providers"),
        (Method::PUT, "/api/v1/social/providers/x1"),
        (Method::POST, "/api/v1/social/x1"),
        (Method::POST, "/api/v1/storages"),
        (Method::PUT, "/api/v1/storages/x1"),
        (Method::DELETE, "/api/v1/sys-api"),
        (Method::POST, "/api/v1/users"),
        (Method::PUT, "/api/v1/users/x1"),
        (Method::PUT, "/api/v1/users/x1/password"),
    ];
    let requests = mock.requests();
    assert_eq!(requests.len(), expected.len());
    for (request, (method, path)) in requests.iter().zip(expected) {
        assert_eq!(request.method, method, "{}", path);
        assert_eq!(request.path, path);
        assert!(matches!(request.body, RequestBody::Json(_)), "{} 应带 JSON 请求体", path);
        assert!(request.query.is_empty());
    }
}

#[tokio::test]
async fn test_json_bodies_use_wire_field_names() {
    use admin_api::api::options::models::{ResetOptionValueForm, UpdateOption, UpdateOptionsForm};
    use admin_api::api::roles::models::RoleMenuDataForm;
    use admin_api::api::social::models::SocialBindForm;
    use admin_api::api::users::models::{UserForm, UserRole};

    let mock = MockTransport::always(success(json!({})));

    roles::save_role_menu_data(
        &mock,
        "r1",
        &RoleMenuDataForm {
            selects: Some(vec!["m1".into(), "m2".into()]),
        },
    )
    .await
    .unwrap();
    let _ = social::bind_social_account(
        &mock,
        "github",
        &SocialBindForm {
            code: "c".into(),
            state: "s".into(),
        },
    )
    .await;
    options::update_options(
        &mock,
        &UpdateOptionsForm {
            options: vec![UpdateOption {
                id: "o1".into(),
                value: None,
            }],
        },
    )
    .await
    .unwrap();
    options::reset_options(
        &mock,
        &ResetOptionValueForm {
            category: "SITE".into(),
            codes: None,
        },
    )
    .await
    .unwrap();
    let _ = users::create_user(
        &mock,
        &UserForm {
            dept_id: "d1".into(),
            nick_name: "张三".into(),
            user_name: "zhangsan".into(),
            roles: vec![UserRole::by_id("r1")],
            status: Some(Status::Disable),
            ..Default::default()
        },
    )
    .await;

    let bodies: Vec<RequestBody> = mock.requests().into_iter().map(|r| r.body).collect();
    assert_eq!(
        bodies,
        vec![
            RequestBody::Json(json!({ "selects": ["m1", "m2"] })),
            RequestBody::Json(json!({ "code": "c", "state": "s" })),
            RequestBody::Json(json!({ "options": [{ "id": "o1" }] })),
            RequestBody::Json(json!({ "category": "SITE" })),
            RequestBody::Json(json!({
                "deptId": "d1",
                "nickName": "张三",
                "roles": [{ "roleId": "r1" }],
                "status": "disable",
                "userName": "zhangsan",
            })),
        ]
    );
}
