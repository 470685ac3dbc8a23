//! 用户管理 `/api/v1/users`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::models::common::PageResult;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{PassWordResult, UpdatePassWordForm, User, UserForm, UsersQueryParam};

/// 查询用户列表
pub async fn query_users(
    client: &dyn Transport,
    params: Option<&UsersQueryParam>,
) -> Result<PageResult<User>, ApiError> {
    let request = ApiRequest::get(api_path(&["users"])).query_opt(params)?;
    fetch(client, request, "查询用户列表失败").await
}

pub async fn create_user(client: &dyn Transport, data: &UserForm) -> Result<User, ApiError> {
    let request = ApiRequest::post(api_path(&["users"])).json(data)?;
    fetch(client, request, "创建用户失败").await
}

pub async fn update_user(
    client: &dyn Transport,
    id: &str,
    data: &UserForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["users", id])).json(data)?;
    execute(client, request, "更新用户信息失败").await
}

pub async fn delete_user(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["users", id]));
    execute(client, request, "根据ID删除用户失败").await
}

pub async fn get_user(client: &dyn Transport, id: &str) -> Result<User, ApiError> {
    let request = ApiRequest::get(api_path(&["users", id]));
    fetch(client, request, "根据ID获取用户失败").await
}

/// 禁用账号
pub async fn disable_user(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::patch(api_path(&["users", id, "disable"]));
    execute(client, request, "禁用账号失败").await
}

/// 启用账号
pub async fn enable_user(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::patch(api_path(&["users", id, "enable"]));
    execute(client, request, "启用账号失败").await
}

/// 修改指定用户的密码，密码需先做 MD5
pub async fn update_user_password(
    client: &dyn Transport,
    id: &str,
    data: &UpdatePassWordForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["users", id, "password"])).json(data)?;
    execute(client, request, "修改用户密码失败").await
}

/// 重置密码，返回服务端生成的新密码
pub async fn reset_user_password(
    client: &dyn Transport,
    id: &str,
) -> Result<PassWordResult, ApiError> {
    let request = ApiRequest::patch(api_path(&["users", id, "reset-pwd"]));
    fetch(client, request, "重置用户密码失败").await
}
