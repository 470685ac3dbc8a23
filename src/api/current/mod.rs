//! 当前登录用户 `/api/v1/current`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::form::build_form;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{
    LoginToken, Menu, UpdateCurrentAvatarBody, UpdateCurrentUser, UpdatePassword, User,
    UserPermission, UserSocial,
};

/// 修改头像（multipart）
pub async fn update_current_avatar(
    client: &dyn Transport,
    data: Option<UpdateCurrentAvatarBody>,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["current", "avatar"])).multipart(build_form(data));
    execute(client, request, "修改头像失败").await
}

pub async fn logout(client: &dyn Transport) -> Result<(), ApiError> {
    let request = ApiRequest::post(api_path(&["current", "logout"]));
    execute(client, request, "登出失败").await
}

/// 当前用户可见的路由菜单树
pub async fn query_current_menus(client: &dyn Transport) -> Result<Vec<Menu>, ApiError> {
    let request = ApiRequest::get(api_path(&["current", "menus"]));
    fetch(client, request, "获取路由信息失败").await
}

pub async fn update_current_password(
    client: &dyn Transport,
    data: &UpdatePassword,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["current", "password"])).json(data)?;
    execute(client, request, "修改密码失败").await
}

pub async fn query_current_permissions(client: &dyn Transport) -> Result<UserPermission, ApiError> {
    let request = ApiRequest::get(api_path(&["current", "permissions"]));
    fetch(client, request, "查询权限数据失败").await
}

/// 刷新访问令牌，新令牌需调用方自行替换
pub async fn refresh_token(client: &dyn Transport) -> Result<LoginToken, ApiError> {
    let request = ApiRequest::post(api_path(&["current", "refresh-token"]));
    fetch(client, request, "刷新当前访问令牌失败").await
}

pub async fn get_current_social_bindings(client: &dyn Transport) -> Result<Vec<UserSocial>, ApiError> {
    let request = ApiRequest::get(api_path(&["current", "social"]));
    fetch(client, request, "查询当前用户已绑定的第三方账号（需登录）失败").await
}

pub async fn get_user_info(client: &dyn Transport) -> Result<User, ApiError> {
    let request = ApiRequest::get(api_path(&["current", "user"]));
    fetch(client, request, "获取用户信息失败").await
}

pub async fn update_current_user(
    client: &dyn Transport,
    data: &UpdateCurrentUser,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["current", "user"])).json(data)?;
    execute(client, request, "修改基础信息失败").await
}
