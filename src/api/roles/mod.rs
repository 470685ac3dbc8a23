//! 角色管理 `/api/v1/roles`
//!
//! 除常规增删改查外，还包括角色成员维护、数据权限和菜单权限的读写。
//! 权限缓存的失效由服务端负责。

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::models::common::PageResult;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{
    Role, RoleDataScope, RoleDataScopeForm, RoleForm, RoleMenuData, RoleMenuDataForm,
    RoleUsersForm, RolesQueryParam,
};

pub async fn query_roles(
    client: &dyn Transport,
    params: Option<&RolesQueryParam>,
) -> Result<PageResult<Role>, ApiError> {
    let request = ApiRequest::get(api_path(&["roles"])).query_opt(params)?;
    fetch(client, request, "查询角色列表失败").await
}

pub async fn create_role(client: &dyn Transport, data: &RoleForm) -> Result<Role, ApiError> {
    let request = ApiRequest::post(api_path(&["roles"])).json(data)?;
    fetch(client, request, "创建角色失败").await
}

/// 批量添加用户到角色
pub async fn add_role_users(client: &dyn Transport, data: &RoleUsersForm) -> Result<(), ApiError> {
    let request = ApiRequest::post(api_path(&["roles", "users"])).json(data)?;
    execute(client, request, "批量添加用户到角色失败").await
}

/// 批量移除角色下的用户（DELETE 带请求体）
pub async fn delete_role_users(
    client: &dyn Transport,
    data: &RoleUsersForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["roles", "users"])).json(data)?;
    execute(client, request, "批量移除角色下的用户失败").await
}

pub async fn get_role(client: &dyn Transport, id: &str) -> Result<Role, ApiError> {
    let request = ApiRequest::get(api_path(&["roles", id]));
    fetch(client, request, "根据ID获取角色失败").await
}

pub async fn update_role(client: &dyn Transport, id: &str, data: &RoleForm) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["roles", id])).json(data)?;
    execute(client, request, "根据ID更新角色失败").await
}

pub async fn delete_role(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["roles", id]));
    execute(client, request, "根据ID删除角色失败").await
}

pub async fn get_role_data_scope(client: &dyn Transport, id: &str) -> Result<RoleDataScope, ApiError> {
    let request = ApiRequest::get(api_path(&["roles", id, "data"]));
    fetch(client, request, "获取角色的数据权限失败").await
}

pub async fn save_role_data_scope(
    client: &dyn Transport,
    id: &str,
    data: &RoleDataScopeForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["roles", id, "data"])).json(data)?;
    execute(client, request, "保存角色的数据权限失败").await
}

pub async fn get_role_menu_data(client: &dyn Transport, id: &str) -> Result<RoleMenuData, ApiError> {
    let request = ApiRequest::get(api_path(&["roles", id, "menus"]));
    fetch(client, request, "获取角色的菜单权限数据失败").await
}

pub async fn save_role_menu_data(
    client: &dyn Transport,
    id: &str,
    data: &RoleMenuDataForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["roles", id, "menus"])).json(data)?;
    execute(client, request, "保存角色的菜单权限数据失败").await
}
