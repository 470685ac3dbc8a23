//! 菜单管理 `/api/v1/menus`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::models::common::PageResult;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{Menu, MenuForm, MenusQueryParam};

pub async fn query_menus(
    client: &dyn Transport,
    params: Option<&MenusQueryParam>,
) -> Result<PageResult<Menu>, ApiError> {
    let request = ApiRequest::get(api_path(&["menus"])).query_opt(params)?;
    fetch(client, request, "查询菜单列表失败").await
}

pub async fn create_menu(client: &dyn Transport, data: &MenuForm) -> Result<Menu, ApiError> {
    let request = ApiRequest::post(api_path(&["menus"])).json(data)?;
    fetch(client, request, "创建菜单失败").await
}

pub async fn get_menu(client: &dyn Transport, id: &str) -> Result<Menu, ApiError> {
    let request = ApiRequest::get(api_path(&["menus", id]));
    fetch(client, request, "根据ID获取菜单失败").await
}

pub async fn update_menu(client: &dyn Transport, id: &str, data: &MenuForm) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["menus", id])).json(data)?;
    execute(client, request, "根据ID更新菜单失败").await
}

pub async fn delete_menu(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["menus", id]));
    execute(client, request, "根据ID删除菜单失败").await
}
