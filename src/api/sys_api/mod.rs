//! 接口登记 `/api/v1/sys-api`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::models::common::PageResult;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{ApisQueryParam, DeleteApiForm, SyncResult, SysApi};

pub async fn query_apis(
    client: &dyn Transport,
    params: Option<&ApisQueryParam>,
) -> Result<PageResult<SysApi>, ApiError> {
    let request = ApiRequest::get(api_path(&["sys-api"])).query_opt(params)?;
    fetch(client, request, "查询接口列表失败").await
}

/// 批量删除，ID 放在请求体
pub async fn delete_apis(client: &dyn Transport, data: &DeleteApiForm) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["sys-api"])).json(data)?;
    execute(client, request, "批量删除接口失败").await
}

/// 从 Swagger 文档同步接口
pub async fn sync_apis(client: &dyn Transport) -> Result<SyncResult, ApiError> {
    let request = ApiRequest::post(api_path(&["sys-api", "sync"]));
    fetch(client, request, "同步 Swagger 接口失败").await
}

pub async fn get_api_tags(client: &dyn Transport) -> Result<Vec<String>, ApiError> {
    let request = ApiRequest::get(api_path(&["sys-api", "tags"]));
    fetch(client, request, "获取所有接口分组标签失败").await
}

pub async fn get_api(client: &dyn Transport, id: &str) -> Result<SysApi, ApiError> {
    let request = ApiRequest::get(api_path(&["sys-api", id]));
    fetch(client, request, "根据ID获取接口失败").await
}
