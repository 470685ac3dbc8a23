//! 字典管理 `/api/v1/dicts`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::models::common::PageResult;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{Dict, DictForm, DictsQueryParam};

pub async fn query_dicts(
    client: &dyn Transport,
    params: Option<&DictsQueryParam>,
) -> Result<PageResult<Dict>, ApiError> {
    let request = ApiRequest::get(api_path(&["dicts"])).query_opt(params)?;
    fetch(client, request, "查询字典列表失败").await
}

pub async fn create_dict(client: &dyn Transport, data: &DictForm) -> Result<Dict, ApiError> {
    let request = ApiRequest::post(api_path(&["dicts"])).json(data)?;
    fetch(client, request, "创建字典失败").await
}

pub async fn delete_dict(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["dicts", id]));
    execute(client, request, "根据ID删除字典失败").await
}

pub async fn get_dict(client: &dyn Transport, id: &str) -> Result<Dict, ApiError> {
    let request = ApiRequest::get(api_path(&["dicts", id]));
    fetch(client, request, "根据ID获取字典失败").await
}

pub async fn update_dict(client: &dyn Transport, id: &str, data: &DictForm) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["dicts", id])).json(data)?;
    execute(client, request, "根据ID更新字典失败").await
}
