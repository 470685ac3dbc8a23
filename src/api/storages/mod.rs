//! 存储配置 `/api/v1/storages`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::models::common::PageResult;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{Storage, StorageForm, StoragesQueryParam};

pub async fn query_storages(
    client: &dyn Transport,
    params: Option<&StoragesQueryParam>,
) -> Result<PageResult<Storage>, ApiError> {
    let request = ApiRequest::get(api_path(&["storages"])).query_opt(params)?;
    fetch(client, request, "查询存储列表失败").await
}

pub async fn create_storage(client: &dyn Transport, data: &StorageForm) -> Result<Storage, ApiError> {
    let request = ApiRequest::post(api_path(&["storages"])).json(data)?;
    fetch(client, request, "创建存储失败").await
}

pub async fn get_storage(client: &dyn Transport, id: &str) -> Result<Storage, ApiError> {
    let request = ApiRequest::get(api_path(&["storages", id]));
    fetch(client, request, "根据ID获取存储失败").await
}

pub async fn update_storage(
    client: &dyn Transport,
    id: &str,
    data: &StorageForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["storages", id])).json(data)?;
    execute(client, request, "根据ID更新存储配置失败").await
}

pub async fn delete_storage(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["storages", id]));
    execute(client, request, "根据ID删除存储失败").await
}
