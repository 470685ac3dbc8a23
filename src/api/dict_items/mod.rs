//! 字典项 `/api/v1/dict-items`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::models::common::PageResult;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{DeleteDictItemForm, DictItem, DictItemForm, DictItemsQueryParam};

/// 批量删除字典项（DELETE 带请求体）
pub async fn delete_dict_items(
    client: &dyn Transport,
    data: &DeleteDictItemForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["dict-items"])).json(data)?;
    execute(client, request, "批量删除字典项失败").await
}

pub async fn query_dict_items(
    client: &dyn Transport,
    params: Option<&DictItemsQueryParam>,
) -> Result<PageResult<DictItem>, ApiError> {
    let request = ApiRequest::get(api_path(&["dict-items"])).query_opt(params)?;
    fetch(client, request, "查询字典项列表失败").await
}

pub async fn create_dict_item(
    client: &dyn Transport,
    data: &DictItemForm,
) -> Result<DictItem, ApiError> {
    let request = ApiRequest::post(api_path(&["dict-items"])).json(data)?;
    fetch(client, request, "创建字典项失败").await
}

pub async fn get_dict_item(client: &dyn Transport, id: &str) -> Result<DictItem, ApiError> {
    let request = ApiRequest::get(api_path(&["dict-items", id]));
    fetch(client, request, "根据ID获取字典项失败").await
}

pub async fn update_dict_item(
    client: &dyn Transport,
    id: &str,
    data: &DictItemForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["dict-items", id])).json(data)?;
    execute(client, request, "根据ID更新字典项失败").await
}
