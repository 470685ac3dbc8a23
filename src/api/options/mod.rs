//! 系统参数 `/api/v1/options`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{OptionsQueryParam, ResetOptionValueForm, SysOption, UpdateOptionsForm};

pub async fn update_options(client: &dyn Transport, data: &UpdateOptionsForm) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["options"])).json(data)?;
    execute(client, request, "批量更新参数失败").await
}

pub async fn query_options(
    client: &dyn Transport,
    params: Option<&OptionsQueryParam>,
) -> Result<Vec<SysOption>, ApiError> {
    let request = ApiRequest::get(api_path(&["options"])).query_opt(params)?;
    fetch(client, request, "查询参数列表失败").await
}

pub async fn reset_options(
    client: &dyn Transport,
    data: &ResetOptionValueForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::post(api_path(&["options", "reset"])).json(data)?;
    execute(client, request, "重置参数为默认值失败").await
}
