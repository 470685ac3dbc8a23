//! 代码生成 `/api/v1/codegen`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::models::common::PageResult;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{
    GenConfig, GenConfigUpdateForm, GenConfigsQueryParam, GenFieldConfig,
    GenFieldConfigsQueryParam, GenerateCodeResult,
};

pub async fn query_gen_configs(
    client: &dyn Transport,
    params: Option<&GenConfigsQueryParam>,
) -> Result<PageResult<GenConfig>, ApiError> {
    let request = ApiRequest::get(api_path(&["codegen", "configs"])).query_opt(params)?;
    fetch(client, request, "查询生成配置列表失败").await
}

pub async fn update_gen_config(
    client: &dyn Transport,
    table_name: &str,
    data: &GenConfigUpdateForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["codegen", "configs", table_name])).json(data)?;
    execute(client, request, "更新生成配置失败").await
}

pub async fn get_gen_config(client: &dyn Transport, table_name: &str) -> Result<GenConfig, ApiError> {
    let request = ApiRequest::get(api_path(&["codegen", "configs", table_name]));
    fetch(client, request, "获取生成配置详情失败").await
}

pub async fn query_gen_field_configs(
    client: &dyn Transport,
    params: Option<&GenFieldConfigsQueryParam>,
) -> Result<PageResult<GenFieldConfig>, ApiError> {
    let request = ApiRequest::get(api_path(&["codegen", "fields"])).query_opt(params)?;
    fetch(client, request, "查询字段配置列表失败").await
}

/// 按表生成代码，结果只返回文件内容，不落盘
pub async fn generate_code(
    client: &dyn Transport,
    table_name: &str,
) -> Result<GenerateCodeResult, ApiError> {
    let request = ApiRequest::post(api_path(&["codegen", "tables", table_name, "generate"]));
    fetch(client, request, "生成代码失败").await
}
