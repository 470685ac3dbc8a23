//! 公共字典、部门树与通用上传 `/api/v1/common`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::form::build_form;
use crate::common::client::transport::{ApiRequest, Transport, api_path, fetch};

use models::{
    CommonDict, DeptTreeQueryParam, OptionDictsQueryParam, Tree, UploadCommonFileBody,
    UploadResult,
};

/// 查询参数字典
pub async fn query_option_dicts(
    client: &dyn Transport,
    params: Option<&OptionDictsQueryParam>,
) -> Result<Vec<CommonDict>, ApiError> {
    let request = ApiRequest::get(api_path(&["common", "dict", "option"])).query_opt(params)?;
    fetch(client, request, "查询参数字典失败").await
}

/// 站点配置（登录页等未登录场景使用）
pub async fn query_site_option_dicts(client: &dyn Transport) -> Result<Vec<CommonDict>, ApiError> {
    let request = ApiRequest::get(api_path(&["common", "dict", "option", "site"]));
    fetch(client, request, "查询系统配置参数失败").await
}

pub async fn query_role_dicts(client: &dyn Transport) -> Result<Vec<CommonDict>, ApiError> {
    let request = ApiRequest::get(api_path(&["common", "dict", "role"]));
    fetch(client, request, "查询角色字典失败").await
}

pub async fn query_user_dicts(client: &dyn Transport) -> Result<Vec<CommonDict>, ApiError> {
    let request = ApiRequest::get(api_path(&["common", "dict", "user"]));
    fetch(client, request, "查询用户字典失败").await
}

/// 按字典编码查询字典项
pub async fn query_common_dicts(
    client: &dyn Transport,
    code: &str,
) -> Result<Vec<CommonDict>, ApiError> {
    let request = ApiRequest::get(api_path(&["common", "dict", code]));
    fetch(client, request, "字典查询失败").await
}

/// 上传文件（multipart）
pub async fn upload_common_file(
    client: &dyn Transport,
    data: Option<UploadCommonFileBody>,
) -> Result<UploadResult, ApiError> {
    let request = ApiRequest::post(api_path(&["common", "file"])).multipart(build_form(data));
    fetch(client, request, "上传文件失败").await
}

pub async fn query_dept_tree(
    client: &dyn Transport,
    params: Option<&DeptTreeQueryParam>,
) -> Result<Vec<Tree>, ApiError> {
    let request = ApiRequest::get(api_path(&["common", "tree", "dept"])).query_opt(params)?;
    fetch(client, request, "查询部门树失败").await
}
