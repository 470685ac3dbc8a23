//! 操作日志 `/api/v1/loggers`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::models::common::PageResult;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{Logger, LoggerIdsQueryParam, LoggerModuleQueryParam, LoggersQueryParam};

/// 清空全部日志
pub async fn delete_all_loggers(client: &dyn Transport) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["loggers"]));
    execute(client, request, "清空日志记录失败").await
}

pub async fn query_loggers(
    client: &dyn Transport,
    params: Option<&LoggersQueryParam>,
) -> Result<PageResult<Logger>, ApiError> {
    let request = ApiRequest::get(api_path(&["loggers"])).query_opt(params)?;
    fetch(client, request, "查询日志列表失败").await
}

/// 批量删除，ID 以重复的 `ids` 查询参数发送
pub async fn delete_loggers_by_ids(
    client: &dyn Transport,
    params: &LoggerIdsQueryParam,
) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["loggers", "batchDelete"])).query(params)?;
    execute(client, request, "批量删除日志失败").await
}

pub async fn delete_loggers_by_module(
    client: &dyn Transport,
    params: &LoggerModuleQueryParam,
) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["loggers", "deleteByModule"])).query(params)?;
    execute(client, request, "按模块删除日志失败").await
}

pub async fn get_logger_modules(client: &dyn Transport) -> Result<Vec<String>, ApiError> {
    let request = ApiRequest::get(api_path(&["loggers", "modules"]));
    fetch(client, request, "获取日志模块列表失败").await
}

pub async fn delete_logger(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["loggers", id]));
    execute(client, request, "按ID删除日志失败").await
}

pub async fn get_logger(client: &dyn Transport, id: &str) -> Result<Logger, ApiError> {
    let request = ApiRequest::get(api_path(&["loggers", id]));
    fetch(client, request, "通过ID获取日志详情失败").await
}
