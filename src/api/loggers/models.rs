use serde::{Deserialize, Serialize};

use crate::common::client::models::common::{PageParam, SortDirection};

/// 操作日志
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Logger {
    /// IP 归属地
    pub address: Option<String>,
    pub browser: Option<String>,
    pub create_nick_name: Option<String>,
    pub create_user: Option<String>,
    pub create_user_name: Option<String>,
    pub created_at: Option<String>,
    pub description: Option<String>,
    pub error_msg: Option<String>,
    pub id: Option<String>,
    pub ip: Option<String>,
    /// 耗时（毫秒）
    pub latency: Option<i64>,
    pub module: Option<String>,
    pub os: Option<String>,
    pub request_body: Option<String>,
    pub request_headers: Option<String>,
    pub request_method: Option<String>,
    #[serde(rename = "requestURL")]
    pub request_url: Option<String>,
    pub response_body: Option<String>,
    pub response_headers: Option<String>,
    /// true 成功，false 失败
    pub status: Option<bool>,
    pub status_code: Option<i32>,
    pub trace_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggerSearchField {
    CreateUser,
    TraceId,
    Description,
    RequestUrl,
    ErrorMsg,
    Ip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggerSortField {
    CreatedAt,
    Latency,
    StatusCode,
    Module,
    Status,
    Ip,
}

/// 日志只支持按创建时间过滤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggerTimeField {
    CreatedAt,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggersQueryParam {
    #[serde(flatten)]
    pub page: PageParam,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_field: Option<LoggerSearchField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<LoggerSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_field: Option<LoggerTimeField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// 创建人ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
}

/// 按ID批量删除，ID 走查询参数
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerIdsQueryParam {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerModuleQueryParam {
    pub module: String,
}
