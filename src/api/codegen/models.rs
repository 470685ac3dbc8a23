use serde::{Deserialize, Serialize};

use crate::common::client::models::common::{PageParam, ResultType, SortDirection, TimeField};

/// 表级生成配置
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenConfig {
    pub author: Option<String>,
    pub business_name: Option<String>,
    pub created_at: Option<String>,
    pub fields: Option<Vec<GenFieldConfig>>,
    pub is_override: Option<bool>,
    pub module_name: Option<String>,
    pub package_name: Option<String>,
    pub table_name: Option<String>,
    pub table_prefix: Option<String>,
    pub update_user: Option<String>,
    pub update_user_name: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenConfigForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub business_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<GenFieldConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_override: Option<bool>,
    pub module_name: String,
    pub package_name: String,
    pub table_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenConfigUpdateForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_configs: Option<Vec<GenFieldConfig>>,
    pub gen_config: GenConfigForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenConfigSearchField {
    TableName,
    ModuleName,
    BusinessName,
    Author,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenConfigSortField {
    CreatedAt,
    UpdatedAt,
    TableName,
    ModuleName,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenConfigsQueryParam {
    #[serde(flatten)]
    pub page: PageParam,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_type: Option<ResultType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_field: Option<GenConfigSearchField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<GenConfigSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_field: Option<TimeField>,
}

/// 字段级生成配置
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenFieldConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_form: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_query: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenFieldSearchField {
    Column,
    GoName,
    JsonName,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenFieldSortField {
    Sort,
    Id,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenFieldConfigsQueryParam {
    #[serde(flatten)]
    pub page: PageParam,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_form: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_query: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_field: Option<GenFieldSearchField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<GenFieldSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// 表名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_field: Option<TimeField>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeResult {
    pub files: Option<Vec<GeneratedFile>>,
}

/// 生成的单个文件，path 为相对路径
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub content: Option<String>,
    pub path: Option<String>,
}
