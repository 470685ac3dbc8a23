use serde::{Deserialize, Serialize};

use crate::common::client::models::common::{PageParam, ResultType, SortDirection, Status};

pub use crate::common::client::models::common::DeletedAt;

/// 本地存储
pub const STORAGE_TYPE_LOCAL: i32 = 1;
/// 对象存储
pub const STORAGE_TYPE_OSS: i32 = 2;

/// 存储配置
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub access_key: Option<String>,
    pub bucket_name: Option<String>,
    pub code: Option<String>,
    pub create_user: Option<String>,
    pub create_user_name: Option<String>,
    pub created_at: Option<String>,
    pub deleted_at: Option<DeletedAt>,
    pub description: Option<String>,
    pub domain: Option<String>,
    pub endpoint: Option<String>,
    pub id: Option<String>,
    pub is_default: Option<bool>,
    pub name: Option<String>,
    /// 服务端以字符串返回
    pub recycle_bin_enabled: Option<String>,
    pub recycle_bin_path: Option<String>,
    pub secret_key: Option<String>,
    pub sequence: Option<i64>,
    pub status: Option<String>,
    /// 1 本地存储，2 对象存储
    pub r#type: Option<i32>,
    pub update_user: Option<String>,
    pub update_user_name: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageForm {
    pub access_key: String,
    pub bucket_name: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    pub name: String,
    pub recycle_bin_enabled: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycle_bin_path: Option<String>,
    pub secret_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub r#type: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageSortField {
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoragesQueryParam {
    #[serde(flatten)]
    pub page: PageParam,
    /// 服务端参数名为大写开头的 `Type`
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_type: Option<ResultType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<StorageSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
