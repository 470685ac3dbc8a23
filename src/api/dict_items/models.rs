use serde::{Deserialize, Serialize};

use crate::common::client::models::common::{PageParam, Status};

/// 字典项
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictItem {
    /// 标签颜色
    pub color: Option<String>,
    pub create_user: Option<String>,
    pub create_user_name: Option<String>,
    pub created_at: Option<String>,
    pub description: Option<String>,
    pub dict_id: Option<String>,
    pub id: Option<String>,
    pub is_system: Option<bool>,
    pub label: Option<String>,
    pub sequence: Option<i64>,
    pub status: Option<String>,
    pub update_user: Option<String>,
    pub update_user_name: Option<String>,
    pub updated_at: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictItemForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub dict_id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub value: String,
}

/// 批量删除，ID 放在请求体里
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDictItemForm {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictItemsQueryParam {
    #[serde(flatten)]
    pub page: PageParam,
    /// 描述
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
