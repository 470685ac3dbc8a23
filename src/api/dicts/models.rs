use serde::{Deserialize, Serialize};

use crate::common::client::models::common::{PageParam, ResultType};

pub use crate::api::dict_items::models::DictItem;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dict {
    pub code: Option<String>,
    pub create_user: Option<String>,
    pub create_user_name: Option<String>,
    pub created_at: Option<String>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub is_system: Option<bool>,
    pub items: Option<Vec<DictItem>>,
    pub name: Option<String>,
    pub sequence: Option<i64>,
    pub update_user: Option<String>,
    pub update_user_name: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictForm {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictsQueryParam {
    #[serde(flatten)]
    pub page: PageParam,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_type: Option<ResultType>,
}
