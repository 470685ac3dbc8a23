use serde::{Deserialize, Serialize};

use crate::common::client::models::common::{PageParam, SortDirection, Status};

pub use crate::api::common::models::DeptSortField;

/// 部门，`children` 组成组织架构树
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub children: Option<Vec<Department>>,
    pub create_user: Option<String>,
    pub create_user_name: Option<String>,
    pub created_at: Option<String>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub is_system: Option<bool>,
    pub leaders: Option<Vec<DepartmentLeader>>,
    pub name: Option<String>,
    pub parent_id: Option<String>,
    /// 祖级列表，以 `.` 分隔
    pub parent_path: Option<String>,
    pub sequence: Option<i64>,
    pub status: Option<String>,
    pub update_user: Option<String>,
    pub update_user_name: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentLeader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaders: Option<Vec<DepartmentLeader>>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentsQueryParam {
    #[serde(flatten)]
    pub page: PageParam,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<DeptSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
