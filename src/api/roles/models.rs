use serde::{Deserialize, Serialize};

use crate::common::client::models::common::{PageParam, ResultType, Status};

pub use crate::api::departments::models::{Department, DepartmentLeader};

/// 角色
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub code: Option<String>,
    pub create_user: Option<String>,
    pub create_user_name: Option<String>,
    pub created_at: Option<String>,
    /// 数据权限，取值见 [`DataScope`]
    pub data_scope: Option<i32>,
    pub departments: Option<Vec<RoleDepartment>>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub is_system: Option<bool>,
    pub menus: Option<Vec<RoleMenu>>,
    pub name: Option<String>,
    pub sequence: Option<i64>,
    pub status: Option<String>,
    pub update_user: Option<String>,
    pub update_user_name: Option<String>,
    pub updated_at: Option<String>,
}

impl Role {
    pub fn scope(&self) -> Option<DataScope> {
        self.data_scope.and_then(DataScope::from_code)
    }
}

/// 角色的数据权限范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataScope {
    All = 1,
    DeptAndChildren = 2,
    Dept = 3,
    SelfOnly = 4,
    Custom = 5,
}

impl DataScope {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::All),
            2 => Some(Self::DeptAndChildren),
            3 => Some(Self::Dept),
            4 => Some(Self::SelfOnly),
            5 => Some(Self::Custom),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDepartment {
    pub dept_id: Option<String>,
    pub dept_name: Option<String>,
    pub role_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMenu {
    pub menu_id: Option<String>,
    pub role_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleForm {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDataScope {
    pub data_scope: Option<i32>,
    pub departments: Option<Vec<Department>>,
    /// 已选中的部门ID
    pub selects: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDataScopeForm {
    pub data_scope: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selects: Option<Vec<String>>,
}

impl RoleDataScopeForm {
    pub fn new(scope: DataScope, selects: Option<Vec<String>>) -> Self {
        Self {
            data_scope: scope.code(),
            selects,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMenuData {
    pub menus: Option<Vec<RolePermission>>,
    /// 已选中的菜单ID
    pub selects: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMenuDataForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selects: Option<Vec<String>>,
}

/// 权限树节点，`actions` 为按钮，`children` 为子菜单
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    pub actions: Option<Vec<RolePermission>>,
    pub children: Option<Vec<RolePermission>>,
    pub icon: Option<String>,
    pub id: Option<String>,
    pub parent_id: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUsersForm {
    pub role_id: String,
    pub user_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolesQueryParam {
    #[serde(flatten)]
    pub page: PageParam,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_type: Option<ResultType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
