use serde::{Deserialize, Serialize};

use crate::common::client::models::common::{PageParam, Status};

/// 菜单，`children` 组成导航树
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub children: Option<Vec<Menu>>,
    /// 权限代码，同级唯一
    pub code: Option<String>,
    pub component: Option<String>,
    pub create_user: Option<String>,
    pub create_user_name: Option<String>,
    pub created_at: Option<String>,
    pub full_page: Option<bool>,
    pub hidden: Option<bool>,
    pub hidden_breadcrumb: Option<bool>,
    pub icon: Option<String>,
    pub id: Option<String>,
    pub keep_alive: Option<bool>,
    pub name: Option<String>,
    pub parent_id: Option<String>,
    /// 上级路径，以点分隔
    pub parent_path: Option<String>,
    pub path: Option<String>,
    /// JSON 格式的扩展属性
    pub properties: Option<String>,
    pub redirect: Option<String>,
    pub resources: Option<Vec<MenuApi>>,
    /// 按降序排序
    pub sequence: Option<i64>,
    pub status: Option<String>,
    pub title: Option<String>,
    pub r#type: Option<String>,
    pub update_user: Option<String>,
    pub update_user_name: Option<String>,
    pub updated_at: Option<String>,
}

impl Menu {
    /// 深度优先遍历，回调参数为 (层级, 菜单)
    pub fn walk<'a>(&'a self, depth: usize, visit: &mut impl FnMut(usize, &'a Menu)) {
        visit(depth, self);
        for child in self.children.iter().flatten() {
            child.walk(depth + 1, visit);
        }
    }
}

/// 菜单关联的接口
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuType {
    Directory,
    #[default]
    Menu,
    Button,
    Link,
    Iframe,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_page: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_breadcrumb: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<MenuApi>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub title: String,
    pub r#type: MenuType,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenusQueryParam {
    #[serde(flatten)]
    pub page: PageParam,
    /// 编码路径，如 `system.user.add`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_resources: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
