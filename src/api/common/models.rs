use serde::{Deserialize, Serialize};

use crate::common::client::form::{FilePart, FormFields, MultipartBody};
use crate::common::client::models::common::{SortDirection, Status};

/// 字典选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonDict {
    pub disabled: Option<bool>,
    pub extend: Option<String>,
    pub label: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeptSortField {
    CreatedAt,
    UpdatedAt,
    Sequence,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeptTreeQueryParam {
    /// 名称模糊匹配
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<DeptSortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDictsQueryParam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// 通用树节点
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    pub children: Option<Vec<Tree>>,
    pub disabled: Option<bool>,
    pub id: Option<String>,
    pub label: Option<String>,
}

impl Tree {
    /// 深度优先遍历，回调参数为 (层级, 节点)
    pub fn walk<'a>(&'a self, depth: usize, visit: &mut impl FnMut(usize, &'a Tree)) {
        visit(depth, self);
        for child in self.children.iter().flatten() {
            child.walk(depth + 1, visit);
        }
    }
}

/// 通用上传
#[derive(Debug, Clone)]
pub struct UploadCommonFileBody {
    pub file: FilePart,
}

impl MultipartBody for UploadCommonFileBody {
    fn into_form(self) -> FormFields {
        [("file", self.file)].into_iter().collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub id: Option<String>,
    pub metadata: Option<String>,
    pub thumbnail_url: Option<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tree_walk_is_depth_first() {
        let tree: Tree = serde_json::from_value(json!({
            "label": "总部",
            "children": [
                { "label": "研发部", "children": [{ "label": "后端组" }] },
                { "label": "市场部" }
            ]
        }))
        .unwrap();

        let mut visited = Vec::new();
        tree.walk(0, &mut |depth, node| {
            visited.push((depth, node.label.clone().unwrap_or_default()));
        });
        assert_eq!(
            visited,
            vec![
                (0, "总部".to_string()),
                (1, "研发部".to_string()),
                (2, "后端组".to_string()),
                (1, "市场部".to_string()),
            ]
        );
    }
}
