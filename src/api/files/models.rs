use serde::{Deserialize, Serialize};

use crate::common::client::form::{FilePart, FormFields, MultipartBody};

pub use crate::common::client::models::common::DeletedAt;

/// 已上传的文件记录
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub content_type: Option<String>,
    pub create_user: Option<String>,
    pub create_user_name: Option<String>,
    pub created_at: Option<String>,
    pub deleted_at: Option<DeletedAt>,
    pub extension: Option<String>,
    pub id: Option<String>,
    pub metadata: Option<String>,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub parent_path: Option<String>,
    pub path: Option<String>,
    pub sha256: Option<String>,
    /// 字节数
    pub size: Option<i64>,
    pub storage_id: Option<String>,
    pub thumbnail_metadata: Option<String>,
    pub thumbnail_name: Option<String>,
    pub thumbnail_size: Option<i64>,
    /// 0 目录，1 其他，2 图片，3 文档，4 视频，5 音频
    pub r#type: Option<i32>,
    pub update_user: Option<String>,
    pub update_user_name: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UploadFileBody {
    pub file: FilePart,
}

impl MultipartBody for UploadFileBody {
    fn into_form(self) -> FormFields {
        [("file", self.file)].into_iter().collect()
    }
}
