use serde::{Deserialize, Serialize};

use crate::common::client::form::{FilePart, FormFields, MultipartBody};

pub use crate::api::login::models::LoginToken;
pub use crate::api::menus::models::{Menu, MenuApi};
pub use crate::api::users::models::{User, UserRole};

/// 修改头像
#[derive(Debug, Clone)]
pub struct UpdateCurrentAvatarBody {
    pub file: FilePart,
}

impl MultipartBody for UpdateCurrentAvatarBody {
    fn into_form(self) -> FormFields {
        [("file", self.file)].into_iter().collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCurrentUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub gender: String,
    pub nick_name: String,
    pub user_name: String,
}

/// 新旧密码都是 MD5
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePassword {
    pub new_password: String,
    pub old_password: String,
}

/// 当前用户的权限数据
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermission {
    pub codes: Option<Vec<String>>,
    pub menus: Option<Vec<Menu>>,
    pub roles: Option<Vec<String>>,
    pub user: Option<User>,
}

/// 已绑定的第三方账号
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSocial {
    pub created_at: Option<String>,
    pub id: Option<String>,
    pub last_login_time: Option<String>,
    pub meta: Option<String>,
    pub open_id: Option<String>,
    pub source: Option<String>,
    pub user_id: Option<String>,
}
