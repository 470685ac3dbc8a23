use serde::{Deserialize, Serialize};

use crate::common::client::models::common::{PageParam, ResultType, Status};

pub use crate::api::login::models::LoginToken;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BindSocialAccountResult {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnbindSocialAccountResult {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSocialAuthUrlResult {
    pub auth_url: Option<String>,
}

/// 第三方回调带回的授权码和状态码
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialBindForm {
    pub code: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLoginForm {
    pub code: String,
    pub state: String,
}

/// 第三方登录平台配置
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProvider {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// 平台编码，如 github
    pub code: Option<String>,
    pub create_user: Option<String>,
    pub create_user_name: Option<String>,
    pub created_at: Option<String>,
    pub deleted_at: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub id: Option<String>,
    pub is_system: Option<bool>,
    pub name: Option<String>,
    /// 前端回调地址
    pub redirect_uri: Option<String>,
    pub sequence: Option<i64>,
    pub status: Option<String>,
    pub update_user: Option<String>,
    pub update_user_name: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProviderForm {
    pub client_id: String,
    pub client_secret: String,
    /// 只允许字母和数字
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub name: String,
    pub redirect_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Oauth2,
    Oidc,
    Saml,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProvidersQueryParam {
    #[serde(flatten)]
    pub page: PageParam,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// 模糊查询
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<ProviderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_type: Option<ResultType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}
