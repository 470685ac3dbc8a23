use serde::{Deserialize, Serialize};

/// 账号登录
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_id: Option<String>,
    /// 登录密码的 MD5
    pub password: String,
    pub username: String,
}

/// 访问令牌
///
/// 请求时按 `Authorization: {token_type} {access_token}` 携带。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginToken {
    /// JWT
    pub access_token: Option<String>,
    /// 过期时间（秒）
    pub expires_at: Option<i64>,
    pub token_type: Option<String>,
    pub user_id: Option<String>,
}
