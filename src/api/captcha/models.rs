use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Captcha {
    /// 仅调试模式下返回
    pub captcha_code: Option<String>,
    pub captcha_id: Option<String>,
    /// 图片内容（base64）
    pub content: Option<String>,
    /// 过期时间（秒）
    pub expire_time: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptchaQueryParam {
    pub id: String,
    /// 传 1 时刷新图片
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reload: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailCodeForm {
    pub email: String,
}
