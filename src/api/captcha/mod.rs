//! 验证码 `/api/v1/captcha`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{Captcha, CaptchaQueryParam, SendEmailCodeForm};

/// 发送邮箱验证码
pub async fn send_mail_captcha(
    client: &dyn Transport,
    data: &SendEmailCodeForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::post(api_path(&["captcha", "email"])).json(data)?;
    execute(client, request, "发送邮箱验证码失败").await
}

/// 申请图片验证码ID
pub async fn get_captcha(client: &dyn Transport) -> Result<Captcha, ApiError> {
    let request = ApiRequest::get(api_path(&["captcha", "id"]));
    fetch(client, request, "获取图片验证码ID失败").await
}

/// 按ID获取验证码图片
pub async fn get_captcha_content(
    client: &dyn Transport,
    params: &CaptchaQueryParam,
) -> Result<Captcha, ApiError> {
    let request = ApiRequest::get(api_path(&["captcha", "image"])).query(params)?;
    fetch(client, request, "返回验证码图片失败").await
}
