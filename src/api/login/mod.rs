//! 账号登录 `/api/v1/login`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::transport::{ApiRequest, Transport, api_path, fetch};

use models::{LoginForm, LoginToken};

/// 账号登录，成功后返回访问令牌
pub async fn login(client: &dyn Transport, data: &LoginForm) -> Result<LoginToken, ApiError> {
    let request = ApiRequest::post(api_path(&["login"])).json(data)?;
    fetch(client, request, "账号登录失败").await
}
