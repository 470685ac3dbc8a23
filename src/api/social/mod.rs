//! 第三方登录 `/api/v1/social`
//!
//! 平台配置的维护需要管理员权限；登录、获取授权链接和已启用平台列表为公开接口；
//! 绑定与解绑需要已登录。`source` 为平台编码。

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::models::common::PageResult;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{
    BindSocialAccountResult, GetSocialAuthUrlResult, LoginToken, SocialBindForm, SocialLoginForm,
    SocialProvider, SocialProviderForm, SocialProvidersQueryParam, UnbindSocialAccountResult,
};

pub async fn social_login(
    client: &dyn Transport,
    data: &SocialLoginForm,
) -> Result<LoginToken, ApiError> {
    let request = ApiRequest::post(api_path(&["social", "login"])).json(data)?;
    fetch(client, request, "第三方登录（公开接口）失败").await
}

pub async fn create_social_provider(
    client: &dyn Transport,
    data: &SocialProviderForm,
) -> Result<SocialProvider, ApiError> {
    let request = ApiRequest::post(api_path(&["social", "providers"])).json(data)?;
    fetch(client, request, "创建第三方登录平台配置失败").await
}

pub async fn get_enabled_social_providers(
    client: &dyn Transport,
) -> Result<Vec<SocialProvider>, ApiError> {
    let request = ApiRequest::get(api_path(&["social", "providers"]));
    fetch(
        client,
        request,
        "获取已启用的第三方登录平台列表（公开接口）失败",
    )
    .await
}

pub async fn query_social_providers(
    client: &dyn Transport,
    params: Option<&SocialProvidersQueryParam>,
) -> Result<PageResult<SocialProvider>, ApiError> {
    let request = ApiRequest::get(api_path(&["social", "providers", "page"])).query_opt(params)?;
    fetch(client, request, "查询第三方登录平台配置列表失败").await
}

pub async fn get_social_provider(
    client: &dyn Transport,
    id: &str,
) -> Result<SocialProvider, ApiError> {
    let request = ApiRequest::get(api_path(&["social", "providers", id]));
    fetch(client, request, "根据ID获取第三方登录平台配置失败").await
}

pub async fn update_social_provider(
    client: &dyn Transport,
    id: &str,
    data: &SocialProviderForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["social", "providers", id])).json(data)?;
    execute(client, request, "根据ID更新第三方登录平台配置失败").await
}

pub async fn delete_social_provider(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["social", "providers", id]));
    execute(client, request, "根据ID删除第三方登录平台配置失败").await
}

pub async fn disable_social_provider(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::patch(api_path(&["social", "providers", id, "disable"]));
    execute(client, request, "禁用第三方登录平台配置失败").await
}

pub async fn enable_social_provider(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::patch(api_path(&["social", "providers", id, "enable"]));
    execute(client, request, "启用第三方登录平台配置失败").await
}

/// 跳转第三方授权页的链接
pub async fn get_social_auth_url(
    client: &dyn Transport,
    source: &str,
) -> Result<GetSocialAuthUrlResult, ApiError> {
    let request = ApiRequest::get(api_path(&["social", source]));
    fetch(client, request, "获取授权链接（公开接口）失败").await
}

pub async fn bind_social_account(
    client: &dyn Transport,
    source: &str,
    data: &SocialBindForm,
) -> Result<BindSocialAccountResult, ApiError> {
    let request = ApiRequest::post(api_path(&["social", source])).json(data)?;
    fetch(client, request, "绑定第三方账号（需登录）失败").await
}

pub async fn unbind_social_account(
    client: &dyn Transport,
    source: &str,
) -> Result<UnbindSocialAccountResult, ApiError> {
    let request = ApiRequest::delete(api_path(&["social", source]));
    fetch(client, request, "解绑第三方账号（需登录）失败").await
}
