use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{
    Client, ClientBuilder, Response, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::api::login::models::LoginToken;
use crate::common::client::error::ApiError;
use crate::common::client::form::{FormFields, FormValue};
use crate::common::client::transport::{ApiRequest, RequestBody, Transport};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// 客户端配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// 完整的 Authorization 头，如 `Bearer xxx`
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            token: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

// 基于 reqwest 的接口客户端，克隆后共享连接池和令牌
#[derive(Debug, Clone)]
pub struct AdminClient {
    pub inner: Client,
    base_url: Url,
    token: Arc<Mutex<Option<String>>>,
}

impl AdminClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidRequest(format!(
                "无效的服务地址: {}",
                config.base_url
            )));
        }

        let inner = ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .default_headers(Self::get_default_headers())
            .build()?;

        Ok(Self {
            inner,
            base_url,
            token: Arc::new(Mutex::new(config.token)),
        })
    }

    pub fn get_default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 设置登录令牌，之后的请求都会携带
    pub fn set_token(&self, token: impl Into<String>) -> Result<(), ApiError> {
        let mut guard = self.token.lock().map_err(|_| ApiError::LockError)?;
        *guard = Some(token.into());
        Ok(())
    }

    /// 按 `tokenType accessToken` 拼出 Authorization 头
    pub fn set_login_token(&self, token: &LoginToken) -> Result<(), ApiError> {
        let access = token
            .access_token
            .as_deref()
            .ok_or_else(|| ApiError::InvalidResponse("登录结果缺少访问令牌".to_string()))?;
        let token_type = token.token_type.as_deref().unwrap_or("Bearer");
        info!("已设置访问令牌, 用户: {:?}", token.user_id);
        self.set_token(format!("{} {}", token_type, access))
    }

    pub fn clear_token(&self) -> Result<(), ApiError> {
        let mut guard = self.token.lock().map_err(|_| ApiError::LockError)?;
        *guard = None;
        Ok(())
    }

    pub fn token(&self) -> Result<Option<String>, ApiError> {
        let guard = self.token.lock().map_err(|_| ApiError::LockError)?;
        Ok(guard.clone())
    }

    /// 拼接完整地址，保留服务地址中的路径前缀
    pub fn endpoint(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{}{}", base, request.path))?;
        if !request.query.is_empty() {
            url.set_query(Some(&request.query_string()?));
        }
        Ok(url)
    }

    fn build_form(fields: FormFields) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (key, value) in fields.into_entries() {
            form = match value {
                FormValue::Text(text) => form.text(key, text),
                FormValue::File(file) => {
                    let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                    if let Some(content_type) = file.content_type {
                        part = part
                            .mime_str(&content_type)
                            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
                    }
                    form.part(key, part)
                }
            };
        }
        Ok(form)
    }

    async fn handle_response(resp: Response) -> Result<Value, ApiError> {
        let status = resp.status();
        let url = resp.url().to_string();
        debug!("响应 {} {}", status, url);

        let text = resp.text().await?;
        let parsed = serde_json::from_str::<Value>(&text);

        if !status.is_success() {
            // 非 2xx 时只要响应体是信封，就交给信封处理，保留服务端的错误消息
            if let Ok(json_value) = parsed {
                if json_value.get("success").is_some() {
                    return Ok(json_value);
                }
            }
            error!("请求失败的URL: {}, 状态: {}", url, status);
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        parsed.map_err(|e| {
            error!("响应不是 JSON: {}, URL: {}", e, url);
            ApiError::InvalidResponse(format!("响应不是 JSON: {}. 响应: {}", e, text))
        })
    }
}

#[async_trait]
impl Transport for AdminClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.endpoint(&request)?;
        let mut builder = self.inner.request(request.method.clone(), url);

        if let Some(token) = self.token()? {
            let value = HeaderValue::from_str(&token)
                .map_err(|e| ApiError::InvalidRequest(format!("无效的令牌: {}", e)))?;
            builder = builder.header(AUTHORIZATION, value);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(fields) => builder.multipart(Self::build_form(fields)?),
        };

        let resp = builder.send().await.map_err(|e| {
            error!("请求失败: {}", e);
            ApiError::Reqwest(e)
        })?;

        Self::handle_response(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = AdminClient::new(ClientConfig::new("https://admin.example.com/gateway/")).unwrap();
        let request = ApiRequest::get("/api/v1/users").query(&serde_json::json!({ "current": 1 })).unwrap();
        let url = client.endpoint(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://admin.example.com/gateway/api/v1/users?current=1"
        );
    }

    #[test]
    fn token_is_shared_between_clones() {
        let client = AdminClient::new(ClientConfig::default()).unwrap();
        let cloned = client.clone();
        client
            .set_login_token(&LoginToken {
                access_token: Some("abc".to_string()),
                token_type: Some("Bearer".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(cloned.token().unwrap().as_deref(), Some("Bearer abc"));
        cloned.clear_token().unwrap();
        assert!(client.token().unwrap().is_none());
    }

    #[test]
    fn rejects_non_base_url() {
        assert!(AdminClient::new(ClientConfig::new("mailto:admin@example.com")).is_err());
    }
}
