use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::common::client::error::ApiError;
use crate::common::client::form::FormFields;
use crate::common::client::models::common::ApiResult;

/// 所有接口路径的前缀
pub const API_PREFIX: &str = "/api/v1";

/// 请求体
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(FormFields),
}

/// 一次接口调用的完整描述，与具体 HTTP 库无关
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// 序列化查询对象，未设置的字段不发送，数组按同名键重复
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self, ApiError> {
        let value = serde_json::to_value(params)
            .map_err(|e| ApiError::InvalidRequest(format!("查询参数序列化失败: {}", e)))?;
        self.query
            .extend(FormFields::from_json_object(value).into_text_pairs());
        Ok(self)
    }

    /// 可选查询对象，为空时不带参数
    pub fn query_opt<Q: Serialize>(self, params: Option<&Q>) -> Result<Self, ApiError> {
        match params {
            Some(params) => self.query(params),
            None => Ok(self),
        }
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidRequest(format!("请求体序列化失败: {}", e)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, form: FormFields) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// `a=1&b=2` 形式的查询字符串
    pub fn query_string(&self) -> Result<String, ApiError> {
        Ok(serde_urlencoded::to_string(&self.query)?)
    }
}

/// 拼接接口路径，路径参数按单个路径段编码
pub fn api_path(segments: &[&str]) -> String {
    let mut path = String::from(API_PREFIX);
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

/// 底层 HTTP 通道，返回服务端响应体（信封）的原始 JSON
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// 发起请求并解出 `data`
pub async fn fetch<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: ApiRequest,
    fallback: &str,
) -> Result<T, ApiError> {
    let path = request.path.clone();
    debug!("{} {} 查询参数 {} 个", request.method, path, request.query.len());
    let body = transport.send(request).await?;
    ApiResult::from_body(body)
        .and_then(|envelope| envelope.decode(fallback))
        .inspect_err(|e| log_failure(&path, e))
}

/// 发起请求，只关心是否成功
pub async fn execute(
    transport: &dyn Transport,
    request: ApiRequest,
    fallback: &str,
) -> Result<(), ApiError> {
    let path = request.path.clone();
    debug!("{} {} 查询参数 {} 个", request.method, path, request.query.len());
    let body = transport.send(request).await?;
    ApiResult::from_body(body)
        .and_then(|envelope| envelope.into_unit(fallback))
        .inspect_err(|e| log_failure(&path, e))
}

fn log_failure(path: &str, err: &ApiError) {
    if err.is_rejected() {
        warn!("接口 {} 调用失败: {}", path, err);
    } else {
        error!("接口 {} 响应解析失败: {}", path, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Params {
        #[serde(skip_serializing_if = "Option::is_none")]
        page_size: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        role_ids: Vec<String>,
    }

    #[test]
    fn path_segments_are_encoded() {
        assert_eq!(api_path(&["users", "42"]), "/api/v1/users/42");
        assert_eq!(api_path(&["common", "dict", "a/b"]), "/api/v1/common/dict/a%2Fb");
    }

    #[test]
    fn query_drops_absent_fields() {
        let request = ApiRequest::get("/api/v1/users")
            .query(&Params {
                page_size: Some(20),
                name: None,
                role_ids: vec!["r1".into(), "r2".into()],
            })
            .unwrap();

        let mut pairs = request.query.clone();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("pageSize".to_string(), "20".to_string()),
                ("roleIds".to_string(), "r1".to_string()),
                ("roleIds".to_string(), "r2".to_string()),
            ]
        );
        assert!(request.query_string().unwrap().contains("roleIds=r1&roleIds=r2"));
    }

    #[test]
    fn query_keeps_field_order() {
        let request = ApiRequest::get("/api/v1/users")
            .query(&Params {
                page_size: Some(10),
                name: Some("张".to_string()),
                role_ids: vec!["r1".into()],
            })
            .unwrap();

        let keys: Vec<&str> = request.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["pageSize", "name", "roleIds"]);
        assert_eq!(
            request.query_string().unwrap(),
            "pageSize=10&name=%E5%BC%A0&roleIds=r1"
        );
    }
}
