#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use admin_api::{ApiError, ApiRequest, Transport};
use async_trait::async_trait;
use serde_json::{Value, json};

/// 按顺序返回预置响应，并记录收到的请求
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Value>>,
    requests: Mutex<Vec<ApiRequest>>,
    /// 队列为空时重复返回的响应
    fallback: Option<Value>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: impl IntoIterator<Item = Value>) -> Self {
        let mock = Self::new();
        for r in responses {
            mock.push(r);
        }
        mock
    }

    /// 每次请求都返回同一个响应
    pub fn always(response: Value) -> Self {
        Self {
            fallback: Some(response),
            ..Self::default()
        }
    }

    /// 预置一个成功信封
    pub fn ok(data: Value) -> Self {
        Self::with_responses([success(data)])
    }

    pub fn push(&self, response: Value) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("没有记录到请求")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.fallback.clone())
            .ok_or_else(|| ApiError::InvalidResponse("没有预置响应".to_string()))
    }
}

pub fn success(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

pub fn success_empty() -> Value {
    json!({ "success": true })
}

pub fn failure(message: &str) -> Value {
    json!({ "success": false, "error": { "message": message } })
}

/// 查询参数排序后比较，序列化顺序不影响语义
pub fn sorted_query(request: &ApiRequest) -> Vec<(String, String)> {
    let mut pairs = request.query.clone();
    pairs.sort();
    pairs
}

pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    pairs.sort();
    pairs
}
