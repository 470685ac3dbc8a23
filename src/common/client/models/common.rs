use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::common::client::error::ApiError;

/// 服务端统一响应信封
///
/// `success == false` 时以失败为准，即使 `data` 存在也不信任。
/// `success` 按真值判断，`error` 不是对象时视为没有消息。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResult<T> {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,

    pub data: Option<T>,

    #[serde(default, deserialize_with = "lenient_error")]
    pub error: Option<ErrorBody>,
}

/// 信封中的错误信息，只消费 `message`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ErrorBody {
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Value>,
}

impl ErrorBody {
    fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut map) = value else {
            return None;
        };
        let message = match map.remove("message") {
            Some(Value::String(message)) => Some(message),
            _ => None,
        };
        Some(Self {
            message,
            code: map.remove("code"),
        })
    }
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn lenient_error<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<ErrorBody>, D::Error> {
    Ok(ErrorBody::from_value(Value::deserialize(deserializer)?))
}

impl<T> ApiResult<T> {
    /// 服务端消息优先，否则使用接口固定的兜底文案
    fn failure_message(&self, fallback: &str) -> String {
        self.error
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// 取出数据，`success` 为假或缺少数据时失败
    pub fn into_data(self, fallback: &str) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.failure_message(fallback)));
        }
        match self.data {
            Some(data) => Ok(data),
            None => Err(ApiError::Rejected(self.failure_message(fallback))),
        }
    }

    /// 无返回值的接口只看 `success`
    pub fn into_unit(self, fallback: &str) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.failure_message(fallback)))
        }
    }
}

impl ApiResult<Value> {
    /// 先按原始 JSON 解析信封，成功后再把 `data` 转成目标类型，
    /// 避免失败响应里格式不对的 `data` 掩盖服务端的错误消息
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        // 不是对象的响应体没有 success，按失败处理
        if !body.is_object() {
            return Ok(Self {
                success: false,
                data: None,
                error: None,
            });
        }
        let mut envelope: ApiResult<Value> = serde_json::from_value(body)?;
        if matches!(envelope.data, Some(Value::Null)) {
            envelope.data = None;
        }
        Ok(envelope)
    }

    pub fn decode<T: DeserializeOwned>(self, fallback: &str) -> Result<T, ApiError> {
        let data = self.into_data(fallback)?;
        serde_json::from_value(data).map_err(|e| {
            ApiError::InvalidResponse(format!(
                "结构匹配失败: {}, 期望: {}",
                e,
                std::any::type_name::<T>()
            ))
        })
    }
}

/// 分页结果
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,

    #[serde(default, alias = "count")]
    pub total: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

/// 分页查询的公共参数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

impl PageParam {
    pub fn new(current: u64, page_size: u64) -> Self {
        Self {
            current: Some(current),
            page_size: Some(page_size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Desc,
    Asc,
}

/// 启用/禁用状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Enable,
    Disable,
}

/// 列表查询的结果类型，`select` 返回下拉选项用的精简数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    Default,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeField {
    CreatedAt,
    UpdatedAt,
}

/// 软删除时间
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeletedAt {
    pub time: Option<String>,

    /// 为 true 时 time 非空
    pub valid: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_data_counts_as_missing() {
        let envelope = ApiResult::from_body(json!({ "success": true, "data": null })).unwrap();
        let err = envelope.decode::<String>("兜底").unwrap_err();
        assert_eq!(err.to_string(), "兜底");
    }

    #[test]
    fn failure_wins_over_present_data() {
        let envelope =
            ApiResult::from_body(json!({ "success": false, "data": { "id": "1" } })).unwrap();
        let err = envelope.decode::<Value>("查询失败").unwrap_err();
        assert_eq!(err.to_string(), "查询失败");
    }

    #[test]
    fn error_without_message_uses_fallback() {
        let envelope =
            ApiResult::from_body(json!({ "success": false, "error": { "code": 401 } })).unwrap();
        assert_eq!(
            envelope.into_unit("登出失败").unwrap_err().to_string(),
            "登出失败"
        );
    }

    #[test]
    fn malformed_error_is_ignored() {
        let envelope = ApiResult::from_body(json!({ "success": false, "error": ["x"] })).unwrap();
        assert!(envelope.error.is_none());

        let envelope =
            ApiResult::from_body(json!({ "success": false, "error": { "message": null, "code": 7 } }))
                .unwrap();
        let error = envelope.error.clone().unwrap();
        assert!(error.message.is_none());
        assert_eq!(error.code, Some(json!(7)));
        assert_eq!(envelope.into_unit("兜底").unwrap_err().to_string(), "兜底");
    }

    #[test]
    fn page_result_accepts_count_alias() {
        let page: PageResult<u32> =
            serde_json::from_value(json!({ "list": [1, 2], "count": 7 })).unwrap();
        assert_eq!(page.list, vec![1, 2]);
        assert_eq!(page.total, 7);

        let empty: PageResult<u32> = serde_json::from_value(json!({ "total": 0 })).unwrap();
        assert!(empty.list.is_empty());
    }
}
