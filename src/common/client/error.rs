use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 信封返回失败，内容为服务端消息或接口的兜底文案
    #[error("{0}")]
    Rejected(String),

    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP 状态异常: {status}")]
    HttpStatus { status: u16, body: String },

    #[error("响应解析失败: {0}")]
    InvalidResponse(String),

    #[error("请求构造失败: {0}")]
    InvalidRequest(String),

    #[error("加锁失败")]
    LockError,
}

impl ApiError {
    /// 面向用户展示的消息
    pub fn message(&self) -> String {
        match self {
            ApiError::Rejected(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidRequest(e.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for ApiError {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        Self::InvalidRequest(e.to_string())
    }
}
