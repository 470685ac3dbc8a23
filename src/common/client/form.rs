//! multipart/form-data 表单构造
//!
//! 规则与查询参数共用：空值整项跳过，数组按同名键逐个展开（保持顺序），
//! 标量只追加一项。

use std::path::Path;

use serde_json::Value;

use crate::common::client::error::ApiError;

/// 表单中的文件部分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// 从磁盘读取文件，文件名取路径最后一段
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ApiError::InvalidRequest(format!("读取文件失败 {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Ok(Self::new(file_name, bytes))
    }
}

/// 构造表单时的输入值
#[derive(Debug, Clone, PartialEq)]
pub enum FormInput {
    Null,
    Text(String),
    File(FilePart),
    List(Vec<FormInput>),
}

impl From<&str> for FormInput {
    fn from(value: &str) -> Self {
        FormInput::Text(value.to_string())
    }
}

impl From<String> for FormInput {
    fn from(value: String) -> Self {
        FormInput::Text(value)
    }
}

impl From<FilePart> for FormInput {
    fn from(value: FilePart) -> Self {
        FormInput::File(value)
    }
}

impl<T: Into<FormInput>> From<Option<T>> for FormInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(FormInput::Null, Into::into)
    }
}

impl<T: Into<FormInput>> From<Vec<T>> for FormInput {
    fn from(value: Vec<T>) -> Self {
        FormInput::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for FormInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FormInput::Null,
            Value::String(s) => FormInput::Text(s),
            Value::Bool(b) => FormInput::Text(b.to_string()),
            Value::Number(n) => FormInput::Text(n.to_string()),
            Value::Array(items) => FormInput::List(items.into_iter().map(Into::into).collect()),
            // 嵌套对象按 JSON 文本提交
            obj @ Value::Object(_) => FormInput::Text(obj.to_string()),
        }
    }
}

/// 展开后的表单项
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File(FilePart),
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(s) => Some(s),
            FormValue::File(_) => None,
        }
    }
}

/// 有序的表单项列表，同名键可以重复
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    entries: Vec<(String, FormValue)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按展开规则追加一个键
    pub fn append(&mut self, key: impl Into<String>, input: impl Into<FormInput>) {
        let key = key.into();
        self.push_input(&key, input.into());
    }

    fn push_input(&mut self, key: &str, input: FormInput) {
        match input {
            FormInput::Null => {}
            FormInput::Text(s) => self.entries.push((key.to_string(), FormValue::Text(s))),
            FormInput::File(f) => self.entries.push((key.to_string(), FormValue::File(f))),
            FormInput::List(items) => {
                for item in items {
                    self.push_input(key, item);
                }
            }
        }
    }

    /// 把 JSON 对象按字段顺序逐键展开；非对象视为空表单
    pub fn from_json_object(value: Value) -> Self {
        let mut fields = Self::new();
        if let Value::Object(map) = value {
            for (key, value) in map {
                fields.append(key, FormInput::from(value));
            }
        }
        fields
    }

    pub fn entries(&self) -> &[(String, FormValue)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 指定键的所有文本值
    pub fn texts(&self, key: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(k, _)| k == key)
            .filter_map(|(_, v)| v.as_text())
            .collect()
    }

    /// 只保留文本项，用于查询字符串
    pub fn into_text_pairs(self) -> Vec<(String, String)> {
        self.entries
            .into_iter()
            .filter_map(|(k, v)| match v {
                FormValue::Text(s) => Some((k, s)),
                FormValue::File(_) => None,
            })
            .collect()
    }

    pub fn into_entries(self) -> Vec<(String, FormValue)> {
        self.entries
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<FormInput>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (key, value) in iter {
            fields.append(key, value);
        }
        fields
    }
}

/// 可以作为 multipart 请求体提交的类型
pub trait MultipartBody {
    fn into_form(self) -> FormFields;
}

/// 可选请求体为空时提交空表单
pub fn build_form<B: MultipartBody>(body: Option<B>) -> FormFields {
    body.map(MultipartBody::into_form).unwrap_or_default()
}
