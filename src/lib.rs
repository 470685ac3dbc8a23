pub mod api;
pub mod common;

pub use common::client::client::{AdminClient, ClientConfig, DEFAULT_BASE_URL};
pub use common::client::error::ApiError;
pub use common::client::form::{FilePart, FormFields, FormInput, FormValue, MultipartBody};
pub use common::client::models::common::{ApiResult, PageParam, PageResult};
pub use common::client::transport::{API_PREFIX, ApiRequest, RequestBody, Transport};
