//! 文件 `/api/v1/files`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::form::build_form;
use crate::common::client::transport::{ApiRequest, Transport, api_path, fetch};

use models::{File, UploadFileBody};

/// 上传文件到默认存储（multipart）
pub async fn upload_file(
    client: &dyn Transport,
    data: Option<UploadFileBody>,
) -> Result<File, ApiError> {
    let request = ApiRequest::post(api_path(&["files", "upload"])).multipart(build_form(data));
    fetch(client, request, "上传文件失败").await
}
