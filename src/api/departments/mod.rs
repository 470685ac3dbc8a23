//! 部门管理 `/api/v1/departments`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::models::common::PageResult;
use crate::common::client::transport::{ApiRequest, Transport, api_path, execute, fetch};

use models::{Department, DepartmentForm, DepartmentsQueryParam};

pub async fn create_department(
    client: &dyn Transport,
    data: &DepartmentForm,
) -> Result<Department, ApiError> {
    let request = ApiRequest::post(api_path(&["departments"])).json(data)?;
    fetch(client, request, "创建部门失败").await
}

pub async fn query_departments(
    client: &dyn Transport,
    params: Option<&DepartmentsQueryParam>,
) -> Result<PageResult<Department>, ApiError> {
    let request = ApiRequest::get(api_path(&["departments"])).query_opt(params)?;
    fetch(client, request, "查询部门列表失败").await
}

pub async fn update_department(
    client: &dyn Transport,
    id: &str,
    data: &DepartmentForm,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(api_path(&["departments", id])).json(data)?;
    execute(client, request, "根据ID更新部门失败").await
}

pub async fn delete_department(client: &dyn Transport, id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::delete(api_path(&["departments", id]));
    execute(client, request, "根据ID删除部门失败").await
}

pub async fn get_department(client: &dyn Transport, id: &str) -> Result<Department, ApiError> {
    let request = ApiRequest::get(api_path(&["departments", id]));
    fetch(client, request, "根据ID获取部门失败").await
}
