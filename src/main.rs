use std::path::{Component, Path};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use md5::{Digest, Md5};
use serde::Serialize;
use tracing::{debug, info, warn};

use admin_api::api::codegen::models::GeneratedFile;
use admin_api::api::common::models::DeptTreeQueryParam;
use admin_api::api::files::models::UploadFileBody;
use admin_api::api::login::models::LoginForm;
use admin_api::api::users::models::{UserSearchField, UsersQueryParam};
use admin_api::api::{codegen, common, current, files, login, monitor, sys_api, users};
use admin_api::common::logger::PrettyLogger;
use admin_api::{
    AdminClient, ClientConfig, FilePart, PageParam, log_error, log_info, log_step, log_success,
    log_warning,
};

mod cli;

use cli::{Cli, Command};

/// 服务端只接受密码的 MD5 十六进制
fn hash_password(password: &str) -> String {
    format!("{:x}", Md5::digest(password.as_bytes()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn build_client(args: &Cli) -> Result<AdminClient> {
    let mut config =
        ClientConfig::new(&args.base_url).with_timeout(Duration::from_secs(args.timeout));
    if let Some(token) = &args.token {
        config = config.with_token(token);
    }
    let client = AdminClient::new(config).context("创建客户端失败")?;
    debug!("服务地址: {}", client.base_url());
    Ok(client)
}

/// 生成文件的相对路径不能跳出输出目录
fn is_safe_relative(path: &Path) -> bool {
    path.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

async fn write_generated(out: &Path, files: &[GeneratedFile]) -> Result<usize> {
    let mut written = 0;
    for file in files {
        let (Some(rel), Some(content)) = (file.path.as_deref(), file.content.as_deref()) else {
            warn!("跳过缺少路径或内容的生成文件");
            continue;
        };
        let rel = Path::new(rel);
        if !is_safe_relative(rel) {
            log_warning!("跳过不安全的路径: {}", rel.display());
            continue;
        }

        let target = out.join(rel);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("创建目录失败: {}", parent.display()))?;
        }
        tokio::fs::write(&target, content)
            .await
            .with_context(|| format!("写入文件失败: {}", target.display()))?;
        PrettyLogger::file_info("已写入", target.display().to_string());
        written += 1;
    }
    Ok(written)
}

async fn run(args: Cli) -> Result<()> {
    let client = build_client(&args)?;

    match args.command {
        Command::Login {
            username,
            password,
            captcha_id,
            captcha_code,
        } => {
            log_step!("登录 {}", username);
            let form = LoginForm {
                username,
                password: hash_password(&password),
                captcha_id,
                captcha_code,
            };
            let token = login::login(&client, &form).await?;
            client.set_login_token(&token)?;
            log_success!("登录成功, 用户: {}", token.user_id.as_deref().unwrap_or("-"));
            print_json(&token)?;
        }
        Command::Whoami => {
            let user = current::get_user_info(&client).await?;
            print_json(&user)?;
        }
        Command::Users {
            current,
            page_size,
            search,
        } => {
            let params = UsersQueryParam {
                page: PageParam::new(current, page_size),
                search_field: search.as_ref().map(|_| UserSearchField::Username),
                search_value: search,
                ..Default::default()
            };
            let page = users::query_users(&client, Some(&params)).await?;
            debug!("共 {} 个用户, 本页 {} 个", page.total, page.list.len());
            print_json(&page)?;
        }
        Command::Menus => {
            let menus = current::query_current_menus(&client).await?;
            if menus.is_empty() {
                log_info!("没有可用的菜单");
            }
            for menu in &menus {
                menu.walk(0, &mut |depth, node| {
                    let title = node
                        .title
                        .as_deref()
                        .or(node.name.as_deref())
                        .unwrap_or("-");
                    PrettyLogger::tree_node(depth, title, node.path.as_deref().unwrap_or(""));
                });
            }
        }
        Command::DeptTree { name } => {
            let params = DeptTreeQueryParam {
                like_name: name,
                ..Default::default()
            };
            let roots = common::query_dept_tree(&client, Some(&params)).await?;
            if roots.is_empty() {
                log_info!("没有匹配的部门");
            }
            for root in &roots {
                root.walk(0, &mut |depth, node| {
                    let detail = if node.disabled == Some(true) { "(已禁用)" } else { "" };
                    PrettyLogger::tree_node(depth, node.label.as_deref().unwrap_or("-"), detail);
                });
            }
        }
        Command::Monitor => {
            let data = monitor::get_monitor_data(&client).await?;
            print_json(&data)?;
        }
        Command::SyncApis => {
            let result = sys_api::sync_apis(&client).await?;
            print_json(&result)?;
        }
        Command::Upload { path } => {
            log_step!("上传 {}", path.display());
            let file = FilePart::from_path(&path).await?;
            info!("上传文件: {} ({} 字节)", file.file_name, file.bytes.len());
            let uploaded = files::upload_file(&client, Some(UploadFileBody { file })).await?;
            print_json(&uploaded)?;
        }
        Command::Generate { table, out } => {
            log_step!("生成代码: {}", table);
            let result = codegen::generate_code(&client, &table).await?;
            let generated = result.files.clone().unwrap_or_default();
            match out {
                Some(dir) => {
                    if generated.is_empty() {
                        bail!("表 {} 没有生成任何文件", table);
                    }
                    let count = write_generated(&dir, &generated).await?;
                    log_success!("已生成 {} 个文件到 {}", count, dir.display());
                }
                None => print_json(&result)?,
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args).await {
        let message = match e.downcast_ref::<admin_api::ApiError>() {
            Some(api_err) => api_err.message(),
            None => format!("{:#}", e),
        };
        log_error!("{}", message.red());
        std::process::exit(1);
    }
    Ok(())
}
