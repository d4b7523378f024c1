// ==========================================
// 容器层级查询工具 - MES 客户端配置
// ==========================================
// 职责: 站点常量（接口地址、服务账号、输出目录、超时）
// 来源: 硬编码默认值；不读取命令行/环境变量/配置文件
// ==========================================

use std::path::{Path, PathBuf};
use std::time::Duration;

// ==========================================
// 默认值常量
// ==========================================
pub mod defaults {
    /// MES 外部 API 根地址
    pub const API_BASE_URL: &str = "https://man-prd.mes.corp.local/";

    /// 站点代码
    pub const SITE_CODE: &str = "MAN";

    /// 客户 ID
    pub const CUSTOMER_ID: u32 = 2;

    /// 服务账号（部署时替换为站点实际账号）
    pub const SERVICE_ACCOUNT: &str = r"corp\svc_mes_container_api";
    pub const SERVICE_PASSWORD: &str = "";

    /// 共享输出目录
    pub const OUTPUT_DIR: &str = r"\\manfile01\General\MES APPLICATION\CONTAINER HIERARCHY REPORT";

    /// 未填写文件名时的默认基名
    pub const FILE_BASE: &str = "container_hierarchy";

    /// token 不含 name=value 时使用的 cookie 名
    pub const AUTH_COOKIE_NAME: &str = "AuthToken";

    /// 认证接口超时（秒）
    pub const AUTH_TIMEOUT_SECS: u64 = 15;

    /// 层级查询超时（秒）
    pub const QUERY_TIMEOUT_SECS: u64 = 20;

    /// 错误响应体截断长度（字符）
    pub const ERROR_BODY_PREVIEW_CHARS: usize = 200;

    /// 交互界面默认语言
    pub const UI_LOCALE: &str = "pt-BR";
}

/// 接口路径（相对 API 根地址）
pub mod endpoints {
    pub const AD_SIGNIN: &str = "api-external-api/api/user/adsignin";
    pub const CONTENTS_BY_WIP: &str =
        "api-external-api/api/containers/containerhierarchy/contentsByWip/external";
}

// ==========================================
// MesClientConfig - 客户端配置
// ==========================================
#[derive(Debug, Clone)]
pub struct MesClientConfig {
    pub api_base_url: String,
    pub site_code: String,
    pub customer_id: u32,
    pub service_account: String,
    pub service_password: String,
    pub output_dir: PathBuf,
    pub default_file_base: String,
    pub auth_cookie_name: String,
    pub auth_timeout: Duration,
    pub query_timeout: Duration,
    pub error_body_preview_chars: usize,
    pub ui_locale: String,
}

impl Default for MesClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: defaults::API_BASE_URL.to_string(),
            site_code: defaults::SITE_CODE.to_string(),
            customer_id: defaults::CUSTOMER_ID,
            service_account: defaults::SERVICE_ACCOUNT.to_string(),
            service_password: defaults::SERVICE_PASSWORD.to_string(),
            output_dir: PathBuf::from(defaults::OUTPUT_DIR),
            default_file_base: defaults::FILE_BASE.to_string(),
            auth_cookie_name: defaults::AUTH_COOKIE_NAME.to_string(),
            auth_timeout: Duration::from_secs(defaults::AUTH_TIMEOUT_SECS),
            query_timeout: Duration::from_secs(defaults::QUERY_TIMEOUT_SECS),
            error_body_preview_chars: defaults::ERROR_BODY_PREVIEW_CHARS,
            ui_locale: defaults::UI_LOCALE.to_string(),
        }
    }
}

impl MesClientConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_credentials(mut self, account: impl Into<String>, password: impl Into<String>) -> Self {
        self.service_account = account.into();
        self.service_password = password.into();
        self
    }

    /// 拼接接口完整地址（容忍根地址有无结尾斜杠）
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// 文件基名：去空白，空则使用默认值
    pub fn resolve_file_base(&self, input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.default_file_base.clone()
        } else {
            trimmed.to_string()
        }
    }
}
