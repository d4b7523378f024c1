// ==========================================
// 容器层级查询工具 - 认证会话管理
// ==========================================
// 职责: 获取并缓存认证 token；构建携带 token cookie 的 HTTP 会话
// 接口: POST {base}/api-external-api/api/user/adsignin (表单 name/password)
// ==========================================
// 约定:
// - token 进程内只获取一次（单槽缓存），不过期、不自动刷新
// - 获取失败不缓存，也不自动重试，由调用方决定
// - 内部接口证书校验关闭（部署注意事项见 DESIGN.md）
// ==========================================

use crate::config::{endpoints, MesClientConfig};
use crate::mes::error::{truncate_body, MesError, MesResult};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Client;
use tokio::sync::OnceCell;

// ==========================================
// AuthToken - 认证凭据
// ==========================================
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// 接口返回原文（已去首尾空白）；空串视为认证失败
    pub fn parse(raw: &str) -> MesResult<Self> {
        let token = raw.trim();
        if token.is_empty() {
            return Err(MesError::Authentication("认证接口返回空 token".to_string()));
        }
        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 解析 cookie 名/值
    ///
    /// # 规则
    /// - token 含 '=' → 按第一个 '=' 拆分：左侧去空白作 cookie 名，右侧去两端 ';' 作值
    /// - 否则 → 使用默认 cookie 名，整个 token 作值
    pub fn cookie_pair(&self, default_name: &str) -> (String, String) {
        match self.0.split_once('=') {
            Some((name, value)) => (name.trim().to_string(), value.trim_matches(';').to_string()),
            None => (default_name.to_string(), self.0.clone()),
        }
    }
}

// token 不落日志
impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthToken(len={})", self.0.len())
    }
}

// ==========================================
// MesSession - 已认证会话
// ==========================================
#[derive(Debug, Clone)]
pub struct MesSession {
    pub(crate) client: Client,
    cookie_name: String,
}

impl MesSession {
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

// ==========================================
// SessionManager - 会话管理器
// ==========================================
pub struct SessionManager {
    config: MesClientConfig,
    http: Client,
    token: OnceCell<AuthToken>,
}

impl SessionManager {
    /// 创建会话管理器（不发起请求）
    pub fn new(config: MesClientConfig) -> MesResult<Self> {
        let http = insecure_client_builder()
            .build()
            .map_err(|e| MesError::ClientBuild(e.to_string()))?;

        Ok(Self {
            config,
            http,
            token: OnceCell::new(),
        })
    }

    pub fn config(&self) -> &MesClientConfig {
        &self.config
    }

    /// 已缓存的 token（未认证时为 None）
    pub fn cached_token(&self) -> Option<&AuthToken> {
        self.token.get()
    }

    /// 获取 token：已缓存直接返回，否则调用认证接口一次
    pub async fn acquire_token(&self) -> MesResult<AuthToken> {
        let token = self
            .token
            .get_or_try_init(|| self.request_token())
            .await?;
        Ok(token.clone())
    }

    async fn request_token(&self) -> MesResult<AuthToken> {
        let url = self.config.endpoint_url(endpoints::AD_SIGNIN);
        tracing::info!(url = %url, account = %self.config.service_account, "请求认证 token");

        let form = [
            ("name", self.config.service_account.as_str()),
            ("password", self.config.service_password.as_str()),
        ];

        let resp = self
            .http
            .post(&url)
            .form(&form)
            .timeout(self.config.auth_timeout)
            .send()
            .await
            .map_err(|e| MesError::Authentication(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| MesError::Authentication(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "认证接口拒绝请求");
            return Err(MesError::Authentication(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate_body(&body, self.config.error_body_preview_chars)
            )));
        }

        let token = AuthToken::parse(&body)?;
        tracing::info!(token_len = token.as_str().len(), "token 获取成功");
        Ok(token)
    }

    /// 构建已认证会话（token 作为 cookie 随每个请求发送）
    pub async fn build_session(&self) -> MesResult<MesSession> {
        let token = self.acquire_token().await?;
        let (cookie_name, cookie_value) = token.cookie_pair(&self.config.auth_cookie_name);

        let header = HeaderValue::from_str(&format!("{}={}", cookie_name, cookie_value))
            .map_err(|e| MesError::Authentication(format!("token 无法作为 cookie 使用: {}", e)))?;
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, header);

        let client = insecure_client_builder()
            .default_headers(headers)
            .build()
            .map_err(|e| MesError::ClientBuild(e.to_string()))?;

        tracing::debug!(cookie_name = %cookie_name, "会话已建立");
        Ok(MesSession {
            client,
            cookie_name,
        })
    }
}

/// 内部 MES 接口使用自签证书，关闭证书校验
fn insecure_client_builder() -> reqwest::ClientBuilder {
    Client::builder().danger_accept_invalid_certs(true)
}
