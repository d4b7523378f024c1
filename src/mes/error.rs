// ==========================================
// 容器层级查询工具 - MES 接口错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// MES 接口错误类型
#[derive(Error, Debug)]
pub enum MesError {
    // ===== 认证 =====
    #[error("认证失败: {0}")]
    Authentication(String),

    // ===== 查询 =====
    /// message 已包含 "HTTP {status}: {body}" 或传输错误描述
    #[error("{message}")]
    Query {
        status: Option<u16>,
        message: String,
    },

    #[error("响应解析失败: {0}")]
    InvalidResponse(String),

    // ===== 客户端 =====
    #[error("HTTP 客户端初始化失败: {0}")]
    ClientBuild(String),
}

impl MesError {
    /// 非 200 响应
    pub fn http_status(status: u16, body_preview: &str) -> Self {
        MesError::Query {
            status: Some(status),
            message: format!("HTTP {}: {}", status, body_preview),
        }
    }

    /// 传输层错误（连接失败、超时等）
    pub fn transport(err: &reqwest::Error) -> Self {
        MesError::Query {
            status: err.status().map(|s| s.as_u16()),
            message: format!("请求失败: {}", err),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            MesError::Query { status, .. } => *status,
            _ => None,
        }
    }
}

/// 截断诊断文本，避免错误信息刷屏（按字符计）
pub fn truncate_body(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}

/// Result 类型别名
pub type MesResult<T> = Result<T, MesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_display() {
        let err = MesError::http_status(500, "boom");
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(err.status(), Some(500));

        let err = MesError::Query {
            status: None,
            message: "timeout".to_string(),
        };
        assert!(err.to_string().contains("timeout"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_truncate_body_counts_chars() {
        let body = "é".repeat(300);
        let truncated = truncate_body(&body, 200);
        assert_eq!(truncated.chars().count(), 200);
        assert_eq!(truncate_body("short", 200), "short");
    }
}
