//! Service defaults shared by the config schema and the GLM client.

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "glm-4-flash";

/// Zhipu GLM chat-completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://open.bigmodel.cn/api/paas/v4/chat/completions";
