//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Colloquy Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# api_key = ""            # COLLOQUY_API_KEY overrides this
# model = "glm-4-flash"
# endpoint = "https://open.bigmodel.cn/api/paas/v4/chat/completions"
# connect_timeout_secs = 10   # 1-120
# timeout_secs = 120          # 1-600

[storage]
# directory = "/path/to/conversations"   # default: <data dir>/colloquy/conversations

[session]
# system_prompt = "You are a helpful assistant."
# tools_file = "/path/to/tools.json"     # JSON array of tool definitions

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
    .to_string()
}
