pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:1234/v1";

/// The local server does not check credentials, but the OpenAI wire format expects one.
pub const PLACEHOLDER_API_KEY: &str = "lm-studio";

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const UNBOUNDED_MAX_TOKENS: i32 = -1;

pub const MODELS_PATH: &str = "/models";
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
pub const RESPONSES_PATH: &str = "/responses";

pub const DONE_MARKER: &str = "[DONE]";
pub const ERROR_EVENT: &str = "error";

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const SERVER_PORT: u16 = 8000;

pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const READ_TIMEOUT_SECS: u64 = 300;

/// One in-flight frame between the upstream reader and the client.
pub const CHANNEL_BUFFER_SIZE: usize = 1;

/// Longest upstream stream line accepted before the stream is failed.
pub const MAX_LINE_BYTES: usize = 8 * 1024 * 1024;
