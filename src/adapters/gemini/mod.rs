pub mod http;
mod wire;

pub use self::http::HttpGeminiClient;
