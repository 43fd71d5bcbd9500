pub mod gemini;
pub mod table_filesystem;

pub use gemini::HttpGeminiClient;
pub use table_filesystem::FilesystemTableSource;
