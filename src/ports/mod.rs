mod generation_client;
mod table_source;

pub use generation_client::GenerationClient;
pub use table_source::TableSource;
