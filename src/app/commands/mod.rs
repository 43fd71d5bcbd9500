pub mod export;
pub mod generate;
pub mod people;
pub mod prompt;
pub mod show;
