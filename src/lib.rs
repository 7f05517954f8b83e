pub mod config;
pub mod model;
pub mod normalizer;
pub mod notifier;
pub mod parser;
pub mod pipeline;
pub mod ranker;
pub mod scorer;
pub mod scraper;
pub mod storage;
