pub mod chunker;
pub mod config;
pub mod delay_manager;
pub mod error;
pub mod extractor;
pub mod input_loader;
pub mod logger;
pub mod output_writer;
pub mod page_fetcher;
pub mod pipeline;
pub mod results;
pub mod search_engine;

// Exporting types for convenience
pub use config::Config;
pub use error::FinderError;
pub use extractor::FounderExtractor;
pub use input_loader::CompanyRecord;
pub use page_fetcher::PageFetcher;
pub use pipeline::Pipeline;
pub use results::{FounderList, ResultMap};
pub use search_engine::SearchEngine;
