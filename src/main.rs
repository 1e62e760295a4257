use log::{info, warn};

use founder_finder_lib::chunker::DEFAULT_CHUNK_SIZE;
use founder_finder_lib::delay_manager::CHUNK_DELAY;
use founder_finder_lib::{
    input_loader, logger, output_writer, Config, FinderError, FounderExtractor, PageFetcher,
    Pipeline, ResultMap, SearchEngine,
};

fn main() -> Result<(), FinderError> {
    logger::init();
    info!("Starting Founder Finder...");

    let config = Config::from_env()?;

    let records = input_loader::load_companies(&config.input_path)?;
    if records.is_empty() {
        warn!(
            "No companies found in {:?}. Expected one `Name (URL)` per line.",
            config.input_path
        );
        return Ok(());
    }

    let search_engine = SearchEngine::new(
        config.search_api_key,
        config.search_engine_id,
        config.search_endpoint,
    );
    let page_fetcher = PageFetcher::new();
    let extractor = FounderExtractor::new(config.model_api_key, config.model_endpoint, config.model);
    let pipeline = Pipeline::new(
        search_engine,
        page_fetcher,
        extractor,
        DEFAULT_CHUNK_SIZE,
        CHUNK_DELAY,
    );

    let total = records.len();
    let mut results = ResultMap::default();

    for (i, record) in records.iter().enumerate() {
        info!("Processing {} / {} : {}", i + 1, total, record.name);

        let founders = pipeline.find_founders(record);
        if founders.is_empty() {
            info!("No founders found for {}", record.name);
        } else {
            info!("Found {} founder(s) for {}", founders.len(), record.name);
        }

        // A duplicate input line overwrites the earlier entry.
        results.insert(record.name.clone(), founders);
    }

    output_writer::write_results(&results, &config.output_path)?;
    info!(
        "Done. Results for {} companies written to {:?}",
        results.len(),
        config.output_path
    );

    Ok(())
}
