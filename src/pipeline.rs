use std::time::Duration;

use log::info;

use crate::chunker::split_into_chunks;
use crate::delay_manager;
use crate::input_loader::CompanyRecord;
use crate::results::FounderList;

/// Finds candidate founder pages for a company.
pub trait PageSearch {
    fn candidate_pages(&self, company: &CompanyRecord) -> Vec<String>;
}

/// Fetches a page and returns its cleaned body text, empty on failure.
pub trait PageFetch {
    fn fetch_body(&self, url: &str) -> String;
}

/// Extracts founder names from one chunk of page text.
pub trait FounderExtraction {
    fn founder_names(&self, chunk: &str, company: &str) -> Vec<String>;
}

/// Sequential per-company flow: search, fetch each candidate page, chunk
/// its body, run extraction per chunk with a fixed pause between
/// consecutive chunks of the same page, and accumulate unique names in
/// discovery order.
pub struct Pipeline<S, F, E> {
    search: S,
    fetcher: F,
    extractor: E,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl<S, F, E> Pipeline<S, F, E>
where
    S: PageSearch,
    F: PageFetch,
    E: FounderExtraction,
{
    pub fn new(
        search: S,
        fetcher: F,
        extractor: E,
        chunk_size: usize,
        chunk_delay: Duration,
    ) -> Self {
        Pipeline {
            search,
            fetcher,
            extractor,
            chunk_size,
            chunk_delay,
        }
    }

    pub fn find_founders(&self, company: &CompanyRecord) -> FounderList {
        let mut founders = FounderList::default();

        for url in self.search.candidate_pages(company) {
            let body = self.fetcher.fetch_body(&url);
            if body.is_empty() {
                continue;
            }

            let chunks = split_into_chunks(&body, self.chunk_size);
            for (i, chunk) in chunks.iter().enumerate() {
                if i > 0 {
                    delay_manager::inter_chunk_pause(self.chunk_delay);
                }
                for name in self.extractor.founder_names(chunk, &company.name) {
                    if founders.insert(name.clone()) {
                        info!("Found founder '{}' for {}", name, company.name);
                    }
                }
            }
        }

        founders
    }
}
