use solrgate::SolrClient;

pub mod filters;
pub mod health;
pub mod search;
pub mod suggest;

pub struct AppState {
    pub solr: SolrClient,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(solr: SolrClient) -> Self {
        Self {
            solr,
            start_time: std::time::Instant::now(),
        }
    }
}

pub use filters::get_filters;
pub use health::health;
pub use search::search;
pub use suggest::suggest;
