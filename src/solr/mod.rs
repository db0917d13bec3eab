//! Outbound collaborator: the Solr collection behind the query builder.

pub mod client;

pub use client::SolrClient;
