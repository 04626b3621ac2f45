pub mod lookup_queries;
pub mod timeline_queries;
