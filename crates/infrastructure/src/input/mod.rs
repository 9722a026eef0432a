pub mod csv_query_source;

pub use csv_query_source::CsvQuerySource;
