pub mod load_queries;
pub mod run_load_test;

// Re-export use cases
pub use load_queries::LoadQueriesUseCase;
pub use run_load_test::RunLoadTestUseCase;
