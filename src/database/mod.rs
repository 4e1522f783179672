pub mod pg_store;
pub mod pool;
pub mod store;

pub use pg_store::PgTriviaStore;
pub use store::TriviaStore;
