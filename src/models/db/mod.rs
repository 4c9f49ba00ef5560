pub mod models;
pub mod schema;
#[cfg(feature = "postgres")]
pub mod ops;
#[cfg(feature = "postgres")]
mod conn;

#[cfg(feature = "postgres")]
pub use conn::PgRepository;
