pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The language tag could not be normalized to a supported language.
	#[error("unsupported language tag {0:?}")]
	InvalidArgument(String),
	/// No row in the store has this country code.
	#[error("unknown country code {0:?}")]
	NotFound(String),
	/// The store failed to execute the read.
	#[error("error executing SQL query: {0}")]
	Query(#[from] sqlx::Error),
}
