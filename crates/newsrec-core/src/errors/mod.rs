mod corpus_error;
mod newsrec_error;
mod selection_error;
mod session_error;
mod vectorize_error;

pub use corpus_error::CorpusError;
pub use newsrec_error::{NewsrecError, NewsrecResult};
pub use selection_error::SelectionError;
pub use session_error::SessionError;
pub use vectorize_error::VectorizeError;
