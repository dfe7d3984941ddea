use thiserror::Error;

/// Failures talking to the content backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Not enough permissions")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Login failed. Please check your credentials.")]
    InvalidCredentials,

    #[error("Login failed. The account could not be verified.")]
    Unverified,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Invalid content document: {0}")]
    Syntax(String),

    #[error("Content document must be a JSON object")]
    NotAnObject,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Admin privileges are required")]
    NotAuthorized,

    #[error("The '{0}' page cannot be deleted")]
    ProtectedPage(String),

    #[error("Invalid page name '{0}'")]
    InvalidSlug(String),

    #[error("A page named '{0}' already exists")]
    DuplicatePage(String),

    #[error("'{0}' is reserved for a built-in route")]
    ReservedSlug(String),

    #[error("{0} was changed by someone else since it was opened")]
    Conflict(String),

    #[error("Deletion was not confirmed")]
    NotConfirmed,
}
