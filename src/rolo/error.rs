use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("The id parameter must be a positive integer. Provided value is \"{0}\".")]
    InvalidId(String),

    #[error("There is no contact found with id={0}.")]
    NotFound(u32),

    #[error("Unable to add a contact for person with the name \"{0}\". It is already in the list.")]
    DuplicateName(String),

    #[error("The name parameter must not be empty.")]
    EmptyName,

    #[error("Unable to access the contacts file: {0}")]
    Storage(#[from] std::io::Error),

    #[error("The contacts file does not contain a valid contact list: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoloError>;
