#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum GroupingError {
    #[error("Input has {contacts} contacts, more than the limit of {limit}.")]
    InputTooLarge { contacts: usize, limit: usize },

    #[error(transparent)]
    Assignment(#[from] crate::assignment::Error),
}

pub type Result<T> = std::result::Result<T, GroupingError>;
