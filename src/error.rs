use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlphaForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed word at line {line}: '{word}' (only letters A-Z are accepted)")]
    MalformedWord { line: usize, word: String },

    #[error("Corpus contains no words after indexing")]
    EmptyCorpus,

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type AfResult<T> = Result<T, AlphaForgeError>;
