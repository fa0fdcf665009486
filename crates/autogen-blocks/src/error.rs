//! Error types for autogen-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Block name {name:?} is {length} UTF-16 units long; banners fit at most {max}")]
    BlockNameTooLong {
        name: String,
        length: usize,
        max: usize,
    },

    #[error("Invalid block pattern: {0}")]
    Pattern(#[from] regex::Error),
}
