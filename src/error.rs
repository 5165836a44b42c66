use crate::model::BlockId;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("unknown block type: {0}")]
    UnknownBlockType(String),

    #[error("block not on canvas: {0}")]
    BlockNotFound(BlockId),

    #[error("block already on canvas: {0}")]
    DuplicateBlock(BlockId),

    #[error("canvas is empty")]
    EmptyCanvas,

    #[error("malformed drag payload")]
    MalformedPayload,

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl EditorError {
    pub fn unknown_block_type(id: impl Into<String>) -> Self {
        Self::UnknownBlockType(id.into())
    }

    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
