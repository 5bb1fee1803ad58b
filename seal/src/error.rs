use thiserror::Error;

#[derive(Debug, Error)]
pub enum SealError {
    #[error("nonce space exhausted before meeting difficulty {difficulty}")]
    NonceSpaceExhausted { difficulty: u32 },
}
