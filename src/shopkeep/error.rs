use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    #[error("Product {0} already exists in the catalog")]
    DuplicateProduct(u32),

    #[error("Not enough stock for product {id}: requested {requested}, {available} available")]
    InsufficientStock {
        id: u32,
        requested: u32,
        available: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ShopError>;
