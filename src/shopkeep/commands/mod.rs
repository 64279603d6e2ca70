use crate::model::Product;
use std::path::PathBuf;

pub mod add;
pub mod admins;
pub mod delete;
pub mod list;
pub mod low_stock;
pub mod modify;
pub mod order;
pub mod report;
pub mod search;
pub mod value;
pub mod wishlist;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Products affected or listed by the operation, snapshot copies.
    pub products: Vec<Product>,
    /// A money amount produced by the operation (order total, inventory value).
    pub total: Option<f64>,
    /// Where a report was written, when one was.
    pub report_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_total(mut self, total: f64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_report_path(mut self, path: PathBuf) -> Self {
        self.report_path = Some(path);
        self
    }
}

/// Replacement values for every product field except the id.
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub discount: f64,
    pub tax: f64,
    pub expiry: String,
}
