/// A single catalog record.
///
/// The catalog owns the canonical copy of every product. The wishlist, the
/// order history and the low-stock queue hold independent clones (snapshots),
/// so mutating the catalog never rewrites what was wishlisted or ordered.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    /// Discount percentage applied before tax.
    pub discount: f64,
    /// Tax percentage applied after the discount.
    pub tax: f64,
    // Expiry/reference date as entered (YYYY-MM-DD expected, not enforced on load)
    pub expiry: String,
}

impl Product {
    /// Effective price of one unit: discount applied before tax.
    pub fn net_unit_price(&self) -> f64 {
        self.price * (1.0 - self.discount / 100.0) * (1.0 + self.tax / 100.0)
    }
}

/// Plaintext username/password pair compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredential {
    pub username: String,
    pub password: String,
}

impl AdminCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Seeded when no admin file exists yet.
    pub fn default_admin() -> Self {
        Self::new("admin", "admin")
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}
