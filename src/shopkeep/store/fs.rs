use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::{DataStore, Loaded, OrderRecord};
use crate::error::{Result, ShopError};
use crate::model::{AdminCredential, Product};

const PRODUCTS_FILE: &str = "products.csv";
const ADMINS_FILE: &str = "admins.csv";
const WISHLIST_FILE: &str = "wishlist.csv";
const ORDERS_FILE: &str = "orders.log";
const REPORT_FILE: &str = "report.csv";

/// File-based storage rooted at a single data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShopError::Io)?;
        }
        Ok(())
    }

    /// Non-empty lines of a delimited file; an absent file is an empty store.
    fn read_lines(&self, filename: &str) -> Result<Vec<String>> {
        let path = self.root.join(filename);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(ShopError::Io)?;
        Ok(content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    fn write_file(&self, filename: &str, content: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.root.join(filename), content).map_err(ShopError::Io)?;
        Ok(())
    }

    fn load_product_file(&self, filename: &str, what: &str) -> Result<Loaded<Product>> {
        let mut loaded = Loaded::default();
        for line in self.read_lines(filename)? {
            match decode_product(&line) {
                Some(product) => loaded.records.push(product),
                None => loaded
                    .skipped
                    .push(format!("Skipping malformed {} record: {}", what, line)),
            }
        }
        Ok(loaded)
    }

    fn save_product_file(&mut self, filename: &str, products: &[Product]) -> Result<()> {
        let mut content = String::new();
        for product in products {
            content.push_str(&encode_product(product));
            content.push('\n');
        }
        self.write_file(filename, &content)
    }
}

/// Encode one catalog record: `id,name,category,price,quantity,discount,tax,date`.
/// Embedded commas are not escaped; the text validators keep them out of names.
fn encode_product(p: &Product) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        p.id, p.name, p.category, p.price, p.quantity, p.discount, p.tax, p.expiry
    )
}

/// Decode one catalog record, or `None` when the line is malformed
/// (wrong field count, unparseable numerics).
fn decode_product(line: &str) -> Option<Product> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 8 {
        return None;
    }
    Some(Product {
        id: fields[0].trim().parse().ok()?,
        name: fields[1].to_string(),
        category: fields[2].to_string(),
        price: fields[3].trim().parse().ok()?,
        quantity: fields[4].trim().parse().ok()?,
        discount: fields[5].trim().parse().ok()?,
        tax: fields[6].trim().parse().ok()?,
        expiry: fields[7].to_string(),
    })
}

fn encode_admin(a: &AdminCredential) -> String {
    format!("{},{}", a.username, a.password)
}

fn decode_admin(line: &str) -> Option<AdminCredential> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 2 {
        return None;
    }
    Some(AdminCredential::new(fields[0], fields[1]))
}

impl DataStore for FileStore {
    fn load_products(&self) -> Result<Loaded<Product>> {
        self.load_product_file(PRODUCTS_FILE, "product")
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.save_product_file(PRODUCTS_FILE, products)
    }

    fn load_admins(&self) -> Result<Loaded<AdminCredential>> {
        if !self.root.join(ADMINS_FILE).exists() {
            // First run: seed the default credential
            return Ok(Loaded::from_records(vec![AdminCredential::default_admin()]));
        }
        let mut loaded = Loaded::default();
        for line in self.read_lines(ADMINS_FILE)? {
            match decode_admin(&line) {
                Some(admin) => loaded.records.push(admin),
                None => loaded
                    .skipped
                    .push(format!("Skipping malformed admin record: {}", line)),
            }
        }
        Ok(loaded)
    }

    fn save_admins(&mut self, admins: &[AdminCredential]) -> Result<()> {
        let mut content = String::new();
        for admin in admins {
            content.push_str(&encode_admin(admin));
            content.push('\n');
        }
        self.write_file(ADMINS_FILE, &content)
    }

    fn load_wishlist(&self) -> Result<Loaded<Product>> {
        self.load_product_file(WISHLIST_FILE, "wishlist")
    }

    fn save_wishlist(&mut self, entries: &[Product]) -> Result<()> {
        self.save_product_file(WISHLIST_FILE, entries)
    }

    fn append_order(&mut self, order: &OrderRecord) -> Result<()> {
        self.ensure_root()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.root.join(ORDERS_FILE))
            .map_err(ShopError::Io)?;
        writeln!(file, "Product ID: {}", order.product_id).map_err(ShopError::Io)?;
        writeln!(file, "Product Name: {}", order.product_name).map_err(ShopError::Io)?;
        writeln!(file, "Quantity Ordered: {}", order.quantity).map_err(ShopError::Io)?;
        writeln!(file, "Total Price: {:.2}", order.total).map_err(ShopError::Io)?;
        writeln!(
            file,
            "Placed At: {}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )
        .map_err(ShopError::Io)?;
        Ok(())
    }

    fn write_report(&mut self, products: &[Product]) -> Result<PathBuf> {
        let mut content =
            String::from("ID,Name,Category,Price,Quantity,Discount,Tax,Expiry Date\n");
        for p in products {
            content.push_str(&format!(
                "{},{},{},{:.2},{},{},{},{}\n",
                p.id, p.name, p.category, p.price, p.quantity, p.discount, p.tax, p.expiry
            ));
        }
        self.write_file(REPORT_FILE, &content)?;
        Ok(self.root.join(REPORT_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32) -> Product {
        Product {
            id,
            name: format!("Item{}", id),
            category: "General".to_string(),
            price: 12.5,
            quantity: 4,
            discount: 10.0,
            tax: 5.0,
            expiry: "2026-01-15".to_string(),
        }
    }

    #[test]
    fn product_record_roundtrip() {
        let p = product(3);
        let decoded = decode_product(&encode_product(&p)).unwrap();
        assert_eq!(decoded, p);
    }

    #[test]
    fn decode_rejects_wrong_field_count() {
        assert!(decode_product("1,Sugar,Grocery,10.0,5,0,0").is_none());
        assert!(decode_product("1,Sugar,Grocery,10.0,5,0,0,2026-01-15,extra").is_none());
        assert!(decode_product("").is_none());
    }

    #[test]
    fn decode_rejects_non_numeric_fields() {
        assert!(decode_product("x,Sugar,Grocery,10.0,5,0,0,2026-01-15").is_none());
        assert!(decode_product("1,Sugar,Grocery,cheap,5,0,0,2026-01-15").is_none());
        assert!(decode_product("1,Sugar,Grocery,10.0,many,0,0,2026-01-15").is_none());
    }

    #[test]
    fn decode_keeps_date_text_as_entered() {
        // Dates are not re-validated on load.
        let decoded = decode_product("1,Sugar,Grocery,10.0,5,0,0,not a date").unwrap();
        assert_eq!(decoded.expiry, "not a date");
    }

    #[test]
    fn admin_record_roundtrip() {
        let a = AdminCredential::new("alice", "hunter");
        assert_eq!(decode_admin(&encode_admin(&a)).unwrap(), a);
        assert!(decode_admin("just-one-field").is_none());
    }
}
