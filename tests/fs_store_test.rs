use shopkeep::model::{AdminCredential, Product};
use shopkeep::store::fs::FileStore;
use shopkeep::store::{DataStore, OrderRecord};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    (dir, store)
}

fn product(id: u32) -> Product {
    Product {
        id,
        name: format!("Item{}", id),
        category: "General".to_string(),
        price: 12.5,
        quantity: 7,
        discount: 10.0,
        tax: 5.0,
        expiry: "2026-01-15".to_string(),
    }
}

#[test]
fn test_catalog_roundtrip_preserves_tuples() {
    let (_dir, mut store) = setup();

    let products = vec![product(5), product(1), product(3)];
    store.save_products(&products).unwrap();

    let loaded = store.load_products().unwrap();
    assert!(loaded.skipped.is_empty());
    assert_eq!(loaded.records.len(), 3);
    for p in &products {
        assert!(loaded.records.contains(p));
    }
}

#[test]
fn test_missing_files_load_as_empty() {
    let (_dir, store) = setup();
    assert!(store.load_products().unwrap().records.is_empty());
    assert!(store.load_wishlist().unwrap().records.is_empty());
}

#[test]
fn test_malformed_lines_are_skipped_with_diagnostics() {
    let (dir, store) = setup();
    fs::write(
        dir.path().join("products.csv"),
        "1,Sugar,Grocery,10.0,5,0,0,2026-01-15\n\
         not a record\n\
         2,Tea,Beverages,oops,5,0,0,2026-01-15\n\
         3,Rice,Grocery,4.5,40,0,0,2026-01-15\n",
    )
    .unwrap();

    let loaded = store.load_products().unwrap();
    let ids: Vec<u32> = loaded.records.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(loaded.skipped.len(), 2);
}

#[test]
fn test_save_truncates_previous_contents() {
    let (_dir, mut store) = setup();
    store.save_products(&[product(1), product(2)]).unwrap();
    store.save_products(&[product(9)]).unwrap();

    let loaded = store.load_products().unwrap().records;
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 9);
}

#[test]
fn test_missing_admin_file_seeds_default() {
    let (_dir, store) = setup();
    let loaded = store.load_admins().unwrap();
    assert_eq!(loaded.records, vec![AdminCredential::default_admin()]);
}

#[test]
fn test_saved_admins_replace_the_seed() {
    let (_dir, mut store) = setup();
    let admins = vec![AdminCredential::new("alice", "pw")];
    store.save_admins(&admins).unwrap();

    let loaded = store.load_admins().unwrap();
    assert_eq!(loaded.records, admins);
}

#[test]
fn test_wishlist_roundtrip_preserves_order() {
    let (_dir, mut store) = setup();
    let entries = vec![product(3), product(1)];
    store.save_wishlist(&entries).unwrap();

    let loaded = store.load_wishlist().unwrap().records;
    let ids: Vec<u32> = loaded.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn test_order_log_appends_human_readable_blocks() {
    let (dir, mut store) = setup();
    let order = OrderRecord {
        product_id: 1,
        product_name: "Sugar".to_string(),
        quantity: 2,
        total: 189.0,
    };
    store.append_order(&order).unwrap();
    store.append_order(&order).unwrap();

    let log = fs::read_to_string(dir.path().join("orders.log")).unwrap();
    assert_eq!(log.matches("Product ID: 1").count(), 2);
    assert!(log.contains("Product Name: Sugar"));
    assert!(log.contains("Quantity Ordered: 2"));
    assert!(log.contains("Total Price: 189.00"));
}

#[test]
fn test_report_has_header_and_one_line_per_product() {
    let (dir, mut store) = setup();
    let path = store.write_report(&[product(1), product(2)]).unwrap();
    assert_eq!(path, dir.path().join("report.csv"));

    let report = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ID,Name,Category,Price,Quantity,Discount,Tax,Expiry Date");
    assert!(lines[1].starts_with("1,Item1,General,12.50,7,"));
}
