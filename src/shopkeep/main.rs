use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shopkeep::api::ShopApi;
use shopkeep::commands::{CmdMessage, MessageLevel, ProductUpdate};
use shopkeep::config::ShopConfig;
use shopkeep::error::{Result, ShopError};
use shopkeep::model::Product;
use shopkeep::store::fs::FileStore;
use shopkeep::validate;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(&cli)?;
    let config = ShopConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir);

    let mut api = ShopApi::open(store, config)?;
    print_messages(api.startup_warnings());

    main_menu(&mut api)?;

    api.flush()?;
    Ok(())
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os("SHOPKEEP_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "shopkeep", "shopkeep")
        .ok_or_else(|| ShopError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

// ----- menus -----

fn main_menu(api: &mut ShopApi<FileStore>) -> Result<()> {
    loop {
        print_header();
        match prompt_u32("Enter your choice")? {
            1 => {
                if login(api)? {
                    admin_menu(api)?;
                }
            }
            2 => customer_menu(api)?,
            3 => {
                println!("\nExiting. Goodbye!");
                return Ok(());
            }
            _ => println!("\nInvalid choice. Please try again."),
        }
    }
}

fn print_header() {
    println!("\n---------------------------------------------");
    println!("                 SHOPKEEP                    ");
    println!("---------------------------------------------");
    println!("   1. Admin");
    println!("   2. Customer");
    println!("   3. Exit");
    println!("---------------------------------------------");
}

fn login(api: &ShopApi<FileStore>) -> Result<bool> {
    loop {
        let username = prompt_text("Enter admin username", false)?;
        let password = prompt_text("Enter admin password", false)?;
        if api.login(&username, &password) {
            println!("{}", "\nSuccessfully logged in!".green());
            return Ok(true);
        }
        println!(
            "{}",
            "\nAccess denied. Invalid username or password. Please try again.".red()
        );
    }
}

fn admin_menu(api: &mut ShopApi<FileStore>) -> Result<()> {
    loop {
        println!("\nAdmin Menu");
        println!("----------------------------------------");
        println!("1. Add Product");
        println!("2. Show Available Products");
        println!("3. Modify Product");
        println!("4. Delete Product");
        println!("5. Add Admin");
        println!("6. Search Product");
        println!("7. Sort Products by ID");
        println!("8. View Total Inventory Value");
        println!("9. Generate Report");
        println!("10. Check Low Stock Levels");
        println!("11. Exit");

        match prompt_u32("Enter your choice")? {
            1 => handle_add_product(api)?,
            2 => handle_list(api),
            3 => handle_modify(api)?,
            4 => handle_delete(api)?,
            5 => handle_add_admin(api)?,
            6 => handle_search(api)?,
            7 => handle_sorted_list(api),
            8 => handle_total_value(api),
            9 => present(api.generate_report()),
            10 => present(api.check_low_stock()),
            11 => {
                println!("\nExiting Admin Menu...");
                return Ok(());
            }
            _ => println!("\nInvalid choice. Please try again."),
        }
    }
}

fn customer_menu(api: &mut ShopApi<FileStore>) -> Result<()> {
    loop {
        println!("\nCustomer Menu");
        println!("1. Place Order");
        println!("2. Show Available Products");
        println!("3. Add to Wishlist");
        println!("4. View Wishlist");
        println!("5. Exit");

        match prompt_u32("Enter your choice")? {
            1 => handle_place_order(api)?,
            2 => handle_list(api),
            3 => handle_wishlist_add(api)?,
            4 => handle_wishlist_view(api),
            5 => {
                println!("\nExiting Customer Menu...");
                return Ok(());
            }
            _ => println!("\nInvalid choice. Please try again."),
        }
    }
}

// ----- admin handlers -----

fn handle_add_product(api: &mut ShopApi<FileStore>) -> Result<()> {
    let id = prompt_u32("Enter Product ID")?;
    let product = prompt_product_fields(id)?;
    present(api.add_product(product));
    Ok(())
}

fn handle_list(api: &ShopApi<FileStore>) {
    match api.list_products() {
        Ok(result) => {
            if !result.products.is_empty() {
                println!("\nAvailable Products:");
                print_products(&result.products);
            }
            print_messages(&result.messages);
        }
        Err(e) => print_error(&e),
    }
}

fn handle_sorted_list(api: &ShopApi<FileStore>) {
    // The catalog enumerates in ascending id order already; this menu entry
    // exists so the admin can ask for the sorted view explicitly.
    match api.list_products() {
        Ok(result) => {
            if !result.products.is_empty() {
                println!("\nProducts sorted by ID:");
                print_products(&result.products);
                println!("{}", "\nProducts sorted by ID successfully.".green());
            }
            print_messages(&result.messages);
        }
        Err(e) => print_error(&e),
    }
}

fn handle_modify(api: &mut ShopApi<FileStore>) -> Result<()> {
    let id = prompt_u32("Enter Product ID to modify")?;
    match api.search_product(id) {
        Ok(result) => {
            println!("\nCurrent details:");
            print_product_details(&result.products[0]);
        }
        Err(e) => {
            print_error(&e);
            return Ok(());
        }
    }

    println!("\nEnter new details for the product:");
    let update = ProductUpdate {
        name: prompt_text("Name", true)?,
        category: prompt_text("Category", true)?,
        price: prompt_f64("Price")?,
        quantity: prompt_u32("Quantity")?,
        discount: prompt_f64("Discount (%)")?,
        tax: prompt_f64("Tax (%)")?,
        expiry: prompt_date("Date (YYYY-MM-DD)")?,
    };
    present(api.modify_product(id, update));
    Ok(())
}

fn handle_delete(api: &mut ShopApi<FileStore>) -> Result<()> {
    let id = prompt_u32("Enter product ID to delete")?;
    present(api.delete_product(id));
    Ok(())
}

fn handle_add_admin(api: &mut ShopApi<FileStore>) -> Result<()> {
    let username = prompt_text("Enter New Admin Username", false)?;
    let password = prompt_text("Enter New Admin Password", false)?;
    present(api.add_admin(username, password));
    Ok(())
}

fn handle_search(api: &ShopApi<FileStore>) -> Result<()> {
    let id = prompt_u32("Enter product ID to search")?;
    match api.search_product(id) {
        Ok(result) => {
            println!("\nProduct Found:");
            print_product_details(&result.products[0]);
        }
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_total_value(api: &ShopApi<FileStore>) {
    match api.total_inventory_value() {
        Ok(result) => {
            let total = result.total.unwrap_or(0.0);
            println!(
                "\nTotal Inventory Value: {}{:.2}",
                api.config().currency,
                total
            );
        }
        Err(e) => print_error(&e),
    }
}

// ----- customer handlers -----

fn handle_place_order(api: &mut ShopApi<FileStore>) -> Result<()> {
    let id = prompt_u32("Enter Product ID to order")?;
    let quantity = prompt_u32("Enter Quantity to order")?;
    let currency = api.config().currency.clone();
    match api.place_order(id, quantity) {
        Ok(result) => {
            print_messages(&result.messages);
            if let Some(total) = result.total {
                println!("Total Bill: {}{:.2}", currency, total);
            }
        }
        Err(e) => print_error(&e),
    }
    Ok(())
}

fn handle_wishlist_add(api: &mut ShopApi<FileStore>) -> Result<()> {
    let id = prompt_u32("Enter Product ID to add to wishlist")?;
    present(api.add_to_wishlist(id));
    Ok(())
}

fn handle_wishlist_view(api: &ShopApi<FileStore>) {
    match api.view_wishlist() {
        Ok(result) => {
            if !result.products.is_empty() {
                println!("\nYour Wishlist:");
                print_products(&result.products);
            }
            print_messages(&result.messages);
        }
        Err(e) => print_error(&e),
    }
}

// ----- prompting -----

fn read_line(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().map_err(ShopError::Io)?;

    let mut line = String::new();
    let bytes = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(ShopError::Io)?;
    if bytes == 0 {
        // Input stream closed; there is no way to re-prompt.
        return Err(ShopError::Api("input stream closed".to_string()));
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn prompt_u32(label: &str) -> Result<u32> {
    loop {
        let line = read_line(label)?;
        match line.trim().parse() {
            Ok(n) => return Ok(n),
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}

fn prompt_f64(label: &str) -> Result<f64> {
    loop {
        let line = read_line(label)?;
        match line.trim().parse() {
            Ok(n) => return Ok(n),
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}

/// Alphabetic-only text prompt (optionally allowing spaces); loops until the
/// input passes validation.
fn prompt_text(label: &str, allow_spaces: bool) -> Result<String> {
    loop {
        let line = read_line(label)?;
        if validate::is_valid_text(&line, allow_spaces) {
            return Ok(line);
        }
        println!("Invalid input. Letters only, please try again.");
    }
}

fn prompt_date(label: &str) -> Result<String> {
    loop {
        let line = read_line(label)?;
        if validate::is_valid_date(&line) {
            return Ok(line);
        }
        println!("Invalid date format. Please try again (YYYY-MM-DD).");
    }
}

fn prompt_product_fields(id: u32) -> Result<Product> {
    Ok(Product {
        id,
        name: prompt_text("Enter Product Name", true)?,
        category: prompt_text("Enter Product Category", true)?,
        price: prompt_f64("Enter Product Price")?,
        quantity: prompt_u32("Enter Product Quantity")?,
        discount: prompt_f64("Enter Discount (%)")?,
        tax: prompt_f64("Enter Tax (%)")?,
        expiry: prompt_date("Enter Date (YYYY-MM-DD)")?,
    })
}

// ----- rendering -----

fn present(result: Result<shopkeep::commands::CmdResult>) {
    match result {
        Ok(res) => print_messages(&res.messages),
        Err(e) => print_error(&e),
    }
}

fn print_error(e: &ShopError) {
    println!("{}", format!("\n{}", e).red());
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 20;
const CATEGORY_WIDTH: usize = 16;

fn print_products(products: &[Product]) {
    println!(
        "{:<8}{:<width_n$}{:<width_c$}{:>10}  {:>6}{:>10}{:>8}  {:<12}",
        "ID",
        "Name",
        "Category",
        "Price",
        "Qty",
        "Discount",
        "Tax",
        "Expiry",
        width_n = NAME_WIDTH,
        width_c = CATEGORY_WIDTH,
    );
    println!("{}", "-".repeat(92));
    for p in products {
        let name = pad_to_width(&p.name, NAME_WIDTH);
        let category = pad_to_width(&p.category, CATEGORY_WIDTH);
        println!(
            "{:<8}{}{}{:>10.2}  {:>6}{:>9}%{:>7}%  {:<12}",
            p.id, name, category, p.price, p.quantity, p.discount, p.tax, p.expiry
        );
    }
}

fn print_product_details(p: &Product) {
    println!("ID: {}", p.id);
    println!("Name: {}", p.name);
    println!("Category: {}", p.category);
    println!("Price: {:.2}", p.price);
    println!("Quantity: {}", p.quantity);
    println!("Discount: {}%", p.discount);
    println!("Tax: {}%", p.tax);
    println!("Date: {}", p.expiry);
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
