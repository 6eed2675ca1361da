use anyhow::Result;
use cart_manager::{Cart, Catalog, Session, TomlConfig};
use std::io::Cursor;
use std::io::Write;
use tempfile::NamedTempFile;

fn run_session(session_input: &str, config: &TomlConfig, empty_cart: bool) -> Result<(String, Cart)> {
    let mut session = Session::from_config(
        config,
        empty_cart,
        Cursor::new(session_input.as_bytes().to_vec()),
        Vec::new(),
    )?;
    session.run()?;
    let cart = session.cart().clone();
    let output = String::from_utf8(session.into_output())?;
    Ok((output, cart))
}

#[test]
fn test_default_session_starts_seeded() -> Result<()> {
    let (output, cart) = run_session("6\n7\n", &TomlConfig::default(), false)?;

    assert!(output.contains("1. Display Products"));
    assert!(output.contains("Total Bill: $2050"));
    assert!(output.ends_with("Exiting...\n"));
    assert_eq!(cart.len(), 2);
    Ok(())
}

#[test]
fn test_menu_walkthrough() -> Result<()> {
    // add 2 laptops, add a headphone, set laptops to 1, remove headphone twice
    let input = "2\n1\n2\n2\n2\n1\n4\n1\n1\n5\n2\n5\n2\n3\n7\n";
    let (output, cart) = run_session(input, &TomlConfig::default(), true)?;

    assert!(output.contains("Failed to remove product from cart: Product HeadPhone not found in the cart"));
    assert!(output.contains("Shopping Cart:\nProduct: Laptop, Quantity: 1, Price: $1000\nTotal: $1000\n"));
    assert_eq!(cart.calculate_total(), 1000);
    Ok(())
}

#[test]
fn test_display_products() -> Result<()> {
    let (output, _) = run_session("1\n7\n", &TomlConfig::default(), true)?;

    assert!(output.contains("Available Products:\nID: 1, Name: Laptop, Price: $1000, Available: true\n"));
    assert!(output.contains("ID: 2, Name: HeadPhone, Price: $50, Available: true\n"));
    Ok(())
}

#[test]
fn test_invalid_inputs_do_not_end_session() -> Result<()> {
    let input = "abc\n42\n2\n9\n1\n2\n1\nlots\n6\n7\n";
    let (output, cart) = run_session(input, &TomlConfig::default(), true)?;

    assert!(output.contains("Invalid input, please enter a number."));
    assert!(output.contains("Invalid choice."));
    assert!(output.contains("Invalid product ID."));
    assert!(output.contains("Total Bill: $0"));
    assert!(cart.is_empty());
    Ok(())
}

#[test]
fn test_non_utf8_input_is_rejected_not_fatal() -> Result<()> {
    let mut session = Session::from_config(
        &TomlConfig::default(),
        false,
        Cursor::new(b"\xff\xfe\n6\n7\n".to_vec()),
        Vec::new(),
    )?;
    session.run()?;
    let output = String::from_utf8(session.into_output())?;

    assert!(output.contains("Invalid input, please enter a number."));
    assert!(output.contains("Total Bill: $2050"));
    assert!(output.ends_with("Exiting...\n"));
    Ok(())
}

#[test]
fn test_unknown_product_still_consumes_quantity() -> Result<()> {
    // the quantity 7 must not be read as the Exit choice
    let input = "2\n9\n7\n4\n9\n7\n6\n7\n";
    let (output, cart) = run_session(input, &TomlConfig::default(), true)?;

    assert_eq!(output.matches("Invalid product ID.").count(), 2);
    assert!(output.contains("Enter the quantity: "));
    assert!(output.contains("Enter the new quantity: "));
    assert!(output.contains("Total Bill: $0"));
    assert_eq!(output.matches("Exiting...").count(), 1);
    assert!(cart.is_empty());
    Ok(())
}

#[test]
fn test_cart_failures_are_reported() -> Result<()> {
    let input = "2\n1\n0\n4\n2\n3\n7\n";
    let (output, _) = run_session(input, &TomlConfig::default(), true)?;

    assert!(output.contains("Failed to add product to cart: Product Laptop has an invalid quantity: 0"));
    assert!(output.contains("Failed to update cart item quantity: Product HeadPhone not found in the cart"));
    Ok(())
}

#[test]
fn test_toggle_availability_blocks_add() -> Result<()> {
    let input = "8\n2\n2\n2\n1\n8\n2\n7\n";
    let (output, cart) = run_session(input, &TomlConfig::default(), true)?;

    assert!(output.contains("Product HeadPhone is now unavailable."));
    assert!(output.contains("Failed to add product to cart: Product HeadPhone is unavailable"));
    assert!(output.contains("Product HeadPhone is now available."));
    assert!(cart.is_empty());
    Ok(())
}

#[test]
fn test_update_to_zero_keeps_line() -> Result<()> {
    let input = "4\n1\n0\n3\n7\n";
    let (output, cart) = run_session(input, &TomlConfig::default(), false)?;

    assert!(output.contains("Product: Laptop, Quantity: 0, Price: $1000"));
    assert_eq!(cart.quantity_of(1), Some(0));
    assert_eq!(cart.calculate_total(), 50);
    Ok(())
}

#[test]
fn test_end_of_input_ends_session() -> Result<()> {
    let (output, cart) = run_session("2\n1\n", &TomlConfig::default(), true)?;

    assert!(!output.contains("Exiting..."));
    assert!(cart.is_empty());
    Ok(())
}

#[test]
fn test_session_from_config_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[[catalog.products]]
id = 10
name = "Monitor"
price = 300

[[catalog.products]]
id = 11
name = "Cable"
price = 5

[[cart.initial]]
product_id = 11
quantity = 4
"#,
    )?;

    let config = TomlConfig::from_file(temp_file.path())?;
    let (output, cart) = run_session("2\n10\n1\n6\n7\n", &config, false)?;

    assert!(output.contains("Total Bill: $320"));
    assert_eq!(cart.quantity_of(10), Some(1));
    assert_eq!(cart.quantity_of(11), Some(4));
    Ok(())
}

#[test]
fn test_seed_cart_rejects_unknown_product() {
    let catalog = Catalog::default_products();
    let lines = [cart_manager::config::toml_config::SeedLine {
        product_id: 5,
        quantity: 1,
    }];
    assert!(cart_manager::app::seed_cart(&catalog, &lines).is_err());
}
