use crate::core::cart::Cart;
use crate::domain::model::ProductRef;
use std::fmt::Write as _;

pub const MENU: &str = "\nMenu:
1. Display Products
2. Add Product to Cart
3. View Cart
4. Update Cart Item Quantity
5. Remove Item from Cart
6. Calculate Total Bill
7. Exit
8. Toggle Product Availability";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayProducts,
    AddProduct,
    ViewCart,
    UpdateQuantity,
    RemoveItem,
    CalculateTotal,
    Exit,
    ToggleAvailability,
}

impl MenuChoice {
    pub fn from_number(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::DisplayProducts),
            2 => Some(Self::AddProduct),
            3 => Some(Self::ViewCart),
            4 => Some(Self::UpdateQuantity),
            5 => Some(Self::RemoveItem),
            6 => Some(Self::CalculateTotal),
            7 => Some(Self::Exit),
            8 => Some(Self::ToggleAvailability),
            _ => None,
        }
    }
}

pub fn format_products<'a>(products: impl IntoIterator<Item = &'a ProductRef>) -> String {
    let mut output = String::from("Available Products:\n");
    for product in products {
        let _ = writeln!(output, "{}", product);
    }
    output
}

pub fn format_cart(cart: &Cart) -> String {
    let mut output = String::from("Shopping Cart:\n");
    for line in cart.lines() {
        let _ = writeln!(
            output,
            "Product: {}, Quantity: {}, Price: ${}",
            line.product().name(),
            line.quantity(),
            line.product().price()
        );
    }
    let _ = writeln!(output, "Total: ${}", cart.calculate_total());
    output
}
