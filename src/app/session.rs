use crate::app::menu::{self, MenuChoice};
use crate::config::toml_config::{SeedLine, TomlConfig};
use crate::core::cart::Cart;
use crate::core::catalog::Catalog;
use crate::domain::model::ProductRef;
use crate::utils::error::{CartError, Result};
use std::io::{BufRead, Write};

/// Outcome of reading one answer from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Number(i64),
    NotANumber,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Builds the starting cart from configured seed lines.
pub fn seed_cart(catalog: &Catalog, lines: &[SeedLine]) -> Result<Cart> {
    let mut cart = Cart::new();
    for line in lines {
        let product = catalog.get(line.product_id)?;
        cart.add(&product, line.quantity)?;
    }
    Ok(cart)
}

/// The interactive menu loop. Owns the catalog and the cart; reads answers
/// from `input` and writes everything the user sees to `output`.
pub struct Session<R, W> {
    catalog: Catalog,
    cart: Cart,
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, cart: Cart, input: R, output: W) -> Self {
        Self {
            catalog,
            cart,
            input,
            output,
            closed: false,
        }
    }

    pub fn from_config(config: &TomlConfig, empty_cart: bool, input: R, output: W) -> Result<Self> {
        let catalog = config.build_catalog()?;
        let cart = if empty_cart {
            Cart::new()
        } else {
            seed_cart(&catalog, &config.seed_lines())?
        };
        tracing::debug!(
            "Session ready with {} products and {} cart lines",
            catalog.len(),
            cart.len()
        );
        Ok(Self::new(catalog, cart, input, output))
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == Flow::Continue {}
        tracing::info!("Session ended, cart total: {}", self.cart.calculate_total());
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        writeln!(self.output, "{}", menu::MENU)?;
        let choice = match self.ask("Enter your choice: ")? {
            Answer::Number(n) => n,
            Answer::NotANumber => {
                writeln!(self.output, "Invalid input, please enter a number.")?;
                return Ok(Flow::Continue);
            }
            Answer::Closed => return Ok(Flow::Exit),
        };

        let Some(choice) = MenuChoice::from_number(choice) else {
            writeln!(self.output, "Invalid choice.")?;
            return Ok(Flow::Continue);
        };
        tracing::debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::DisplayProducts => {
                let listing = menu::format_products(self.catalog.products());
                write!(self.output, "{}", listing)?;
            }
            MenuChoice::AddProduct => return self.add_product(),
            MenuChoice::ViewCart => {
                write!(self.output, "{}", menu::format_cart(&self.cart))?;
            }
            MenuChoice::UpdateQuantity => return self.update_quantity(),
            MenuChoice::RemoveItem => return self.remove_item(),
            MenuChoice::CalculateTotal => {
                writeln!(self.output, "Total Bill: ${}", self.cart.calculate_total())?;
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(Flow::Exit);
            }
            MenuChoice::ToggleAvailability => return self.toggle_availability(),
        }
        Ok(Flow::Continue)
    }

    fn add_product(&mut self) -> Result<Flow> {
        let Some((product, quantity)) =
            self.ask_product_and_quantity("Enter the product ID: ", "Enter the quantity: ")?
        else {
            return Ok(self.flow_after_prompt());
        };

        match self.cart.add(&product, quantity) {
            Ok(()) => tracing::debug!("Added {} x {} to cart", quantity, product.name()),
            Err(e) => self.report_failure("add product to cart", &e)?,
        }
        Ok(Flow::Continue)
    }

    fn update_quantity(&mut self) -> Result<Flow> {
        let Some((product, quantity)) = self.ask_product_and_quantity(
            "Enter the product ID to update quantity: ",
            "Enter the new quantity: ",
        )?
        else {
            return Ok(self.flow_after_prompt());
        };

        match self.cart.update_quantity(&product, quantity) {
            Ok(()) => tracing::debug!("Set quantity of {} to {}", product.name(), quantity),
            Err(e) => self.report_failure("update cart item quantity", &e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_item(&mut self) -> Result<Flow> {
        let Some(product) = self.ask_product("Enter the product ID to remove from cart: ")? else {
            return Ok(self.flow_after_prompt());
        };

        match self.cart.remove_item(&product) {
            Ok(()) => tracing::debug!("Removed {} from cart", product.name()),
            Err(e) => self.report_failure("remove product from cart", &e)?,
        }
        Ok(Flow::Continue)
    }

    fn toggle_availability(&mut self) -> Result<Flow> {
        let Some(product) = self.ask_product("Enter the product ID to toggle availability: ")? else {
            return Ok(self.flow_after_prompt());
        };

        let available = !product.is_available();
        self.catalog.set_availability(product.id(), available)?;
        let state = if available { "available" } else { "unavailable" };
        tracing::info!("Product {} marked {}", product.name(), state);
        writeln!(self.output, "Product {} is now {}.", product.name(), state)?;
        Ok(Flow::Continue)
    }

    fn report_failure(&mut self, action: &str, err: &CartError) -> Result<()> {
        tracing::warn!("Failed to {}: {}", action, err);
        writeln!(self.output, "Failed to {}: {}", action, err)?;
        Ok(())
    }

    /// After a prompt gave up, keep going unless input has ended.
    fn flow_after_prompt(&self) -> Flow {
        if self.closed {
            Flow::Exit
        } else {
            Flow::Continue
        }
    }

    /// Reads an id and a quantity, then resolves the id. Both answers are
    /// consumed even when the id is unknown.
    fn ask_product_and_quantity(
        &mut self,
        id_prompt: &str,
        quantity_prompt: &str,
    ) -> Result<Option<(ProductRef, i64)>> {
        let Some(id) = self.ask_number(id_prompt)? else {
            return Ok(None);
        };
        let Some(quantity) = self.ask_number(quantity_prompt)? else {
            return Ok(None);
        };
        Ok(self.resolve_product(id)?.map(|product| (product, quantity)))
    }

    fn ask_product(&mut self, prompt: &str) -> Result<Option<ProductRef>> {
        let Some(id) = self.ask_number(prompt)? else {
            return Ok(None);
        };
        self.resolve_product(id)
    }

    fn resolve_product(&mut self, id: i64) -> Result<Option<ProductRef>> {
        match self.catalog.get(id) {
            Ok(product) => Ok(Some(product)),
            Err(e) => {
                tracing::debug!("{}", e);
                writeln!(self.output, "Invalid product ID.")?;
                Ok(None)
            }
        }
    }

    fn ask_number(&mut self, prompt: &str) -> Result<Option<i64>> {
        match self.ask(prompt)? {
            Answer::Number(n) => Ok(Some(n)),
            Answer::NotANumber => {
                writeln!(self.output, "Invalid input, please enter a number.")?;
                Ok(None)
            }
            Answer::Closed => Ok(None),
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Answer> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            self.closed = true;
            return Ok(Answer::Closed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(match line.trim().parse::<i64>() {
            Ok(n) => Answer::Number(n),
            Err(_) => Answer::NotANumber,
        })
    }
}
