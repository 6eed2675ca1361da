// Driver layer: the text menu that calls into the cart core.

pub mod menu;
pub mod session;

pub use session::{seed_cart, Session};
