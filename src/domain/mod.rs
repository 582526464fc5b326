pub mod application;
pub mod cart;
pub mod menu;
pub mod order;

pub use application::*;
pub use cart::*;
pub use menu::*;
pub use order::*;
