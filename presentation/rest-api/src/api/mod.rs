pub mod category;
pub mod error;
pub mod grocery_item;
pub mod health;
pub mod tags;
