pub mod customers;
pub mod messages;
pub mod orders;
pub mod products;
