pub mod author;
pub mod health;
