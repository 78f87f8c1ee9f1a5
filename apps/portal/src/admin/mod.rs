pub mod cards;
pub mod handlers;
pub mod page;
