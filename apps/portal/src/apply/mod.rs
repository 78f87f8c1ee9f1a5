pub mod form;
pub mod handlers;
pub mod page;
pub mod validation;
