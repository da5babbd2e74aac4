pub mod aggregate;
pub mod category;
pub mod document;
pub mod record;
