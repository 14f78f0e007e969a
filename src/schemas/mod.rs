pub mod login_schema;
pub mod product_schema;
pub mod register_schema;
