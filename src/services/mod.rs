// Services module for business logic
pub mod creator;
