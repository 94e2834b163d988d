pub mod helpers;
pub mod history;
pub mod inference;
