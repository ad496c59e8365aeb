pub mod card;
pub mod cfg;
pub mod error;
pub mod utils;
pub mod webhook;
