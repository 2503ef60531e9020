pub mod monitor;
pub mod practicum;
pub mod review;
pub mod telegram;
