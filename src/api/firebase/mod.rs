pub mod client;
pub mod credentials;
pub mod models;

pub use client::FirebaseClient;
pub use models::ApiError;
