pub mod user;

// Re-export so code outside can do "use crate::models::User;"
pub use user::User;
