//! Application-level DTOs that are not tied to a single service contract.

mod balance;
mod user;

pub use balance::BalanceRequest;
pub use user::GetUserIdResponse;
