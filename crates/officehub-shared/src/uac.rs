//! Shared items related to who the user is and what they may see

mod identity;
mod organization;
mod responses;
mod role;
mod tokens;

pub use identity::{validate_email, DisplayName, Identity, IdentityUpdate};
pub use organization::{Organization, SubscriptionStatus};
pub use responses::LoginResponse;
pub use role::Role;
pub use tokens::TokenPair;
