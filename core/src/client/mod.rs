//! Authentication plumbing shared by every Workflow API request.

mod auth;
pub mod oauth2;

pub use auth::{AuthHeaders, TENANT_ID_HEADER};
pub use oauth2::{fetch_access_token, CachedToken, OAuth2Credentials, TokenResponse};
