//! Application Layer
//!
//! Use cases orchestrating the domain and the repository boundary.

pub mod access_gate;
pub mod change_password;
pub mod config;
pub mod login;
pub mod manage_users;
pub mod register;
pub mod session;

pub use access_gate::{Identity, ResolveIdentityUseCase, authorize};
pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use manage_users::ManageUsersUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use session::{SessionClaims, SessionIssuer};
