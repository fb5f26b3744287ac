pub mod claims;
pub mod middleware;
pub mod password;
pub mod session;

pub use claims::SessionClaims;
pub use middleware::RequestContext;
pub use session::{SessionService, SESSION_COOKIE};
