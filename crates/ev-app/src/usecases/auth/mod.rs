pub mod logout;
pub mod sign_in;
pub mod sign_up;

pub use logout::{Logout, LogoutError};
pub use sign_in::{SignIn, SignInError};
pub use sign_up::{PostSignUp, SignUp, SignUpError};
