mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod todo;
pub use todo::Todo;
