mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod register_student;
pub use register_student::RegisterStudent;

mod not_found;
pub use not_found::NotFound;
