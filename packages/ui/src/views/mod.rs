mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod register_student;
pub use register_student::StudentRegisterView;

mod error_page;
pub use error_page::ErrorPage;
