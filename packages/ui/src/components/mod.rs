mod button;
pub use button::Button;

mod text_field;
pub use text_field::TextField;
