pub mod font;
pub(crate) mod os;
