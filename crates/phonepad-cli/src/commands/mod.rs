pub mod decode_ops;
pub mod keypad_ops;
