pub mod date_picker;

pub use date_picker::{DatePicker, MinViewMode, StartView};
