pub mod title_picker;

pub use title_picker::TitlePicker;
