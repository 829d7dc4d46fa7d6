pub mod components;
pub mod date_utils;
pub mod entry_form;
pub mod icons;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
