pub mod entry_list;
pub mod form_row;
pub mod toast;
