pub mod contact_card;
pub mod contact_form;
pub mod contact_list;
pub mod main_window;
