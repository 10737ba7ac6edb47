//! Custom widget components

mod confirm_dialog;
mod filter_bar;
mod header;
pub mod modal;
mod product_form;
mod product_list;
mod status_bar;

pub use confirm_dialog::ConfirmDialog;
pub use filter_bar::FilterBar;
pub use header::MainHeader;
pub use product_form::ProductForm;
pub use product_list::{format_price, ListViewport, ProductList};
pub use status_bar::StatusBar;
