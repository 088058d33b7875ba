//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod dialog;
pub mod gallery;
pub mod image_card;
pub mod importer;
pub mod text_input;
pub mod utils;

pub use app_layout::{AppLayoutView, NavItem};
pub use button::{Button, ButtonVariant};
pub use dialog::ImportDialog;
pub use gallery::GalleryView;
pub use image_card::ImageCard;
pub use importer::ImporterView;
pub use text_input::TextInput;
pub use utils::format_size_kb;
