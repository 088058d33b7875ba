//! Gallery state store

use crate::display_types::{ImageRecord, ImageSource};

/// State for the gallery view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    /// Images from the most recently completed fetch, replaced wholesale
    pub images: Vec<ImageRecord>,
    /// Active source filter; `None` lists every provider
    pub filter: Option<ImageSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_unfiltered() {
        let state = GalleryState::default();
        assert!(state.images.is_empty());
        assert_eq!(state.filter, None);
    }
}
