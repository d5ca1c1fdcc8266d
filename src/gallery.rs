use crate::error::FormError;
use crate::models::ImageRecord;
use crate::normalize::to_absolute_url;

/// Ordered images of one listing as shown on the manage-images screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageGallery {
    property_id: String,
    /// Root-relative URLs of added images resolve against this
    origin: String,
    images: Vec<ImageRecord>,
}

impl ImageGallery {
    pub fn new(property_id: impl Into<String>, origin: impl Into<String>, images: Vec<ImageRecord>) -> Self {
        Self {
            property_id: property_id.into(),
            origin: origin.into(),
            images,
        }
    }

    pub fn property_id(&self) -> &str {
        &self.property_id
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Append an image once the backend has accepted it. The stored URL is
    /// absolute even when a root-relative path was entered.
    pub fn add(&mut self, url: &str) -> Result<&ImageRecord, FormError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(FormError::MissingImageUrl);
        }
        let image_id = self.images.iter().map(|i| i.image_id).max().unwrap_or(0) + 1;
        self.images.push(ImageRecord {
            image_id,
            image_url: to_absolute_url(url, &self.origin),
            property_id: self.property_id.clone(),
        });
        Ok(&self.images[self.images.len() - 1])
    }

    /// Drop an image by id, returning it if it was present
    pub fn remove(&mut self, image_id: i64) -> Option<ImageRecord> {
        let index = self.position(image_id)?;
        Some(self.images.remove(index))
    }

    /// Drag-and-drop reorder: the dragged image takes the slot of the one it
    /// was dropped on and the rest shift. Returns false for unknown or equal ids.
    pub fn move_image(&mut self, dragged: i64, target: i64) -> bool {
        if dragged == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(dragged), self.position(target)) else {
            return false;
        };
        let image = self.images.remove(from);
        self.images.insert(to, image);
        true
    }

    fn position(&self, image_id: i64) -> Option<usize> {
        self.images.iter().position(|i| i.image_id == image_id)
    }
}
