//! Reading user-selected files.

use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

use crate::core::error::{GalleryError, ValidationError};
use crate::core::upload::FileSource;

/// A file picked through an `<input type="file">` element.
#[derive(Clone, Debug)]
pub struct BrowserFile(File);

impl BrowserFile {
    /// Collect every entry of a file list, in selection order.
    pub fn from_list(list: &FileList) -> Vec<Self> {
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(Self)
            .collect()
    }
}

impl FileSource for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    async fn read(&self) -> Result<Vec<u8>, GalleryError> {
        let buffer = JsFuture::from(self.0.array_buffer()).await.map_err(|e| {
            GalleryError::from(ValidationError::FileRead {
                file_name: self.0.name(),
                reason: e.as_string().unwrap_or_else(|| "unknown error".to_string()),
            })
        })?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}
