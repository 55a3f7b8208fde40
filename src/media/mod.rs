// SPDX-License-Identifier: MPL-2.0
//! Image loading: reads a user-selected file into memory and probes its
//! natural dimensions.
//!
//! The encoded bytes are kept as-is and handed to the renderer through an
//! [`image::Handle`]; the same `ImageData` feeds both the static preview and
//! the pannable view. Only the header is parsed here, full decoding is left
//! to the renderer.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::ImageReader;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// File extensions offered by the picker. The filter is a hint only: any
/// file the `image` crate can identify from its content is accepted.
pub const PICKER_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico",
];

/// Intrinsic pixel dimensions of an image, independent of display scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NaturalSize {
    pub width: u32,
    pub height: u32,
}

impl NaturalSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The currently loaded image.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub natural: NaturalSize,
    /// File name of the source, when known.
    pub name: Option<String>,
    /// Size of the encoded bytes held in memory.
    pub byte_len: usize,
}

impl ImageData {
    /// Assembles an `ImageData` from already prepared parts.
    #[must_use]
    pub fn from_parts(
        handle: image::Handle,
        natural: NaturalSize,
        name: Option<String>,
        byte_len: usize,
    ) -> Self {
        Self {
            handle,
            natural,
            name,
            byte_len,
        }
    }
}

/// Probes the format of `bytes` from their content and reads the natural
/// dimensions without decoding the pixel data.
///
/// # Errors
/// Returns [`Error::Decode`] when the content is not a recognizable image.
pub fn decode(bytes: Vec<u8>, name: Option<String>) -> Result<ImageData> {
    let (width, height) = ImageReader::new(Cursor::new(bytes.as_slice()))
        .with_guessed_format()?
        .into_dimensions()?;

    let byte_len = bytes.len();
    Ok(ImageData {
        handle: image::Handle::from_bytes(bytes),
        natural: NaturalSize::new(width, height),
        name,
        byte_len,
    })
}

/// Reads the file at `path` and decodes it with [`decode`].
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read, [`Error::Decode`] if it
/// is not an image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    decode(bytes, file_name(path))
}

/// Runs [`load_image`] on the blocking thread pool.
pub async fn load_image_async(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_image(&path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

/// Opens the native picker and returns the chosen path.
///
/// Returns `None` when the user cancels the dialog.
pub async fn pick_image_path(title: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter("Images", PICKER_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(String::from)
}

/// Identifies one load request. Tickets grow monotonically so only the most
/// recent request may replace the current image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// What happened when a load completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The image became the current one.
    Replaced,
    /// A newer request was started meanwhile; the result was dropped.
    Stale,
    /// Reading or decoding failed; the current image is unchanged.
    Failed(Error),
}

/// Holds the current image and arbitrates between overlapping loads.
#[derive(Debug, Default)]
pub struct ImageSlot {
    current: Option<ImageData>,
    latest: u64,
}

impl ImageSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new load request and returns its ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    /// Applies the result of a load. A successful result from the latest
    /// request overwrites the current image; anything else leaves it alone.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<ImageData>) -> LoadOutcome {
        if ticket.0 != self.latest {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(image) => {
                self.current = Some(image);
                LoadOutcome::Replaced
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&ImageData> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }
}
