//! Books, pages and their segmentations

use crate::result::SegmentationResult;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One page of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    id: u32,
    /// Image file name relative to the book's resource directory
    image: String,
}

impl Page {
    pub fn new(id: u32, image: impl Into<String>) -> Self {
        Self {
            id,
            image: image.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Image file name without extension
    pub fn image_stem(&self) -> &str {
        Path::new(&self.image)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.image)
    }
}

/// A book: an ordered list of page images
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: u32,
    name: String,
    pages: Vec<Page>,
}

impl Book {
    pub fn new(id: u32, name: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            id,
            name: name.into(),
            pages,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Look up a page by id
    pub fn page(&self, id: u32) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }
}

/// Outcome of segmenting one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SegmentationStatus {
    /// Page was segmented (possibly with zero regions)
    Success,
    /// Page image is absent; nothing was segmented
    MissingFile,
}

/// Segmentation of one page as reported to callers
#[derive(Debug, Clone, PartialEq)]
pub struct PageSegmentation {
    pub page_id: u32,
    pub status: SegmentationStatus,
    pub result: SegmentationResult,
}

impl PageSegmentation {
    pub fn success(page_id: u32, result: SegmentationResult) -> Self {
        Self {
            page_id,
            status: SegmentationStatus::Success,
            result,
        }
    }

    /// Empty segmentation of a page whose image is missing
    pub fn missing_file(page_id: u32) -> Self {
        Self {
            page_id,
            status: SegmentationStatus::MissingFile,
            result: SegmentationResult::new(),
        }
    }

    pub fn is_missing_file(&self) -> bool {
        self.status == SegmentationStatus::MissingFile
    }
}

/// Segmentations of the pages of one book, keyed by page id
#[derive(Debug, Clone, PartialEq)]
pub struct BookSegmentation {
    book_id: u32,
    pages: IndexMap<u32, PageSegmentation>,
}

impl BookSegmentation {
    pub fn new(book_id: u32) -> Self {
        Self {
            book_id,
            pages: IndexMap::new(),
        }
    }

    pub fn book_id(&self) -> u32 {
        self.book_id
    }

    /// Store a page segmentation, replacing an earlier one for that page.
    pub fn set_page(&mut self, segmentation: PageSegmentation) {
        self.pages.insert(segmentation.page_id, segmentation);
    }

    pub fn page(&self, page_id: u32) -> Option<&PageSegmentation> {
        self.pages.get(&page_id)
    }

    pub fn pages(&self) -> impl Iterator<Item = &PageSegmentation> {
        self.pages.values()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
