//! Page segmentation sessions
//!
//! A session belongs to one user working on one book. It runs detection
//! on demand, caches the last segmentation of every page, and prepares
//! export variants by applying overrides to a clone of the cached page.
//!
//! # Export pipeline
//!
//! 1. [`segment`](PageSegmentationSession::segment) caches a
//!    [`DetectedPage`] per page id.
//! 2. [`prepare_export`](PageSegmentationSession::prepare_export) clones
//!    the cached page, drops ignored regions, retypes changed ones and
//!    keeps the clone as the export variant.
//! 3. [`export_artifact`](PageSegmentationSession::export_artifact) hands
//!    the variant to the renderer.
//!
//! The cached page is never modified by steps 2 and 3.

use crate::book::{Book, BookSegmentation, Page, PageSegmentation};
use crate::collab::{Detector, Renderer};
use crate::constraints::enforce_template_constraints;
use crate::error::{SegError, SegResult};
use crate::page::{DetectedPage, PageImage};
use crate::request::ExportRequest;
use crate::result::SegmentationResult;
use indexmap::IndexMap;
use pagezones_io::{page_image_exists, read_image_header};
use pagezones_template::SegmentationParameters;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Content type of exported layout documents
pub const EXPORT_CONTENT_TYPE: &str = "application/xml";

/// Options for a segmentation session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Maximum number of cached pages; `None` keeps every page until the
    /// session is cleared (default: None)
    pub max_cached_pages: Option<usize>,

    /// Re-apply template constraints to detector output (default: false)
    pub enforce_template_constraints: bool,
}

impl SessionOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the page cache; the least recently segmented page is evicted
    pub fn with_max_cached_pages(mut self, max: usize) -> Self {
        self.max_cached_pages = Some(max);
        self
    }

    /// Set whether template constraints are enforced on detector output
    pub fn with_enforce_template_constraints(mut self, enforce: bool) -> Self {
        self.enforce_template_constraints = enforce;
        self
    }

    /// Validate options
    pub fn validate(&self) -> SegResult<()> {
        if self.max_cached_pages == Some(0) {
            return Err(SegError::InvalidParameter(
                "max_cached_pages must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rendered export of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name: the page image name with an `.xml` extension
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Segmentation state of one user working on one book
pub struct PageSegmentationSession<D, R> {
    detector: D,
    renderer: R,
    options: SessionOptions,
    book: Option<Book>,
    resource_dir: PathBuf,
    /// Least recently segmented page first
    cache: IndexMap<u32, DetectedPage>,
    export_variant: Option<DetectedPage>,
}

impl<D: Detector, R: Renderer> PageSegmentationSession<D, R> {
    /// Create a session without a book.
    ///
    /// # Errors
    ///
    /// Fails if `options` are invalid.
    pub fn new(detector: D, renderer: R, options: SessionOptions) -> SegResult<Self> {
        options.validate()?;
        Ok(Self {
            detector,
            renderer,
            options,
            book: None,
            resource_dir: PathBuf::new(),
            cache: IndexMap::new(),
            export_variant: None,
        })
    }

    /// Load a book whose page images live under `resource_dir`.
    ///
    /// Drops every cached page and any prepared export.
    pub fn init(&mut self, book: Book, resource_dir: impl Into<PathBuf>) {
        self.resource_dir = resource_dir.into();
        self.set_book(book);
    }

    /// Replace the book, keeping the resource directory.
    pub fn set_book(&mut self, book: Book) {
        debug!(book = book.id(), pages = book.pages().len(), "loading book");
        self.book = Some(book);
        self.cache.clear();
        self.export_variant = None;
    }

    /// Forget the book, the cache and any prepared export.
    pub fn clear(&mut self) {
        self.book = None;
        self.resource_dir = PathBuf::new();
        self.cache.clear();
        self.export_variant = None;
    }

    /// Whether a book is loaded
    pub fn is_init(&self) -> bool {
        self.book.is_some()
    }

    pub fn book(&self) -> Option<&Book> {
        self.book.as_ref()
    }

    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Parameters with the stock template set
    pub fn default_parameters(&self) -> SegmentationParameters {
        SegmentationParameters::default()
    }

    /// Segment one page.
    ///
    /// A page whose image file is absent yields an empty segmentation
    /// tagged [`MissingFile`](crate::SegmentationStatus::MissingFile) and
    /// leaves the cache alone. Otherwise the page is detected and cached,
    /// replacing any earlier entry for it.
    ///
    /// A page segmented before its image went missing keeps its cached
    /// entry, so [`prepare_export`](Self::prepare_export) still works on
    /// the earlier regions. Use [`clear`](Self::clear) or
    /// [`init`](Self::init) to drop it.
    ///
    /// # Errors
    ///
    /// Fails if the parameters are invalid, the image header cannot be
    /// read, the detector fails or returns duplicate ids.
    pub fn segment(
        &mut self,
        params: &SegmentationParameters,
        page: &Page,
    ) -> SegResult<PageSegmentation> {
        let path = self.resource_dir.join(page.image());
        if !page_image_exists(&path) {
            warn!(
                page = page.id(),
                path = %path.display(),
                "page image not found, segmentation result will be empty"
            );
            return Ok(PageSegmentation::missing_file(page.id()));
        }

        params.validate()?;
        let header = read_image_header(&path)?;
        let image = PageImage::from_header(path, header)?;
        let size = image.size();

        let mut snapshot = params.clone();
        snapshot.bind_page_size(size);

        let mut regions = self.detector.detect(&snapshot, &image)?;
        let detected = regions.len();
        if self.options.enforce_template_constraints {
            regions = enforce_template_constraints(&snapshot.templates, regions, size);
        }
        let result = SegmentationResult::from_regions(regions)?;

        debug!(
            page = page.id(),
            width = size.width,
            height = size.height,
            detected,
            kept = result.len(),
            "segmented page"
        );

        let cached = DetectedPage::new(
            page.id(),
            Arc::new(image),
            Arc::new(snapshot),
            result.clone(),
        );
        self.cache.shift_remove(&page.id());
        self.cache.insert(page.id(), cached);
        self.evict_overflow();

        Ok(PageSegmentation::success(page.id(), result))
    }

    /// Segment a page of the loaded book by id.
    ///
    /// # Errors
    ///
    /// Returns [`SegError::NotInitialized`] without a book and
    /// [`SegError::UnknownPage`] for ids outside the book.
    pub fn segment_page(
        &mut self,
        params: &SegmentationParameters,
        page_id: u32,
    ) -> SegResult<PageSegmentation> {
        let page = self.book_page(page_id)?;
        self.segment(params, &page)
    }

    /// Segment several pages of the loaded book, in the given order.
    ///
    /// Stops at the first failing page.
    pub fn segment_pages(
        &mut self,
        params: &SegmentationParameters,
        page_ids: &[u32],
    ) -> SegResult<BookSegmentation> {
        let book_id = self.book.as_ref().ok_or(SegError::NotInitialized)?.id();
        let mut segmentation = BookSegmentation::new(book_id);
        for &page_id in page_ids {
            segmentation.set_page(self.segment_page(params, page_id)?);
        }
        Ok(segmentation)
    }

    /// Segment every page of the loaded book.
    pub fn segment_all(&mut self, params: &SegmentationParameters) -> SegResult<BookSegmentation> {
        let page_ids: Vec<u32> = self
            .book
            .as_ref()
            .ok_or(SegError::NotInitialized)?
            .pages()
            .iter()
            .map(Page::id)
            .collect();
        self.segment_pages(params, &page_ids)
    }

    fn book_page(&self, page_id: u32) -> SegResult<Page> {
        self.book
            .as_ref()
            .ok_or(SegError::NotInitialized)?
            .page(page_id)
            .cloned()
            .ok_or(SegError::UnknownPage(page_id))
    }

    fn evict_overflow(&mut self) {
        let Some(max) = self.options.max_cached_pages else {
            return;
        };
        while self.cache.len() > max {
            if let Some((page_id, _)) = self.cache.shift_remove_index(0) {
                debug!(page = page_id, "evicted cached page");
            }
        }
    }

    /// Cached segmentation of a page
    pub fn cached_page(&self, page_id: u32) -> Option<&DetectedPage> {
        self.cache.get(&page_id)
    }

    /// Cached result of a page
    pub fn cached_result(&self, page_id: u32) -> Option<&SegmentationResult> {
        self.cache.get(&page_id).map(DetectedPage::result)
    }

    /// Ids of cached pages, least recently segmented first
    pub fn cached_page_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.cache.keys().copied()
    }

    /// Drop a page from the cache.
    pub fn evict(&mut self, page_id: u32) -> Option<DetectedPage> {
        self.cache.shift_remove(&page_id)
    }

    /// Prepare the export variant of a cached page.
    ///
    /// Ignored ids that are not in the result are skipped. The variant
    /// replaces the previous one only if every override applies.
    ///
    /// # Errors
    ///
    /// Returns [`SegError::NotSegmented`] if the page is not cached and
    /// [`SegError::UnknownSegment`] if a retyped id is not in the result.
    pub fn prepare_export(&mut self, request: &ExportRequest) -> SegResult<&DetectedPage> {
        let mut variant = self
            .cache
            .get(&request.page)
            .ok_or(SegError::NotSegmented(request.page))?
            .clone();

        let result = variant.result_mut();
        for id in &request.segments_to_ignore {
            if result.remove_region_by_id(id).is_none() {
                debug!(page = request.page, id = %id, "ignored region not present");
            }
        }
        for (id, region_type) in &request.changed_types {
            result.retype_region(id, *region_type)?;
        }

        Ok(self.export_variant.insert(variant))
    }

    /// The prepared export variant, if any
    pub fn export_variant(&self) -> Option<&DetectedPage> {
        self.export_variant.as_ref()
    }

    /// Render the prepared export variant.
    ///
    /// # Errors
    ///
    /// Returns [`SegError::NoExportPrepared`] before
    /// [`prepare_export`](Self::prepare_export), and
    /// [`SegError::RenderFailure`] if the renderer fails.
    pub fn export_artifact(&self) -> SegResult<ExportArtifact> {
        let variant = self
            .export_variant
            .as_ref()
            .ok_or(SegError::NoExportPrepared)?;

        let bytes = self.renderer.render(variant).map_err(|e| {
            error!(page = variant.page_id(), error = %e, "rendering export failed");
            SegError::RenderFailure(e)
        })?;

        Ok(ExportArtifact {
            file_name: format!("{}.xml", variant.image().stem()),
            content_type: EXPORT_CONTENT_TYPE,
            bytes,
        })
    }
}
