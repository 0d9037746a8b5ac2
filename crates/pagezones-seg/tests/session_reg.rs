//! Page segmentation session regression test
//!
//! Segments page images written to a scratch directory with a scripted
//! detector and checks the session's cache and export pipeline:
//! missing images, export variants built from overrides, cache isolation,
//! failure handling, bounded caches and rendered artifacts.

use pagezones_core::{Rect, RegionType};
use pagezones_seg::{
    Book, DetectedRegion, ExportRequest, Page, PageSegmentationSession, SegError,
    SegmentationResult, SegmentationStatus, SessionOptions,
};
use pagezones_test::RegParams;
use pagezones_test::fixtures::{
    RecordingRenderer, ScriptedDetector, scratch_dir, write_bmp_page, write_pnm_page,
};
use std::sync::Arc;

fn rect_region(id: &str, region_type: RegionType, x: i32, y: i32, w: i32, h: i32) -> DetectedRegion {
    DetectedRegion::from_rect(id, region_type, Rect::new_unchecked(x, y, w, h))
}

fn page_one_regions() -> Vec<DetectedRegion> {
    vec![
        rect_region("A", RegionType::Paragraph, 50, 100, 500, 300),
        rect_region("B", RegionType::Heading, 50, 20, 500, 60),
        rect_region("C", RegionType::Marginalia, 5, 100, 40, 600),
    ]
}

fn book() -> Book {
    Book::new(
        7,
        "herbarium",
        vec![
            Page::new(1, "0001.pgm"),
            Page::new(2, "0002.bmp"),
            Page::new(3, "0003.png"),
        ],
    )
}

fn ids(result: &SegmentationResult) -> String {
    result.ids().collect::<Vec<_>>().join(",")
}

fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

#[test]
fn session_reg() {
    let mut rp = RegParams::new("session");
    let dir = scratch_dir().expect("scratch dir");
    write_pnm_page(dir.path(), "0001.pgm", 600, 800).expect("page 1");
    write_bmp_page(dir.path(), "0002.bmp", 1200, 900).expect("page 2");
    // page 3 is never written

    let detector = ScriptedDetector::new()
        .with_regions("0001.pgm", page_one_regions())
        .with_regions(
            "0002.bmp",
            vec![
                rect_region("x", RegionType::Paragraph, 0, 0, 100, 100),
                rect_region("x", RegionType::Heading, 0, 200, 100, 100),
            ],
        );
    let renderer = RecordingRenderer::new();
    let mut session =
        PageSegmentationSession::new(&detector, &renderer, SessionOptions::default())
            .expect("session");
    session.init(book(), dir.path());
    let params = session.default_parameters();

    // --- Test 1: Missing page image ---
    let seg = session.segment_page(&params, 3).expect("missing file is not an error");
    rp.compare_values(1.0, flag(seg.status == SegmentationStatus::MissingFile), 0.0);
    rp.compare_values(0.0, seg.result.len() as f64, 0.0);
    rp.compare_values(1.0, flag(session.cached_page(3).is_none()), 0.0);
    rp.compare_values(0.0, detector.calls().len() as f64, 0.0);

    // --- Test 2: Segmentation caches the page, templates bound to it ---
    let seg = session.segment_page(&params, 1).expect("segment page 1");
    rp.compare_values(1.0, flag(seg.status == SegmentationStatus::Success), 0.0);
    rp.compare_strings(b"A,B,C", ids(&seg.result).as_bytes());
    let call = detector.calls()[0].clone();
    rp.compare_values(600.0, call.size.width as f64, 0.0);
    rp.compare_values(800.0, call.size.height as f64, 0.0);
    rp.compare_values(1.0, flag(call.templates_bound), 0.0);
    let cached = session.cached_page(1).expect("cached page 1");
    let marginalia_zone = cached
        .parameters()
        .templates
        .get(RegionType::Marginalia)
        .map(|t| t.positions()[1].cached_rect());
    rp.compare_values(
        1.0,
        flag(marginalia_zone == Some(Some(Rect::new_unchecked(450, 0, 150, 800)))),
        0.0,
    );

    // --- Test 3: Export under empty overrides equals the cache ---
    let variant = session
        .prepare_export(&ExportRequest::new(1))
        .expect("empty export");
    let same = page_one_regions()
        .iter()
        .all(|r| variant.result().get(r.id()) == Some(r));
    rp.compare_values(1.0, flag(same), 0.0);
    rp.compare_strings(b"A,B,C", ids(variant.result()).as_bytes());
    let cached = session.cached_result(1).expect("cache");
    rp.compare_strings(b"A,B,C", ids(cached).as_bytes());

    // --- Test 4: Retype in the export only ---
    let request = ExportRequest::new(1).with_changed_type("A", RegionType::Heading);
    let variant = session.prepare_export(&request).expect("retype export");
    let a = variant.result().get("A").map(|r| r.region_type());
    rp.compare_values(1.0, flag(a == Some(RegionType::Heading)), 0.0);
    rp.compare_values(2.0, variant.result().count_of(RegionType::Heading) as f64, 0.0);
    // the retyped region moves to the end of the export order
    rp.compare_strings(b"B,C,A", ids(variant.result()).as_bytes());
    let cached = session.cached_result(1).expect("cache");
    rp.compare_strings(b"A,B,C", ids(cached).as_bytes());
    rp.compare_values(
        1.0,
        flag(cached.get("A").map(|r| r.region_type()) == Some(RegionType::Paragraph)),
        0.0,
    );
    // untouched regions are shared, the retyped one is not
    let variant = session.export_variant().expect("variant");
    let cached = session.cached_result(1).expect("cache");
    let shared_b = Arc::ptr_eq(
        variant.result().get_shared("B").expect("B"),
        cached.get_shared("B").expect("B"),
    );
    let shared_a = Arc::ptr_eq(
        variant.result().get_shared("A").expect("A"),
        cached.get_shared("A").expect("A"),
    );
    rp.compare_values(1.0, flag(shared_b), 0.0);
    rp.compare_values(0.0, flag(shared_a), 0.0);
    rp.compare_values(
        1.0,
        flag(Arc::ptr_eq(
            variant.image_handle(),
            session.cached_page(1).expect("page").image_handle()
        )),
        0.0,
    );

    // --- Test 5: Ignoring unknown ids is a no-op ---
    let request = ExportRequest::new(1).with_ignored("nonexistent");
    let variant = session.prepare_export(&request).expect("ignore export");
    rp.compare_strings(b"A,B,C", ids(variant.result()).as_bytes());
    let request = ExportRequest::new(1).with_ignored("C").with_ignored("C");
    let variant = session.prepare_export(&request).expect("ignore C");
    rp.compare_strings(b"A,B", ids(variant.result()).as_bytes());
    rp.compare_values(3.0, session.cached_result(1).map_or(0, |r| r.len()) as f64, 0.0);

    // --- Test 6: Retyping unknown ids fails and changes nothing ---
    let request = ExportRequest::new(1)
        .with_ignored("A")
        .with_changed_type("ghost", RegionType::Footer);
    let err = session.prepare_export(&request).expect_err("unknown segment");
    rp.compare_values(
        1.0,
        flag(matches!(&err, SegError::UnknownSegment(id) if id == "ghost")),
        0.0,
    );
    let previous = session.export_variant().expect("previous variant kept");
    rp.compare_strings(b"A,B", ids(previous.result()).as_bytes());
    rp.compare_strings(
        b"A,B,C",
        ids(session.cached_result(1).expect("cache")).as_bytes(),
    );

    // --- Test 7: Export of a page never segmented ---
    let err = session
        .prepare_export(&ExportRequest::new(2))
        .expect_err("not segmented");
    rp.compare_values(1.0, flag(matches!(err, SegError::NotSegmented(2))), 0.0);

    // --- Test 8: Detector breaking the id contract ---
    let err = session.segment_page(&params, 2).expect_err("duplicate ids");
    rp.compare_values(1.0, flag(matches!(err, SegError::DuplicateId(_))), 0.0);
    rp.compare_values(1.0, flag(session.cached_page(2).is_none()), 0.0);

    // --- Test 9: Re-segmenting replaces the cache entry ---
    let before = Arc::clone(session.cached_page(1).expect("page 1").image_handle());
    session.segment_page(&params, 1).expect("re-segment");
    let after = session.cached_page(1).expect("page 1");
    rp.compare_values(0.0, flag(Arc::ptr_eq(&before, after.image_handle())), 0.0);
    rp.compare_strings(b"A,B,C", ids(after.result()).as_bytes());

    // --- Test 10: Loading a book resets the session ---
    session.set_book(book());
    rp.compare_values(0.0, session.cached_page_ids().count() as f64, 0.0);
    rp.compare_values(1.0, flag(session.export_variant().is_none()), 0.0);
    let err = session.export_artifact().expect_err("no export");
    rp.compare_values(1.0, flag(matches!(err, SegError::NoExportPrepared)), 0.0);
    rp.compare_values(0.0, renderer.rendered().len() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn session_batch_reg() {
    let mut rp = RegParams::new("session_batch");
    let dir = scratch_dir().expect("scratch dir");
    write_pnm_page(dir.path(), "0001.pgm", 600, 800).expect("page 1");
    write_bmp_page(dir.path(), "0002.bmp", 1200, 900).expect("page 2");

    let detector = ScriptedDetector::new()
        .with_regions("0001.pgm", page_one_regions())
        .with_failure("0002.bmp");
    let mut session = PageSegmentationSession::new(
        &detector,
        RecordingRenderer::new(),
        SessionOptions::new().with_enforce_template_constraints(true),
    )
    .expect("session");
    session.init(book(), dir.path());
    let params = session.default_parameters();

    // --- Test 1: Batch over pages with one missing image ---
    let segmentation = session
        .segment_pages(&params, &[3, 1])
        .expect("batch");
    rp.compare_values(7.0, segmentation.book_id() as f64, 0.0);
    rp.compare_values(2.0, segmentation.len() as f64, 0.0);
    let statuses: Vec<SegmentationStatus> = segmentation.pages().map(|p| p.status).collect();
    rp.compare_values(
        1.0,
        flag(statuses == vec![SegmentationStatus::MissingFile, SegmentationStatus::Success]),
        0.0,
    );

    // --- Test 2: Template constraints applied to detector output ---
    // stock set: heading has no template and is kept; A and C fit their
    // zones and exceed the minimum size
    let page_one = segmentation.page(1).expect("page 1");
    rp.compare_strings(b"A,B,C", ids(&page_one.result).as_bytes());

    // --- Test 3: Detection failure stops the batch ---
    let err = session.segment_all(&params).expect_err("detector failure");
    rp.compare_values(1.0, flag(matches!(err, SegError::DetectionFailed(_))), 0.0);
    rp.compare_values(0.0, flag(session.cached_page(2).is_some()), 0.0);
    rp.compare_values(1.0, flag(session.cached_page(1).is_some()), 0.0);

    // --- Test 4: Bounded cache ---
    let mut bounded = PageSegmentationSession::new(
        ScriptedDetector::new(),
        RecordingRenderer::new(),
        SessionOptions::new().with_max_cached_pages(1),
    )
    .expect("bounded session");
    bounded.init(book(), dir.path());
    bounded.segment_page(&params, 1).expect("page 1");
    bounded.segment_page(&params, 2).expect("page 2");
    let cached: Vec<u32> = bounded.cached_page_ids().collect();
    rp.compare_values(1.0, cached.len() as f64, 0.0);
    rp.compare_values(2.0, cached[0] as f64, 0.0);
    rp.compare_values(0.0, flag(bounded.evict(1).is_some()), 0.0);
    rp.compare_values(1.0, flag(bounded.evict(2).is_some()), 0.0);

    assert!(rp.cleanup());
}

#[test]
fn session_export_reg() {
    let mut rp = RegParams::new("export");
    let dir = scratch_dir().expect("scratch dir");
    write_pnm_page(dir.path(), "0001.pgm", 600, 800).expect("page 1");

    let detector = ScriptedDetector::new().with_regions("0001.pgm", page_one_regions());
    let renderer = RecordingRenderer::new();
    let mut session = PageSegmentationSession::new(&detector, &renderer, SessionOptions::default())
        .expect("session");
    session.init(book(), dir.path());

    let mut params = session.default_parameters();
    if let Some(t) = params.templates.get_mut(RegionType::Marginalia) {
        t.set_export_identifier("marginalia-note");
    }
    session.segment_page(&params, 1).expect("segment");

    // --- Test 1: Rendered artifact of a retyped export ---
    let request: ExportRequest =
        serde_json::from_str(r#"{"page": 1, "changedTypes": {"A": "heading"}}"#)
            .expect("request json");
    session.prepare_export(&request).expect("prepare");
    let artifact = session.export_artifact().expect("artifact");
    rp.write_data_and_check(&artifact.bytes, "txt")
        .expect("artifact golden");
    rp.compare_strings(b"0001.xml", artifact.file_name.as_bytes());
    rp.compare_strings(b"application/xml", artifact.content_type.as_bytes());
    rp.compare_values(1.0, renderer.rendered().len() as f64, 0.0);

    // --- Test 2: Render failure yields no artifact ---
    let mut failing = PageSegmentationSession::new(
        &detector,
        RecordingRenderer::failing(),
        SessionOptions::default(),
    )
    .expect("failing session");
    failing.init(book(), dir.path());
    failing.segment_page(&params, 1).expect("segment");
    failing.prepare_export(&ExportRequest::new(1)).expect("prepare");
    let err = failing.export_artifact().expect_err("render failure");
    rp.compare_values(1.0, flag(matches!(err, SegError::RenderFailure(_))), 0.0);
    // the variant survives for a retry
    rp.compare_values(1.0, flag(failing.export_variant().is_some()), 0.0);

    assert!(rp.cleanup());
}
