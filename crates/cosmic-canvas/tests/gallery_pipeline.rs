mod common;

use common::{FakeArchive, DOWNLOAD};
use cosmic_core::{CanvasError, ObservationId, Telescope};
use cosmic_mast::Gallery;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::time::Duration;

fn gallery(archive: FakeArchive) -> Gallery<FakeArchive> {
    Gallery::with_ttl(archive, DOWNLOAD, Duration::from_secs(3600))
}

fn dated_rows() -> FakeArchive {
    FakeArchive::with_rows(vec![
        json!({"obs_id": "jw-jan", "obsid": 1, "t_obs_release": "2024-01-01", "target_name": "NGC-628"}),
        json!({"obs_id": "jw-mar", "obsid": 3, "t_obs_release": "2024-03-01", "target_name": "M16"}),
        json!({"obs_id": "jw-feb", "obsid": 2, "t_obs_release": "2024-02-01", "target_name": "NGC-3324"}),
    ])
}

#[test]
fn test_newest_two_of_three() {
    let gallery = gallery(dated_rows());
    let observations = gallery.observations(Telescope::Jwst, 2, None).unwrap();

    let ids: Vec<_> = observations.iter().map(|o| o.obs_id.as_str()).collect();
    assert_eq!(ids, vec!["jw-mar", "jw-feb"]);

    let criteria = gallery.client().seen_criteria.lock().unwrap().clone();
    assert_eq!(criteria[0].collection, "JWST");
    assert_eq!(criteria[0].dataproduct_type, "image");
    assert_eq!(criteria[0].target_name, None);
}

#[test]
fn test_only_canonical_fields_leak_through() {
    let archive = FakeArchive::with_rows(vec![json!({
        "obs_id": "jw-x",
        "obsid": 5,
        "target_name": "M16",
        "s_ra": 274.7,
        "calib_level": 3,
        "em_min": 1.7e-6
    })]);
    let observations = gallery(archive).observations(Telescope::Jwst, 1, None).unwrap();

    let value = serde_json::to_value(&observations[0]).unwrap();
    let fields = value.as_object().unwrap();
    assert_eq!(fields.len(), 10);
    assert!(!fields.contains_key("s_ra"));
    assert!(!fields.contains_key("calib_level"));
}

#[test]
fn test_length_never_exceeds_limit() {
    let gallery = gallery(dated_rows());
    for limit in 1..=5 {
        let observations = gallery.observations(Telescope::Hst, limit, None).unwrap();
        assert!(observations.len() <= limit);
        assert_eq!(observations.len(), limit.min(3));
        for pair in observations.windows(2) {
            assert!(pair[0].t_obs_release >= pair[1].t_obs_release);
        }
    }
}

#[test]
fn test_empty_result_is_not_an_error() {
    let gallery = gallery(FakeArchive::default());
    let observations = gallery
        .observations(Telescope::Jwst, 10, Some("Nonexistent Object"))
        .unwrap();
    assert!(observations.is_empty());

    let criteria = gallery.client().seen_criteria.lock().unwrap().clone();
    assert_eq!(criteria[0].target_name.as_deref(), Some("*Nonexistent Object*"));
}

#[test]
fn test_query_failure_names_telescope_and_is_not_cached() {
    let archive = dated_rows();
    archive.fail_queries.store(true, Ordering::SeqCst);
    let gallery = gallery(archive);

    let err = gallery.observations(Telescope::Hst, 5, None).unwrap_err();
    assert!(matches!(err, CanvasError::Retrieval { .. }));
    let message = err.to_string();
    assert!(message.contains("HST"), "{}", message);
    assert!(message.contains("service unavailable"), "{}", message);

    gallery.client().fail_queries.store(false, Ordering::SeqCst);
    assert_eq!(gallery.observations(Telescope::Hst, 5, None).unwrap().len(), 3);
    assert_eq!(gallery.client().query_calls(), 2);
}

#[test]
fn test_identical_calls_hit_cache_until_expiry() {
    let gallery = Gallery::with_ttl(dated_rows(), DOWNLOAD, Duration::from_millis(50));

    gallery.observations(Telescope::Jwst, 2, Some("M16")).unwrap();
    gallery.observations(Telescope::Jwst, 2, Some("M16")).unwrap();
    assert_eq!(gallery.client().query_calls(), 1);

    // Different arguments form a different key
    gallery.observations(Telescope::Jwst, 3, Some("M16")).unwrap();
    assert_eq!(gallery.client().query_calls(), 2);

    std::thread::sleep(Duration::from_millis(80));
    gallery.observations(Telescope::Jwst, 2, Some("M16")).unwrap();
    assert_eq!(gallery.client().query_calls(), 3);
}

#[test]
fn test_inline_preview_skips_product_listing() {
    let archive = FakeArchive::with_rows(vec![
        json!({"obs_id": "jw-a", "obsid": 11, "jpegURL": "mast:JWST/product/jw-a_i2d.jpg"}),
        json!({"obs_id": "hst-b", "obsid": 12, "jpegURL": "https://hla.stsci.edu/preview/b.jpg"}),
    ]);
    let gallery = gallery(archive);
    let items = gallery.items(Telescope::Jwst, 10, None).unwrap();

    assert_eq!(
        items[0].preview_url.as_deref(),
        Some("https://mast.stsci.edu/api/v0.1/Download/file?uri=mast:JWST/product/jw-a_i2d.jpg")
    );
    assert_eq!(
        items[1].preview_url.as_deref(),
        Some("https://hla.stsci.edu/preview/b.jpg")
    );
    assert_eq!(gallery.client().product_calls(), 0);
}

#[test]
fn test_slow_path_prefers_numeric_id_and_is_cached() {
    let archive = FakeArchive::with_rows(vec![json!({"obs_id": "jw-c", "obsid": 87602126})])
        .with_products(
            "87602126",
            vec![
                json!({"productType": "SCIENCE", "dataURI": "mast:JWST/product/jw-c_i2d.fits"}),
                json!({"productType": "PREVIEW", "dataURI": "mast:JWST/product/jw-c_i2d.jpg"}),
            ],
        );
    let gallery = gallery(archive);

    let obs = gallery.observations(Telescope::Jwst, 1, None).unwrap().remove(0);
    let first = gallery.preview_url(&obs);
    let second = gallery.preview_url(&obs);

    assert_eq!(
        first.as_deref(),
        Some("https://mast.stsci.edu/api/v0.1/Download/file?uri=mast:JWST/product/jw-c_i2d.jpg")
    );
    assert_eq!(first, second);
    assert_eq!(gallery.client().product_calls(), 1);
    assert_eq!(
        gallery.client().seen_ids.lock().unwrap()[0],
        ObservationId::Numeric(87602126)
    );
}

#[test]
fn test_product_failure_does_not_abort_gallery() {
    let archive = FakeArchive::with_rows(vec![
        json!({"obs_id": "jw-d", "target_name": "Cartwheel", "filters": "F200W", "t_obs_release": "2022-08-02T10:00:00"}),
        json!({"obs_id": "jw-e", "jpegURL": "mast:JWST/product/jw-e.jpg", "t_obs_release": "2022-08-01T10:00:00"}),
    ]);
    archive.fail_products.store(true, Ordering::SeqCst);
    let gallery = gallery(archive);

    let items = gallery.items(Telescope::Jwst, 10, None).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].preview_url, None);
    assert!(items[0].warning.as_deref().unwrap().contains("jw-d"));
    assert!(items[1].preview_url.is_some());
    assert_eq!(items[1].warning, None);

    assert_eq!(items[0].observation.display_target(), "Cartwheel");
    assert_eq!(items[0].metadata.get("Released"), Some("2022-08-02"));
    assert_eq!(items[0].metadata.get("Filters"), Some("F200W"));
    assert_eq!(items[0].metadata.get("Instrument"), None);

    let lookup = gallery.products(&ObservationId::Text("jw-d".to_string()));
    assert!(lookup.products.is_empty());
    assert!(lookup.warning.unwrap().contains("jw-d"));

    // Failed lookups are retried rather than memoized
    assert_eq!(gallery.client().product_calls(), 2);
}
