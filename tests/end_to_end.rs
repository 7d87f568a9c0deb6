use std::fs;
use std::path::Path;

use nzfocmec::app::pipeline::locate;
use nzfocmec::io::ModelAssets;
use nzfocmec::{ErrorKind, FocalMechanism, FocmecRequest, GeoPoint, SubductionZone, get_focmec};
use tempfile::TempDir;

const CONFIG: &str = r#"
[ntdomains]
file = "ntdomains.json"

[crust]
file = "crust_focmec.json"

[slab]
file = "slab_focmec.json"

[interface.hikurangi]
file = "hikurangi_interface.json"

[interface.puysegur]
file = "puysegur_interface.json"
"#;

const DOMAINS: &str = r#"{
    "D1": {"lon": [170.0, 175.0, 175.0, 170.0], "lat": [-45.0, -45.0, -40.0, -40.0]},
    "D2": {"lon": [175.0, 180.0, 180.0, 175.0], "lat": [-45.0, -45.0, -40.0, -40.0]}
}"#;

const CRUST: &str = r#"{
    "D1": {
        "case1": {
            ">15": {
                "strikeAn": [30, 210, 120],
                "dipAn": [60, 45, 80],
                "rakeAn": [90, -90, 180],
                "prob": [0.2, 0.5, 0.3]
            },
            ">45": {"strikeAn": [40], "dipAn": [70], "rakeAn": [170], "prob": [1.0]}
        },
        "case2": {
            ">15": {
                "strikeAn": [200, 20],
                "dipAn": [50, 40],
                "rakeAn": [90, 90],
                "prob": [0.6, 0.4]
            }
        }
    },
    "D2": {
        "case1": {">15": {"strikeAn": [45], "dipAn": [85], "rakeAn": [170], "prob": [1.0]}},
        "case2": {">15": {"strikeAn": [45], "dipAn": [85], "rakeAn": [170], "prob": [1.0]}}
    }
}"#;

const SLAB: &str = r#"{
    "hik": {
        "40": [[220, 60, -90, 0.3], [40, 30, -90, 0.7]],
        "60": [[210, 70, -80, 1.0]]
    },
    "puy": {
        "100": [[10, 50, 90, 0.55], [190, 40, 90, 0.45]]
    }
}"#;

// Constant predictors well outside the clamping windows.
const HIK_MODEL: &str = r#"[
    {"kind": "polynomial", "coefficients": [[300.0]]},
    {"kind": "polynomial", "coefficients": [[5.0]]},
    [[176.0, -42.0], [180.0, -42.0], [180.0, -37.0], [176.0, -37.0]]
]"#;

const PUY_MODEL: &str = r#"[
    {"kind": "grid", "lon_min": 165.0, "lat_min": -48.0, "dlon": 3.0, "dlat": 3.0,
     "nlon": 2, "nlat": 2, "values": [20.0, 30.0, 20.0, 30.0]},
    {"kind": "grid", "lon_min": 165.0, "lat_min": -48.0, "dlon": 3.0, "dlat": 3.0,
     "nlon": 2, "nlat": 2, "values": [60.0, 60.0, 60.0, 60.0]},
    [[165.0, -48.0], [168.0, -48.0], [168.0, -45.0], [165.0, -45.0]]
]"#;

fn model_folder() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    let files = [
        ("nzfocmec_v1.ini", CONFIG),
        ("ntdomains.json", DOMAINS),
        ("crust_focmec.json", CRUST),
        ("slab_focmec.json", SLAB),
        ("hikurangi_interface.json", HIK_MODEL),
        ("puysegur_interface.json", PUY_MODEL),
    ];
    for (name, body) in files {
        fs::write(dir.path().join(name), body).expect("write asset");
    }
    dir
}

fn request(dir: &Path, regime: &str, preferred_model: &str) -> FocmecRequest {
    FocmecRequest {
        regime: regime.to_string(),
        preferred_model: preferred_model.to_string(),
        model_folder: dir.to_path_buf(),
        ..FocmecRequest::default()
    }
}

fn fm(s: f64, d: f64, r: f64, p: f64) -> FocalMechanism {
    FocalMechanism::new(s, d, r, p)
}

#[test]
fn crust_mean_case1_returns_most_probable_short_tag_entry() {
    let dir = model_folder();
    let mut req = request(dir.path(), "crust", "mean_case1");
    req.lon = Some(172.0);
    req.lat = Some(-42.0);
    req.mw = Some(6.0);

    let out = get_focmec(&req).unwrap();
    assert_eq!(out, vec![fm(210.0, 45.0, -90.0, 1.0)]);
}

#[test]
fn crust_all_blends_and_large_events_use_long_tag() {
    let dir = model_folder();
    let mut req = request(dir.path(), "CRUST", "all");
    req.lon = Some(172.0);
    req.lat = Some(-42.0);
    req.mw = Some(6.0);

    let out = get_focmec(&req).unwrap();
    assert_eq!(out.len(), 5);
    assert!(out.iter().all(|m| m.probability <= 0.5));

    req.preferred_model = "case1".to_string();
    req.mw = Some(7.8);
    assert_eq!(get_focmec(&req).unwrap(), vec![fm(40.0, 70.0, 170.0, 1.0)]);
}

#[test]
fn crust_identical_cases_are_returned_unhalved() {
    let dir = model_folder();
    let mut req = request(dir.path(), "crust", "all");
    req.lon = Some(177.0);
    req.lat = Some(-43.0);
    req.mw = Some(5.0);

    assert_eq!(get_focmec(&req).unwrap(), vec![fm(45.0, 85.0, 170.0, 1.0)]);
}

#[test]
fn crust_outside_domains_fails() {
    let dir = model_folder();
    let mut req = request(dir.path(), "crust", "all");
    req.lon = Some(160.0);
    req.lat = Some(-30.0);
    req.mw = Some(6.0);

    let err = get_focmec(&req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DomainNotFound);
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn slab_depth_bins_and_gaps() {
    let dir = model_folder();
    let mut req = request(dir.path(), "slab", "all");
    req.lon = Some(178.0);
    req.lat = Some(-39.0);
    req.dep = Some(41.0);

    let out = get_focmec(&req).unwrap();
    assert_eq!(out, vec![fm(220.0, 60.0, -90.0, 0.3), fm(40.0, 30.0, -90.0, 0.7)]);

    req.dep = Some(30.0);
    assert_eq!(get_focmec(&req).unwrap_err().kind(), ErrorKind::DepthOutOfRange);

    // Valid bin with nothing tabulated.
    req.dep = Some(80.0);
    assert_eq!(get_focmec(&req).unwrap_err().kind(), ErrorKind::DepthOutOfRange);
}

#[test]
fn slab_mean_all_collapses_to_most_probable() {
    let dir = model_folder();
    let mut req = request(dir.path(), "slab", "mean_all");
    req.lon = Some(178.0);
    req.lat = Some(-39.0);
    req.dep = Some(43.0);

    assert_eq!(get_focmec(&req).unwrap(), vec![fm(40.0, 30.0, -90.0, 1.0)]);
}

#[test]
fn slab_with_known_zone_needs_no_location() {
    let dir = model_folder();
    let mut req = request(dir.path(), "slab", "case2");
    req.dep = Some(96.0);
    req.subduction_zone = Some("puy".to_string());

    let out = get_focmec(&req).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], fm(10.0, 50.0, 90.0, 0.55));
}

#[test]
fn interface_hik_is_clamped() {
    let dir = model_folder();
    let mut req = request(dir.path(), "interface", "all");
    req.lon = Some(178.0);
    req.lat = Some(-39.0);

    assert_eq!(get_focmec(&req).unwrap(), vec![fm(260.0, 10.0, 90.0, 1.0)]);
}

#[test]
fn interface_falls_through_to_puysegur_model() {
    let dir = model_folder();
    let mut req = request(dir.path(), "interface", "all");
    req.lon = Some(166.5);
    req.lat = Some(-46.0);

    // strike: 20 + 10 * 0.5 = 25; dip 60 clamps to 45.
    assert_eq!(get_focmec(&req).unwrap(), vec![fm(25.0, 45.0, 90.0, 1.0)]);
}

#[test]
fn interface_outside_both_zones_fails() {
    let dir = model_folder();
    let mut req = request(dir.path(), "interface", "all");
    req.lon = Some(150.0);
    req.lat = Some(-30.0);

    assert_eq!(
        get_focmec(&req).unwrap_err().kind(),
        ErrorKind::SubductionZoneNotFound
    );
}

#[test]
fn interface_with_supplied_zone_skips_containment() {
    let dir = model_folder();
    let mut req = request(dir.path(), "interface", "all");
    // Inside the Hikurangi boundary and off the Puysegur grid, which clamps
    // to its north-east node: strike 30, dip 60 -> 45.
    req.lon = Some(178.0);
    req.lat = Some(-39.0);
    req.subduction_zone = Some("puy".to_string());

    assert_eq!(get_focmec(&req).unwrap(), vec![fm(30.0, 45.0, 90.0, 1.0)]);
}

#[test]
fn slab_outside_both_zones_fails() {
    let dir = model_folder();
    let mut req = request(dir.path(), "slab", "all");
    req.lon = Some(150.0);
    req.lat = Some(-30.0);
    req.dep = Some(41.0);

    assert_eq!(
        get_focmec(&req).unwrap_err().kind(),
        ErrorKind::SubductionZoneNotFound
    );
}

#[test]
fn missing_config_is_io_error() {
    let dir = model_folder();
    let mut req = request(dir.path(), "interface", "all");
    req.lon = Some(178.0);
    req.lat = Some(-39.0);
    req.config_file = "missing.ini".into();

    let err = get_focmec(&req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("missing.ini"));
}

#[test]
fn malformed_crust_table_fails_at_load() {
    let dir = model_folder();
    fs::write(
        dir.path().join("crust_focmec.json"),
        r#"{"D1": {"case1": {">15": {
            "strikeAn": [1, 2], "dipAn": [1], "rakeAn": [1, 2], "prob": [0.5, 0.5]
        }}}}"#,
    )
    .unwrap();
    let mut req = request(dir.path(), "crust", "all");
    req.lon = Some(172.0);
    req.lat = Some(-42.0);
    req.mw = Some(6.0);

    assert_eq!(get_focmec(&req).unwrap_err().kind(), ErrorKind::Asset);
}

#[test]
fn locate_reports_domain_and_zone() {
    let dir = model_folder();
    let assets = ModelAssets::load(dir.path(), Path::new("nzfocmec_v1.ini")).unwrap();

    let located = locate(GeoPoint::new(178.0, -41.0), &assets).unwrap();
    assert_eq!(located.domain.as_deref(), Some("D2"));
    assert_eq!(located.zone, Some(SubductionZone::Hik));

    let located = locate(GeoPoint::new(150.0, -30.0), &assets).unwrap();
    assert_eq!(located.domain, None);
    assert_eq!(located.zone, None);
}
