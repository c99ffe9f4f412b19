use shelf_domain::device::{DeviceClass, DevicePreference, RootViewId};
use shelf_domain::routes::{PageId, STANDARD_ROUTES};
use std::collections::HashSet;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn root_view_follows_device_class() {
    assert_eq!(RootViewId::from(DeviceClass::Mobile), RootViewId::Mobile);
    assert_eq!(RootViewId::from(DeviceClass::Desktop), RootViewId::Desktop);
}

#[test]
fn every_device_class_has_its_own_root_view() {
    let views: HashSet<_> = DeviceClass::iter().map(RootViewId::from).collect();
    assert_eq!(views.len(), RootViewId::iter().count());
}

#[test]
fn preference_parses_case_insensitively() {
    assert_eq!(DevicePreference::from_str("AUTO").ok(), Some(DevicePreference::Auto));
    assert_eq!(DevicePreference::from_str("Mobile").ok(), Some(DevicePreference::Mobile));
    assert!(DevicePreference::from_str("tablet").is_err());
}

#[test]
fn only_auto_defers_to_detection() {
    assert_eq!(DevicePreference::Auto.forced(), None);
    assert_eq!(DevicePreference::Mobile.forced(), Some(DeviceClass::Mobile));
    assert_eq!(DevicePreference::Desktop.forced(), Some(DeviceClass::Desktop));
}

#[test]
fn device_class_displays_lowercase() {
    assert_eq!(DeviceClass::Mobile.to_string(), "mobile");
    assert_eq!(DeviceClass::Desktop.as_ref(), "desktop");
    assert!(DeviceClass::Mobile.is_mobile());
    assert!(!DeviceClass::Desktop.is_mobile());
}

#[test]
fn standard_routes_cover_every_page_once() {
    assert_eq!(STANDARD_ROUTES.len(), 3);

    let paths: HashSet<_> = STANDARD_ROUTES.iter().map(|r| r.path).collect();
    assert_eq!(paths.len(), STANDARD_ROUTES.len());

    let pages: Vec<_> = STANDARD_ROUTES.iter().map(|r| r.page).collect();
    assert_eq!(pages, [PageId::Home, PageId::About, PageId::Books]);
}
