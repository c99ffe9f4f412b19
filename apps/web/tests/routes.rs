use shelf_domain::routes::{PageId, STANDARD_ROUTES};
use shelf_kernel::routing::RoutingTable;
use shelf_web::routes::{Route, route_at};
use shelf_web::views::Chrome;

#[test]
fn every_table_entry_maps_to_its_router_path() {
    for entry in STANDARD_ROUTES {
        let route = Route::from(entry.page);
        assert_eq!(route.to_string(), entry.path, "{}", entry.name);
    }
}

#[test]
fn router_parses_table_paths_back_to_pages() {
    for entry in STANDARD_ROUTES {
        let parsed: Route = entry.path.parse().expect("path should parse");
        assert_eq!(parsed, Route::from(entry.page));
    }
}

#[test]
fn unknown_paths_are_not_routes() {
    assert!("/authors".parse::<Route>().is_err());
}

#[test]
fn standard_table_builds_for_the_router() {
    let table = RoutingTable::standard("/").expect("standard table");
    let pages: Vec<_> = table.entries().iter().map(|e| e.page).collect();
    assert_eq!(pages, [PageId::Home, PageId::About, PageId::Books]);
}

#[test]
fn chromes_use_distinct_nav_classes() {
    assert_ne!(Chrome::TopBar.nav_class(), Chrome::TabBar.nav_class());
}

#[test]
fn router_and_table_agree_under_a_base_path() {
    let table = RoutingTable::standard("/shelf/").expect("standard table");
    let locations =
        ["/shelf", "/shelf/", "/shelf/about", "/shelf/books?sort=title", "/shelf/books/"];
    for location in locations {
        let page = table.resolve(location).map(|entry| entry.page);
        assert!(page.is_some(), "{location}");
        assert_eq!(route_at(&table, location), page.map(Route::from), "{location}");
    }
}

#[test]
fn locations_outside_the_base_match_neither() {
    let table = RoutingTable::standard("/shelf").expect("standard table");
    for location in ["/books", "/shelfish/books", "/shelf/authors"] {
        assert_eq!(table.resolve(location), None, "{location}");
        assert_eq!(route_at(&table, location), None, "{location}");
    }
}

#[test]
fn root_base_routes_without_a_history_prefix() {
    let table = RoutingTable::standard("/").expect("standard table");
    assert_eq!(table.history_prefix(), None);
    assert_eq!(route_at(&table, "/books"), Some(Route::Books {}));
}
