use super::*;

// =============================================================
// Sidebar active-state matching
// =============================================================

#[test]
fn exact_path_is_active() {
    assert!(is_active("/admin/hotels", "/admin/hotels"));
}

#[test]
fn subpaths_keep_the_parent_entry_active() {
    assert!(is_active("/admin/hotels/h-1", "/admin/hotels"));
    assert!(is_active("/admin/events/new", "/admin/events"));
}

#[test]
fn sibling_and_prefix_paths_are_not_active() {
    assert!(!is_active("/admin/events", "/admin/hotels"));
    assert!(!is_active("/admin/hotelsx", "/admin/hotels"));
}
