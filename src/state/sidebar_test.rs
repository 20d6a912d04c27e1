use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_mobile_closed_expanded() {
    let state = SidebarState::default();

    assert!(!state.is_desktop);
    assert!(!state.collapsed);
    assert!(!state.mobile_open);
}

// =============================================================
// Toggle axis selection
// =============================================================

#[test]
fn desktop_toggle_flips_only_the_collapse_axis() {
    let mut state = SidebarState {
        is_desktop: true,
        ..SidebarState::default()
    };

    state.toggle();
    assert!(state.collapsed);
    assert!(!state.mobile_open);

    state.toggle();
    assert!(!state.collapsed);
}

#[test]
fn mobile_toggle_flips_only_the_drawer_axis() {
    let mut state = SidebarState::default();

    state.toggle();
    assert!(state.mobile_open);
    assert!(!state.collapsed);

    state.toggle();
    assert!(!state.mobile_open);
}

#[test]
fn axes_survive_viewport_reclassification() {
    let mut state = SidebarState::default();

    state.toggle();
    state.set_desktop(true);
    state.toggle();

    assert!(state.mobile_open);
    assert!(state.collapsed);

    state.set_desktop(false);
    assert!(state.mobile_open);
    assert!(state.collapsed);
}

// =============================================================
// close_mobile
// =============================================================

#[test]
fn close_mobile_is_unconditional() {
    let mut open = SidebarState {
        mobile_open: true,
        ..SidebarState::default()
    };
    let mut closed = SidebarState::default();

    open.close_mobile();
    closed.close_mobile();

    assert!(!open.mobile_open);
    assert!(!closed.mobile_open);
}

#[test]
fn close_mobile_leaves_the_desktop_axis_alone() {
    let mut state = SidebarState {
        is_desktop: true,
        collapsed: true,
        mobile_open: true,
    };

    state.close_mobile();

    assert!(state.collapsed);
    assert!(state.is_desktop);
}

// =============================================================
// Label visibility
// =============================================================

#[test]
fn labels_hide_only_when_desktop_and_collapsed() {
    let cases = [
        (false, false, true),
        (false, true, true),
        (true, false, true),
        (true, true, false),
    ];

    for (is_desktop, collapsed, expected) in cases {
        let state = SidebarState {
            is_desktop,
            collapsed,
            mobile_open: false,
        };
        assert_eq!(
            state.labels_visible(),
            expected,
            "desktop: {is_desktop}, collapsed: {collapsed}"
        );
    }
}
