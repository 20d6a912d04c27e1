//! Sidebar chrome state for the league screens.
//!
//! DESIGN
//! ======
//! Plain state-machine struct; the provider component wraps it in an
//! `RwSignal` and shares it via context. Keeping transitions on the struct
//! itself makes the collapse behavior testable without a DOM.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Collapse/visibility state for the app sidebar.
///
/// The desktop and mobile axes are independent: collapsing the desktop rail
/// does not close a previously opened mobile drawer, and the other way
/// around. Which axis [`SidebarState::toggle`] flips depends only on the
/// current viewport classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    /// Viewport at or above the desktop breakpoint.
    pub is_desktop: bool,
    /// Desktop rail collapsed to icons only.
    pub collapsed: bool,
    /// Mobile drawer open over the content.
    pub mobile_open: bool,
}

impl SidebarState {
    /// Flip the collapse axis the current viewport uses.
    pub fn toggle(&mut self) {
        if self.is_desktop {
            self.collapsed = !self.collapsed;
        } else {
            self.mobile_open = !self.mobile_open;
        }
    }

    /// Force the mobile drawer shut, whatever state it was in.
    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// Record the viewport classification. Neither axis is reset: a drawer
    /// opened on mobile stays logically open across a resize to desktop.
    pub fn set_desktop(&mut self, is_desktop: bool) {
        self.is_desktop = is_desktop;
    }

    /// Menu labels show unless the desktop rail is collapsed.
    pub fn labels_visible(&self) -> bool {
        !(self.is_desktop && self.collapsed)
    }
}
