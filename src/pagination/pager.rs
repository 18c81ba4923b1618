use crate::foundation::error::NavigationError;

/// Capability handed over by the host pager so dots can navigate.
///
/// Methods take `&self`: one handle is shared by every dot, and hosts keep any
/// mutable state behind their own interior mutability.
pub trait PagerHandle {
    /// Page index behind a visual position. Pagers that reorder pages (loop
    /// clones, for instance) remap here; the default is the identity.
    fn position_index(&self, display_position: usize) -> Result<usize, NavigationError> {
        Ok(display_position)
    }

    /// Ask the pager to scroll to `index`.
    fn snap_to_index(&self, index: usize) -> Result<(), NavigationError>;
}
