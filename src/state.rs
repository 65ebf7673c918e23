//! View state for the page: the header scroll flag, the one-shot section
//! reveal latch and the overlay controller. Kept free of DOM types so the
//! transitions can be unit tested natively.

/// Header switches to its compact preset past this offset.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn header_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

/// One-shot visibility latch. Moves false→true the first time the observed
/// section is sufficiently visible and never reverts, so entrance animations
/// cannot re-trigger when the section scrolls back out of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    shown: bool,
}

impl RevealLatch {
    pub const fn new() -> Self {
        Self { shown: false }
    }

    pub fn shown(&self) -> bool {
        self.shown
    }

    /// Feed one intersection sample. Returns true exactly once, on the
    /// latching transition.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.shown {
            self.shown = true;
            true
        } else {
            false
        }
    }
}

/// The page shows at most one overlay at a time; that invariant is carried by
/// the type rather than checked at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    ImagePreview {
        src: String,
        alt: String,
    },
    PhoneMenu,
}

impl Overlay {
    pub fn image_preview(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Overlay::ImagePreview {
            src: src.into(),
            alt: alt.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::Closed)
    }
}

/// Body `overflow` value keeping the scroll lock consistent with the overlay:
/// locked while anything is open, restored once it closes.
pub fn body_overflow(overlay: &Overlay) -> &'static str {
    if overlay.is_open() {
        "hidden"
    } else {
        "unset"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flag_boundary() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(50.0));
        assert!(header_scrolled(50.5));
        assert!(header_scrolled(51.0));
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.shown());
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.shown());
        // Later samples never fire again, visible or not.
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.shown());
    }

    #[test]
    fn latch_never_reverts() {
        let mut latch = RevealLatch::new();
        latch.observe(true);
        for _ in 0..10 {
            latch.observe(false);
            assert!(latch.shown());
        }
    }

    #[test]
    fn overlay_starts_closed() {
        let overlay = Overlay::default();
        assert!(!overlay.is_open());
        assert_eq!(body_overflow(&overlay), "unset");
    }

    #[test]
    fn image_preview_holds_exact_payload() {
        let overlay = Overlay::image_preview("/images/tra-tac.jpeg", "Trà Tắc - Lemon Tea");
        assert_eq!(
            overlay,
            Overlay::ImagePreview {
                src: "/images/tra-tac.jpeg".into(),
                alt: "Trà Tắc - Lemon Tea".into(),
            }
        );
        assert!(overlay.is_open());
        assert_eq!(body_overflow(&overlay), "hidden");
    }

    #[test]
    fn open_close_cycle_restores_scroll() {
        let mut overlay = Overlay::image_preview("/images/tra-tac.jpeg", "Trà Tắc - Lemon Tea");
        assert_eq!(body_overflow(&overlay), "hidden");
        overlay = Overlay::Closed;
        assert_eq!(body_overflow(&overlay), "unset");
        // Closing an already closed overlay is a no-op.
        let again = Overlay::Closed;
        assert_eq!(overlay, again);
        assert_eq!(body_overflow(&again), "unset");
    }

    #[test]
    fn phone_menu_is_exclusive_with_image_preview() {
        let overlay = Overlay::PhoneMenu;
        assert!(overlay.is_open());
        assert!(!matches!(overlay, Overlay::ImagePreview { .. }));
        assert_eq!(body_overflow(&overlay), "hidden");
    }
}
