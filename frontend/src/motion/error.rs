use thiserror::Error;

/// Reasons a motion primitive could not be set up.
///
/// None of these are shown to the visitor; callers fall back to a static,
/// fully visible rendering instead.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MotionError {
    #[error("visibility threshold {0} is outside (0, 1]")]
    ThresholdOutOfRange(f64),
    #[error("IntersectionObserver is not available on this host")]
    ObserverUnavailable,
    #[error("animation frames are not available on this host")]
    FramesUnavailable,
}
