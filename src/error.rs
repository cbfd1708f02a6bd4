/// Result alias used by the fallible parts of the effect.
pub type EffectResult<T> = Result<T, EffectError>;

/// Everything that can go wrong while building or running a border.
///
/// None of these reach the host page: the browser binding logs them and
/// degrades to a static or absent border.
#[derive(thiserror::Error, Debug)]
pub enum EffectError {
    /// Color string that is not `#rgb`, `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color {0:?}: expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    /// Options JSON that does not describe an effect configuration.
    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),

    /// The host could not hand out a 2D raster context.
    #[error("2d drawing context unavailable")]
    NoContext,

    /// Resize observation could not be established.
    #[error("resize observation unavailable: {0}")]
    Observer(String),

    /// The host refused to schedule a display-refresh callback.
    #[error("frame scheduling failed: {0}")]
    Scheduler(String),

    /// Any other DOM call that failed.
    #[error("dom error: {0}")]
    Dom(String),
}

impl EffectError {
    pub fn observer(msg: impl Into<String>) -> Self {
        Self::Observer(msg.into())
    }

    pub fn scheduler(msg: impl Into<String>) -> Self {
        Self::Scheduler(msg.into())
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }
}
