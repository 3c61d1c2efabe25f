/// Default base brush diameter in pixels.
pub const DEFAULT_BRUSH_SIZE: u32 = 24;

/// Smallest active brush size while a stroke is held.
pub const MIN_ACTIVE_BRUSH_SIZE: u32 = 6;

/// Fraction of the base size the brush shrinks to while held.
pub const ACTIVE_SHRINK: f32 = 0.6;

/// Stamp spacing as a fraction of the active brush size.
pub const STAMP_SPACING_FACTOR: f32 = 0.25;

/// Minimum stamp spacing in pixels.
pub const MIN_STAMP_SPACING: u32 = 2;

/// Global opacity for each stamp (thick acrylic feel).
pub const STAMP_OPACITY: f32 = 0.9;

/// Per-stamp rotation jitter bound, radians (+/-).
pub const ROTATION_JITTER: f32 = 0.2;

/// Per-stamp scale jitter as a fraction of the requested size (+/-).
pub const SCALE_JITTER: f32 = 0.15;

/// Probability of drawing a faint smear line per stroke segment.
pub const SMEAR_CHANCE: f32 = 0.05;

/// Opacity of the smear line.
pub const SMEAR_OPACITY: f32 = 0.06;

/// Smear line width as a fraction of the base brush size.
pub const SMEAR_WIDTH_FACTOR: f32 = 0.2;

/// Lower bound of the per-pixel grain alpha factor.
pub const GRAIN_ALPHA_MIN: f32 = 0.55;

/// Span of the per-pixel grain alpha factor (max = min + span).
pub const GRAIN_ALPHA_SPAN: f32 = 0.8;

/// Streak count for the degraded grain path.
pub const STREAK_COUNT: u32 = 200;

/// Number of points on the practice guide star.
pub const GUIDE_POINTS: u32 = 5;

/// Guide outer radius as a fraction of the smaller surface dimension.
pub const GUIDE_OUTER_RATIO: f32 = 0.25;

/// Minimum guide outer radius in pixels.
pub const GUIDE_MIN_OUTER: u32 = 30;

/// Guide inner radius as a fraction of the outer radius.
pub const GUIDE_INNER_RATIO: f32 = 0.45;

/// Minimum guide inner radius in pixels.
pub const GUIDE_MIN_INNER: u32 = 10;

/// Guide line width as a fraction of the outer radius.
pub const GUIDE_LINE_RATIO: f32 = 0.06;

/// Minimum guide line width in pixels.
pub const GUIDE_MIN_LINE: u32 = 4;

/// Default seed for the jitter generator when the host supplies none.
pub const DEFAULT_RNG_SEED: u32 = 0x9E37_79B9;
