//! Shared numeric constants for the slide canvas.

// ── Canvas ──────────────────────────────────────────────────────

/// Width of the logical canvas. All element geometry is expressed in these units.
pub const CANVAS_WIDTH: f64 = 1200.0;

/// Height of the logical canvas (16:9 with [`CANVAS_WIDTH`]).
pub const CANVAS_HEIGHT: f64 = 675.0;

// ── Elements ────────────────────────────────────────────────────

/// Minimum width and height of a media element, in logical units.
pub const MIN_ELEMENT_SIZE: f64 = 50.0;

/// Offset applied to both axes when duplicating an element.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Default width of an element inserted from the media library.
pub const DEFAULT_ELEMENT_WIDTH: f64 = 400.0;

/// Default height of an element inserted from the media library.
pub const DEFAULT_ELEMENT_HEIGHT: f64 = 300.0;

/// Default top-left position of an element inserted from the media library.
pub const DEFAULT_ELEMENT_ORIGIN: f64 = 100.0;

// ── Snapping ────────────────────────────────────────────────────

/// Default grid pitch in logical units.
pub const DEFAULT_GRID_PITCH: f64 = 20.0;

// ── Media ───────────────────────────────────────────────────────

/// Assets larger than this are kept as ephemeral handles instead of inline data URLs.
pub const DEFAULT_INLINE_ASSET_LIMIT: usize = 2 * 1024 * 1024;

/// Scheme prefix of every handle URL minted by the media manager.
pub const HANDLE_URL_PREFIX: &str = "blob:slide-canvas/";

// ── Hit-testing ─────────────────────────────────────────────────

/// Hit slop around handles, in device pixels. Scaled to logical units by the
/// current preview before hit-testing.
pub const HANDLE_RADIUS: f64 = 8.0;

/// Distance above the top edge of the rotate handle, in logical units.
pub const ROTATE_HANDLE_OFFSET: f64 = 24.0;
