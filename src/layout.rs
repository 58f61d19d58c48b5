//! Panel geometry and screen layout constants.
//!
//! Layout positions are computed at compile time as `const`, so the
//! rendering code never recalculates grid geometry per frame. Coordinates
//! are `i32` throughout the drawing API; clipping happens at the blit layer.

// =============================================================================
// Panel Geometry
// =============================================================================

/// Panel width in pixels (ST7796S in landscape orientation).
pub const WIDTH: i32 = 480;

/// Panel height in pixels.
pub const HEIGHT: i32 = 320;

// =============================================================================
// Dashboard Chrome
// =============================================================================

/// Title bar height in pixels.
pub const TITLE_BAR_H: i32 = 28;

/// Bottom status bar height in pixels.
pub const STATUS_BAR_H: i32 = 18;

/// Gap between adjacent cards in both grid variants.
pub const CARD_GAP: i32 = 8;

/// Top edge of the card grid, below the title bar.
pub const GRID_TOP: i32 = TITLE_BAR_H + 6;

// =============================================================================
// 2x2 Grid
// =============================================================================

/// Card width in the 2x2 dashboard.
pub const CARD2_W: i32 = 230;

/// Card height in the 2x2 dashboard.
pub const CARD2_H: i32 = 88;

/// Left edge of the 2x2 grid, centered on the panel.
pub const GRID2_X0: i32 = (WIDTH - (2 * CARD2_W + CARD_GAP)) / 2;

// =============================================================================
// 3x3 Grid
// =============================================================================

/// Card width in the 3x3 dashboard.
pub const CARD3_W: i32 = 150;

/// Card height in the 3x3 dashboard.
pub const CARD3_H: i32 = 84;

/// Left edge of the 3x3 grid, centered on the panel.
pub const GRID3_X0: i32 = (WIDTH - (3 * CARD3_W + 2 * CARD_GAP)) / 2;

// Both grids must fit between the title bar and the status bar.
const _: () = assert!(GRID_TOP + 2 * CARD2_H + CARD_GAP <= HEIGHT - STATUS_BAR_H);
const _: () = assert!(GRID_TOP + 3 * CARD3_H + 2 * CARD_GAP <= HEIGHT - STATUS_BAR_H);
const _: () = assert!(GRID2_X0 >= 0);
const _: () = assert!(GRID3_X0 >= 0);

// =============================================================================
// Boot Screens
// =============================================================================

/// Title baseline for the typed 3x boot title.
pub const TITLE_Y: i32 = 80;

/// Subtitle baseline on the boot title screen.
pub const SUBTITLE_Y: i32 = 150;

/// Version line baseline on the boot title screen.
pub const VERSION_Y: i32 = 172;

/// Progress bar track width.
pub const BAR_W: i32 = 300;

/// Progress bar track height.
pub const BAR_H: i32 = 18;

/// Left edge of the progress bar, centered on the panel.
pub const BAR_X: i32 = (WIDTH - BAR_W) / 2;

/// Top edge of the progress bar.
pub const BAR_Y: i32 = 200;

/// Baseline of the status message repainted below the bar.
pub const BAR_MSG_Y: i32 = BAR_Y + BAR_H + 12;

const _: () = assert!(BAR_Y + BAR_H < HEIGHT);
const _: () = assert!(BAR_MSG_Y + 16 <= HEIGHT);
