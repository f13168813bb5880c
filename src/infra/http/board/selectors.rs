//! CSS selectors targeted by board datastar patches.

pub const BOARD_PANEL: &str = "[data-board-panel]";
