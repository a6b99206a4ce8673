//! DOM-side HUD and leaderboard table
//!
//! Missing elements are skipped; the game runs without any of them.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlTableElement, HtmlTableSectionElement};

use crate::highscores::Leaderboard;

/// Element IDs in the host page
pub mod ids {
    pub const CANVAS: &str = "gameCanvas";
    pub const CURRENT_SCORE: &str = "currentScore";
    pub const BEST_SCORE: &str = "bestScore";
    pub const LEADERBOARD_TABLE: &str = "leaderboardTable";
}

fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Update the current and best score labels
pub fn update_scores(document: &Document, score: u64, best: u64) {
    set_text(document, ids::CURRENT_SCORE, &score.to_string());
    set_text(document, ids::BEST_SCORE, &best.to_string());
}

fn leaderboard_body(document: &Document) -> Option<HtmlTableSectionElement> {
    let table = document
        .get_element_by_id(ids::LEADERBOARD_TABLE)?
        .dyn_into::<HtmlTableElement>()
        .ok()?;
    table
        .t_bodies()
        .item(0)?
        .dyn_into::<HtmlTableSectionElement>()
        .ok()
}

/// Rebuild the leaderboard table body: one rank/score row per entry
pub fn display_leaderboard(document: &Document, leaderboard: &Leaderboard) -> Result<(), JsValue> {
    let Some(body) = leaderboard_body(document) else {
        return Ok(());
    };
    body.set_inner_html("");
    for (rank, score) in leaderboard.rows() {
        let row = body
            .insert_row()?
            .dyn_into::<web_sys::HtmlTableRowElement>()?;
        row.insert_cell()?.set_text_content(Some(&rank.to_string()));
        row.insert_cell()?.set_text_content(Some(&score.to_string()));
    }
    Ok(())
}

/// Hide or show the leaderboard table
pub fn set_leaderboard_visible(document: &Document, visible: bool) {
    let Some(el) = document.get_element_by_id(ids::LEADERBOARD_TABLE) else {
        return;
    };
    if let Err(err) = el.class_list().toggle_with_force("hidden", !visible) {
        log::warn!("Could not toggle leaderboard visibility: {:?}", err);
    }
}

/// Blocking game-over notice
pub fn announce_game_over(score: u64, rank: Option<usize>) {
    let message = match rank {
        Some(rank) => format!("Game over! Your score: {} (rank #{})", score, rank),
        None => format!("Game over! Your score: {}", score),
    };
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&message);
    }
}
