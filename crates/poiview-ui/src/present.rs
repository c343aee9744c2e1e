//! Plain-text presentation of a rendered [`MemorySurface`].

use std::fmt::Write;

use crate::card::CardView;
use crate::mount::MemorySurface;

pub fn render_card(card: &CardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", card.place_id, card.title);
    let _ = writeln!(out, "    {}", card.description);
    if let Some(distance) = &card.distance {
        let _ = writeln!(out, "    {}", distance);
    }
    let _ = writeln!(out, "    image: {} ({})", card.image, card.image_alt);
    let actions = card
        .actions
        .iter()
        .map(|a| format!("[{}]", a.label()))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "    {}", actions);
    out
}

/// Status and weather lines first (when set), then one block per card in order.
pub fn render_surface(surface: &MemorySurface) -> String {
    let mut out = String::new();
    if let Some(status) = surface.status.text() {
        let _ = writeln!(out, "{}", status);
    }
    if let Some(weather) = surface.weather.text() {
        let _ = writeln!(out, "{}", weather);
    }

    let cards = surface.places.cards();
    if cards.is_empty() {
        return out;
    }
    if !out.is_empty() {
        out.push('\n');
    }
    let blocks = cards.iter().map(render_card).collect::<Vec<_>>();
    out.push_str(&blocks.join("\n"));
    out
}
