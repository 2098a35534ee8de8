//! Drawing: reel grid, chrome, and the score panel
//!
//! Every drawable layer has a fallback: a missing symbol texture becomes a
//! flat colored tile, a missing frame becomes an outline, a missing button
//! becomes a circle. The game stays fully playable with no assets on disk.

use macroquad::prelude::*;

use sr_core::{frame_alias, symbol_alias, GameConfig, Theme, LOGO_ALIAS, SPIN_BUTTON_ALIAS};
use sr_reels::{ReelEngine, SymbolCell};
use sr_ui::{
    ScorePanel, SoundToggle, SpinButton, PANEL_COLUMN_WIDTH, PANEL_LABELS, TOGGLE_SIZE_PX,
};

use crate::assets::TextureStore;

/// Base size of the spin button sprite (px, unscaled)
pub const BUTTON_SIZE_PX: f32 = 160.0;
/// Below this width the button moves under the reels
const MOBILE_BREAKPOINT: f32 = 768.0;

/// Per-frame screen layout, recomputed from the live window size
pub struct Layout {
    pub scale: f32,
    pub reels_origin: (f32, f32),
    pub reels_size: (f32, f32),
    pub button_center: (f32, f32),
    /// Unscaled button rect for hit testing (the button applies its own scale)
    pub button_size: (f32, f32),
    pub toggle_top_left: (f32, f32),
    pub panel_top: f32,
    pub panel_height: f32,
}

impl Layout {
    pub fn compute(config: &GameConfig, scale: f32) -> Self {
        let sw = screen_width();
        let sh = screen_height();
        let panel_height = config.theme.ui_height * scale;
        let reels_w = config.grid.width_px() * scale;
        let reels_h = config.grid.reel_height_px() * scale;
        let center = (sw / 2.0, (sh - panel_height) / 2.0);
        let reels_origin = (center.0 - reels_w / 2.0, center.1 - reels_h / 2.0);

        let button_px = BUTTON_SIZE_PX * scale;
        let button_center = if sw <= MOBILE_BREAKPOINT {
            (
                center.0,
                reels_origin.1 + reels_h + button_px / 2.0 + 40.0 * scale,
            )
        } else {
            (
                reels_origin.0 + reels_w + button_px / 2.0 + 40.0 * scale,
                center.1,
            )
        };

        Self {
            scale,
            reels_origin,
            reels_size: (reels_w, reels_h),
            button_center,
            button_size: (BUTTON_SIZE_PX, BUTTON_SIZE_PX),
            toggle_top_left: (sw - (TOGGLE_SIZE_PX + 20.0) * scale, 20.0 * scale),
            panel_top: sh - panel_height,
            panel_height,
        }
    }
}

/// Draw one full frame
pub fn draw(
    engine: &ReelEngine,
    button: &SpinButton,
    panel: &ScorePanel,
    toggle: &SoundToggle,
    textures: &TextureStore,
    layout: &Layout,
) {
    let config = engine.config();
    let theme = &config.theme;
    clear_background(rgb(theme.primary));

    draw_reels(engine, textures, layout);
    draw_masks(config, layout);
    draw_logo(textures, layout);
    draw_button(button, textures, layout);
    draw_toggle(toggle, textures, layout, theme);
    draw_panel(panel, layout, theme);
}

fn rgb(c: [u8; 3]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

fn fallback_color(index: u8) -> Color {
    match index {
        1 => GOLD,
        2 => SKYBLUE,
        3 => PINK,
        _ => LIME,
    }
}

fn draw_reels(engine: &ReelEngine, textures: &TextureStore, layout: &Layout) {
    let config = engine.config();
    let grid = &config.grid;
    let cell_px = grid.symbol_px * layout.scale;

    for (col, cells) in engine.columns().iter().enumerate() {
        let x_center = layout.reels_origin.0 + (col as f32 + 0.5) * cell_px;
        let scrolling = !engine.reel_stopped(col);
        for cell in cells {
            // Parked fillers more than a cell below the window never show.
            if cell.y() > grid.reel_height_px() + grid.symbol_px {
                continue;
            }
            let y_center = layout.reels_origin.1 + cell.y() * layout.scale;
            draw_cell(cell, x_center, y_center, cell_px, scrolling, config, textures);
        }
    }
}

fn draw_cell(
    cell: &SymbolCell,
    x: f32,
    y: f32,
    cell_px: f32,
    scrolling: bool,
    config: &GameConfig,
    textures: &TextureStore,
) {
    let prefix = &config.grid.symbol_prefix;
    let size = cell_px * cell.scale();
    let half = size / 2.0;

    draw_rectangle(x - half, y - half, size, size, rgb(config.theme.primary));

    match textures.texture(&symbol_alias(prefix, cell.index())) {
        Some(texture) => {
            // Motion blur stand-in: a faint trailing copy while scrolling.
            if scrolling {
                draw_texture_ex(
                    texture,
                    x - half,
                    y - half - size * 0.12,
                    Color::new(1.0, 1.0, 1.0, 0.3),
                    DrawTextureParams {
                        dest_size: Some(vec2(size, size)),
                        ..Default::default()
                    },
                );
            }
            draw_texture_ex(
                texture,
                x - half,
                y - half,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(size, size)),
                    ..Default::default()
                },
            )
        }
        None => {
            let pad = size * 0.1;
            draw_rectangle(
                x - half + pad,
                y - half + pad,
                size - pad * 2.0,
                size - pad * 2.0,
                fallback_color(cell.index()),
            );
            let label = cell.index().to_string();
            let font_px = size * 0.4;
            let dims = measure_text(&label, None, font_px as u16, 1.0);
            draw_text(
                &label,
                x - dims.width / 2.0,
                y + dims.height / 2.0,
                font_px,
                rgb(config.theme.primary),
            );
        }
    }

    let frame_tint = Color::new(1.0, 1.0, 1.0, cell.frame_alpha());
    match textures.texture(&frame_alias(prefix, cell.index())) {
        Some(texture) => draw_texture_ex(
            texture,
            x - half,
            y - half,
            frame_tint,
            DrawTextureParams {
                dest_size: Some(vec2(size, size)),
                ..Default::default()
            },
        ),
        None => {
            let mut line = rgb(config.theme.secondary);
            line.a = cell.frame_alpha();
            draw_rectangle_lines(x - half, y - half, size, size, 3.0, line);
        }
    }
}

/// Cover scroll overflow above and below the visible reel window
fn draw_masks(config: &GameConfig, layout: &Layout) {
    let bg = rgb(config.theme.primary);
    let cell_px = config.grid.symbol_px * layout.scale;
    let (x, y) = layout.reels_origin;
    let (w, h) = layout.reels_size;

    draw_rectangle(x, y - cell_px, w, cell_px, bg);
    draw_rectangle(x, y + h, w, cell_px * 2.0, bg);
}

/// Logo in the top-left corner, only when its texture loaded
fn draw_logo(textures: &TextureStore, layout: &Layout) {
    if let Some(texture) = textures.texture(LOGO_ALIAS) {
        let height = 60.0 * layout.scale;
        let width = height * texture.width() / texture.height();
        draw_texture_ex(
            texture,
            20.0 * layout.scale,
            20.0 * layout.scale,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(width, height)),
                ..Default::default()
            },
        );
    }
}

fn draw_button(button: &SpinButton, textures: &TextureStore, layout: &Layout) {
    let (cx, cy) = layout.button_center;
    let size = BUTTON_SIZE_PX * button.scale();
    let half = size / 2.0;
    let tint = Color::new(1.0, 1.0, 1.0, button.alpha());

    match textures.texture(SPIN_BUTTON_ALIAS) {
        Some(texture) => draw_texture_ex(
            texture,
            cx - half,
            cy - half,
            tint,
            DrawTextureParams {
                dest_size: Some(vec2(size, size)),
                ..Default::default()
            },
        ),
        None => {
            let mut fill = GOLD;
            fill.a = button.alpha();
            draw_circle(cx, cy, half, fill);

            let label = "SPIN";
            let font_px = size * 0.28;
            let dims = measure_text(label, None, font_px as u16, 1.0);
            let mut text = BLACK;
            text.a = button.alpha();
            draw_text(label, cx - dims.width / 2.0, cy + dims.height / 2.0, font_px, text);
        }
    }
}

fn draw_toggle(toggle: &SoundToggle, textures: &TextureStore, layout: &Layout, theme: &Theme) {
    let (x, y) = layout.toggle_top_left;
    let size = TOGGLE_SIZE_PX * layout.scale;

    match textures.texture(toggle.icon_alias()) {
        Some(texture) => draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(size, size)),
                ..Default::default()
            },
        ),
        None => {
            draw_rectangle_lines(x, y, size, size, 2.0, rgb(theme.secondary));
            let label = if toggle.is_on() { "ON" } else { "OFF" };
            let font_px = size * 0.35;
            let dims = measure_text(label, None, font_px as u16, 1.0);
            draw_text(
                label,
                x + size / 2.0 - dims.width / 2.0,
                y + size / 2.0 + dims.height / 2.0,
                font_px,
                rgb(theme.secondary),
            );
        }
    }
}

fn draw_panel(panel: &ScorePanel, layout: &Layout, theme: &Theme) {
    draw_rectangle(
        0.0,
        layout.panel_top,
        screen_width(),
        layout.panel_height,
        rgb(theme.accent),
    );

    let col_width = PANEL_COLUMN_WIDTH * layout.scale;
    let centers = ScorePanel::column_centers(screen_width(), col_width);
    let texts = panel.column_texts();
    let font_px = theme.font_px * layout.scale;
    let value_y = layout.panel_top + layout.panel_height / 2.0 - 10.0 * layout.scale;
    let label_y = value_y + 28.0 * layout.scale + font_px;
    let underline_y = value_y + 14.0 * layout.scale;
    let text_color = rgb(theme.secondary);

    for i in 0..3 {
        let cx = centers[i];

        let value = &texts[i];
        if !value.is_empty() {
            let dims = measure_text(value, None, font_px as u16, 1.0);
            draw_text(value, cx - dims.width / 2.0, value_y, font_px, text_color);
        }

        let label = PANEL_LABELS[i];
        let dims = measure_text(label, None, font_px as u16, 1.0);
        draw_text(label, cx - dims.width / 2.0, label_y, font_px, text_color);

        let underline_w = col_width - 8.0 * layout.scale;
        draw_rectangle(cx - underline_w / 2.0, underline_y, underline_w, 2.0, text_color);
    }
}
