use eframe::egui::{self, Color32};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KioskPalette {
    pub background: Color32,
    pub button: Color32,
    pub header: Color32,
    pub label: Color32,
    pub progress: Color32,
}

impl Default for KioskPalette {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(0x2A, 0x2A, 0x2A),
            button: Color32::from_rgb(0x4C, 0xAF, 0x50),
            header: Color32::WHITE,
            label: Color32::WHITE,
            progress: Color32::from_rgb(0xFF, 0xEB, 0x3B),
        }
    }
}

pub const HEADER_SIZE: f32 = 40.0;
pub const STATUS_SIZE: f32 = 22.0;
pub const PROGRESS_SIZE: f32 = 18.0;
pub const BUTTON_SIZE: f32 = 20.0;
pub const FOOTER_SIZE: f32 = 14.0;

pub fn apply(ctx: &egui::Context, palette: KioskPalette) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.background;
    visuals.override_text_color = Some(palette.label);
    ctx.set_visuals(visuals);
}
