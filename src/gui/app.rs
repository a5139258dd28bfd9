use super::{FpsLimiter, Style};
use crate::{Config, Preset, Session};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions,
};

pub struct App {
    pub(super) session: Session,         // Simulation driven by this window.
    pub(super) texture: TextureHandle,   // Texture handle of the rendered field.
    pub(super) fps_limiter: FpsLimiter,  // Limits the tick rate to a certain value.
    pub(super) max_tps: f64,             // Ticks per second the loop is limited to.
}

impl App {
    pub fn new(ctx: &Context, session: Session) -> Self {
        Self {
            session,
            texture: ctx.load_texture("field", ColorImage::default(), TextureOptions::NEAREST),
            fps_limiter: FpsLimiter::default(),
            max_tps: Config::MAX_TPS,
        }
    }

    /// Inner width of the window holding the control panel and the field.
    pub fn window_width() -> f32 {
        Style::CONTROL_PANEL_WIDTH + Config::WINDOW_WIDTH as f32 + 3. * Style::FRAME_MARGIN
    }

    pub fn window_height() -> f32 {
        Config::WINDOW_HEIGHT as f32 + 2. * Style::FRAME_MARGIN
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::E) {
                self.session.toggle_paused();
            }
            if input.key_pressed(Key::Space) {
                self.session.step_once();
            }
            if input.key_pressed(Key::G) {
                self.session.set_hide_grid(!self.session.hide_grid());
            }
            if input.key_pressed(Key::R) {
                self.session.reset(Preset::StableSquares);
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Style::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);

                self.session.on_tick();

                self.draw(ui);
            });

        self.fps_limiter.sleep(self.max_tps);
    }
}
