use super::{App, Style};
use crate::{Config, Preset};
use eframe::egui::{
    pos2, vec2, Align2, Button, Color32, ColorImage, FontId, Painter, Rect, RichText, Sense,
    Slider, Stroke, TextureOptions, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Style::TEXT_COLOR)
            .size(Style::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Style::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Style::BUTTON_STROKE_WIDTH,
                Style::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        let text = if self.session.is_paused() { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.session.toggle_paused();
        }

        if ui
            .add_enabled(self.session.is_paused(), Self::new_button("Next step"))
            .clicked()
        {
            self.session.step_once();
        }

        ui.label(Self::new_text("Reset field to:"));
        for preset in Preset::ALL {
            if ui.add(Self::new_button(&preset.to_string())).clicked() {
                self.session.reset(preset);
            }
        }
        if ui.add(Self::new_button("Random")).clicked() {
            if let Err(e) = self.session.randomize(None, Config::RANDOM_FILL_RATE) {
                log::error!("failed to randomize the field: {e}");
            }
        }
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        let mut hide_grid = self.session.hide_grid();
        if ui
            .checkbox(&mut hide_grid, Self::new_text("Hide grid"))
            .changed()
        {
            self.session.set_hide_grid(hide_grid);
        }

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Max TPS: "));
            ui.add(Slider::new(&mut self.max_tps, 1.0..=240.0).logarithmic(true));
        });
    }

    fn draw_stats(&self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.session.generation()
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            self.session.population()
        )));
        ui.label(Self::new_text(
            "\nE: play/pause\nSpace: next step\nG: grid lines\nR: reset\nClick: toggle cell",
        ));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Style::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_simulation_controls(ui);
                    ui.add_space(Style::WIDGET_GAP);
                    self.draw_appearance_controls(ui);
                    ui.add_space(Style::WIDGET_GAP);
                    self.draw_stats(ui);
                });
            });
        });
    }

    fn draw_grid_lines(painter: &Painter, rect: Rect) {
        for col in 1..Config::FIELD_WIDTH {
            let x = rect.left() + (col * Config::CELL_WIDTH) as f32;
            painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], Style::GRID_LINE);
        }
        for row in 1..Config::FIELD_HEIGHT {
            let y = rect.top() + (row * Config::CELL_HEIGHT) as f32;
            painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], Style::GRID_LINE);
        }
    }

    fn draw_field(&mut self, ui: &mut Ui) {
        let size = [Config::WINDOW_WIDTH, Config::WINDOW_HEIGHT];
        let image = ColorImage::from_rgba_unmultiplied(size, self.session.pixel_buffer());
        self.texture.set(image, TextureOptions::NEAREST);

        let (rect, response) =
            ui.allocate_exact_size(vec2(size[0] as f32, size[1] as f32), Sense::click());
        let painter = ui.painter_at(rect);

        // live cells are transparent and show this color
        let [r, g, b] = Config::BACKGROUND_RGB;
        painter.rect_filled(rect, 0., Color32::from_rgb(r, g, b));
        let uv = Rect::from_min_max(pos2(0., 0.), pos2(1., 1.));
        painter.image(self.texture.id(), rect, uv, Color32::WHITE);

        if !self.session.hide_grid() {
            Self::draw_grid_lines(&painter, rect);
        }

        painter.text(
            rect.left_top() + vec2(Style::OVERLAY_OFFSET, Style::OVERLAY_OFFSET),
            Align2::LEFT_TOP,
            format!("TPS: {:.2}", self.fps_limiter.fps()),
            FontId::monospace(Style::OVERLAY_TEXT_SIZE),
            Style::OVERLAY_TEXT_COLOR,
        );

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let p = pos - rect.left_top();
                let x = (p.x / Config::CELL_WIDTH as f32).floor() as i64;
                let y = (p.y / Config::CELL_HEIGHT as f32).floor() as i64;
                self.session.toggle_cell(x, y);
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(Style::FRAME_MARGIN);

            self.draw_field(ui);
        });
    }
}
