use crate::classify_view::layout::ActionControl;
use crate::classify_view::main::ClassifyView;
use egui::load::SizedTexture;
use egui::{Color32, RichText, Stroke};

impl ClassifyView {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.painter()
            .rect_filled(self.frame, 0.0, self.config.background);

        ui.put(
            self.layout.title,
            egui::Label::new(
                RichText::new(&self.title)
                    .size(self.config.title_font_size)
                    .color(self.config.text_color),
            ),
        );

        self.show_preview(ui);
        self.show_detail_text(ui);
        self.show_toolbar(ui);
    }

    fn show_preview(&mut self, ui: &mut egui::Ui) {
        let rect = self.layout.image;
        let style = self.preview_style.clone();

        if let Some(background) = style.background {
            ui.painter().rect_filled(
                rect,
                style.corner_radius,
                background.gamma_multiply(style.alpha),
            );
        }

        let Some(texture) = self.texture(ui.ctx()) else {
            return;
        };

        let image = egui::Image::from_texture(SizedTexture::from_handle(&texture))
            .maintain_aspect_ratio(true)
            .fit_to_exact_size(rect.size())
            .rounding(style.corner_radius)
            .tint(Color32::WHITE.gamma_multiply(style.alpha));
        ui.put(rect, image);
    }

    fn show_detail_text(&self, ui: &mut egui::Ui) {
        ui.allocate_ui_at_rect(self.layout.detail, |ui| {
            egui::ScrollArea::vertical()
                .id_source("classify_view.detail")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(&self.detail_text)
                            .size(self.config.detail_font_size)
                            .color(self.config.text_color),
                    );
                });
        });
    }

    fn show_toolbar(&self, ui: &mut egui::Ui) {
        let toolbar = self.layout.toolbar;
        let painter = ui.painter();
        painter.rect_filled(toolbar, 0.0, self.config.toolbar_background);
        painter.hline(
            toolbar.x_range(),
            toolbar.min.y,
            Stroke::new(0.5, Color32::from_gray(180)),
        );

        for control in ActionControl::ALL {
            let enabled = self.is_enabled(control);
            let response = ui
                .allocate_ui_at_rect(self.layout.button(control), |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.add_enabled(
                            enabled,
                            egui::Button::new(RichText::new(control.symbol()).size(22.0))
                                .frame(false),
                        )
                    })
                    .inner
                })
                .inner
                .on_hover_text(control.label());

            if response.clicked() {
                self.activate(control);
            }
        }
    }

    /// Uploads the current image on first use after `display_image`.
    fn texture(&mut self, ctx: &egui::Context) -> Option<egui::TextureHandle> {
        if self.texture.is_none() {
            let image = self.image.as_ref()?;
            let rgba = image.to_rgba8();
            let size = [rgba.width() as usize, rgba.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
            self.texture = Some(ctx.load_texture(
                "classify_view.preview",
                color_image,
                egui::TextureOptions::LINEAR,
            ));
            let _ = self
                .logger
                .info(&format!("Uploaded preview texture {}x{}", size[0], size[1]));
        }
        self.texture.clone()
    }
}
