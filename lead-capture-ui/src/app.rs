use eframe::egui;

use crate::form::{FormManager, FormStyle, LeadCaptureForm, LeadFormConfig};

/// Demo shell that embeds the form against a sample endpoint.
pub struct LeadCaptureApp {
    manager: FormManager,
    style: FormStyle,
}

impl LeadCaptureApp {
    pub fn new(cc: &eframe::CreationContext<'_>, api_url: String) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        log::info!("Starting lead capture demo against {api_url}");

        let manager = FormManager::new(LeadFormConfig {
            api_url,
            looking_for_options: vec![
                "Pricing".to_string(),
                "Product demo".to_string(),
                "Partnership".to_string(),
            ],
            on_complete: Some(Box::new(|| log::info!("Lead capture flow finished"))),
        });

        Self {
            manager,
            style: FormStyle::default(),
        }
    }
}

impl eframe::App for LeadCaptureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply queued edits and submissions before rendering this frame.
        self.manager.update();
        if self.manager.has_pending_actions() {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading("Get in touch");
                ui.add_space(20.0);

                if self.manager.state().completed {
                    ui.label("Thanks! We'll be in touch shortly.");
                    ui.add_space(12.0);
                }

                LeadCaptureForm::new(&mut self.manager, &self.style).show(ui);
            });
        });
    }
}
