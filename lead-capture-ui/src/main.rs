// Desktop entry point for the lead capture demo
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use lead_capture_ui::app::LeadCaptureApp;

#[tokio::main]
async fn main() -> eframe::Result<()> {
    env_logger::init();

    let api_url = std::env::var("LEAD_API_URL")
        .unwrap_or_else(|_| "https://api.example.com/submit-lead".to_string());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 420.0])
            .with_min_inner_size([360.0, 320.0])
            .with_title("Lead Capture"),
        ..Default::default()
    };

    eframe::run_native(
        "Lead Capture",
        native_options,
        Box::new(move |cc| Ok(Box::new(LeadCaptureApp::new(cc, api_url)))),
    )
}
