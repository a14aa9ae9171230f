use eframe::egui;

use mealdesk_client::app::MealdeskApp;
use mealdesk_client::logging;

fn main() -> eframe::Result<()> {
    logging::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mealdesk Admin",
        options,
        Box::new(|cc| Ok(Box::new(MealdeskApp::new(cc)))),
    )
}
