use eframe::egui;
use log::{error, info};

use budgetbook_egui::backend::Backend;
use budgetbook_egui::config::AppConfig;
use budgetbook_egui::ui::BudgetBookApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting BUDGETbook egui application");

    // A broken config file is reported once the window can show it
    let loaded_config = AppConfig::load();
    let config = loaded_config.as_ref().cloned().unwrap_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 400.0])
            .with_title("BUDGETbook")
            .with_resizable(true),
        ..Default::default()
    };

    let data_directory = config.resolved_data_directory();

    info!("Launching egui window");
    eframe::run_native(
        "BUDGETbook",
        options,
        Box::new(move |_cc| {
            if let Err(e) = loaded_config {
                error!("Failed to load configuration: {:#}", e);
                return Err(format!("Failed to load configuration: {:#}", e).into());
            }

            match Backend::with_data_directory(&data_directory) {
                Ok(backend) => {
                    info!("Successfully initialized BUDGETbook backend");
                    Ok(Box::new(BudgetBookApp::new(backend)))
                }
                Err(e) => {
                    error!("Failed to initialize app: {:#}", e);
                    Err(format!("Failed to initialize app: {:#}", e).into())
                }
            }
        }),
    )
}
