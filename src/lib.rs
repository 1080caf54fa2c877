//! Counsel Desk — Tauri application entry point.
//!
//! This is the app shell that wires together all domains and commands.
//! No business logic lives here — only module declarations, plugin
//! registration, state management, and the command registry.
//!
//! Commands are split across:
//!   - commands.rs          — simple one-step commands (catalogs, clipboard, links)
//!   - pipeline.rs          — multi-step orchestration (generate_guidance, explain_term)
//!   - settings_commands.rs — endpoint configuration

pub mod catalog;
mod commands;
pub mod llm;
mod pipeline;
pub mod settings_commands;

/// Entry point — called by Tauri runtime.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Load .env.local → .env from the project root. Uses CARGO_MANIFEST_DIR
    // (compile-time path) to find the files regardless of the binary's
    // working directory.
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));

    'env_load: for env_file in [".env.local", ".env"] {
        let path = manifest_dir.join(env_file);
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    env_logger::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(llm::GuidanceState::new())
        .invoke_handler(tauri::generate_handler![
            // Simple commands (commands.rs)
            commands::law_areas,
            commands::legal_terms,
            commands::check_topic,
            commands::get_guidance,
            commands::copy_guidance,
            commands::open_external,
            // Pipeline commands (pipeline.rs)
            pipeline::generate_guidance,
            pipeline::explain_term,
            // Settings commands (settings_commands.rs)
            settings_commands::get_endpoint_config,
            settings_commands::set_endpoint,
        ])
        .setup(|_app| {
            log::info!("Counsel Desk starting up");
            log::info!(
                "[STARTUP] Generation endpoint: {}",
                settings_commands::resolve_endpoint()
            );
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("Error running Counsel Desk");
}
