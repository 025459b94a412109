use anyhow::Result;
use clap::Parser;

use entrecamadas_core::tracing_setup::init_tracing;
use entrecamadas_core::{AppConfig, CoreConfig, Cosmos, FileSlot, MessageStore, Narrator};
use entrecamadas_tui::cli::Args;
use entrecamadas_tui::runtime::run_app;
use entrecamadas_tui::speech::SystemSpeech;
use entrecamadas_tui::ui::{self, App};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let core_config = CoreConfig::resolve(args.data_dir.clone());

    // Logging is best effort; the UI works without it
    if let Err(e) = init_tracing(&core_config.log_path()) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let config = args.apply(AppConfig::load_or_default(&core_config.config_path()));
    tracing::info!(
        data_dir = %core_config.data_dir.display(),
        fps = config.fps,
        language = %config.narration_language,
        "starting entrecamadas"
    );

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::terminal::restore();
        eprintln!("\n\n=== PANIC ===");
        eprintln!("{}", panic_info);
        eprintln!("=============\n");
        original_hook(panic_info);
    }));

    let store = MessageStore::open(Box::new(FileSlot::new(&core_config.data_dir)));
    let speech = if args.no_speech {
        SystemSpeech::disabled()
    } else {
        SystemSpeech::detect(config.speech_command.as_deref())
    };
    let narrator = Narrator::with_voice(
        Box::new(speech),
        &config.narration_language,
        config.narration_rate,
    );
    let cosmos = match args.seed {
        Some(seed) => Cosmos::with_seed(seed),
        None => Cosmos::from_entropy(),
    };

    let mut app = App::new(store, narrator, cosmos);
    let mut terminal = ui::terminal::init()?;

    let result = run_app(&mut terminal, &mut app, config.fps).await;

    app.narrator.stop();
    ui::terminal::restore()?;

    if let Err(err) = result {
        tracing::error!("Event loop failed: {}", err);
        eprintln!("Error: {err}");
    }

    Ok(())
}
