mod cli;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use gradlab_engine::config::CONFIG_FILE_NAME;
use gradlab_engine::logging::{LoggingConfig, init_logging};
use gradlab_engine::preset::preset_by_name;
use gradlab_engine::{DescriptionStore, EngineConfig, Exporter, GradientDescription, generate_css_code};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    let args = cli::parse();

    let config_path = args.config.clone().unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let loaded = EngineConfig::try_load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let defaulted = loaded.is_none();
    let config = loaded.unwrap_or_default();
    init_logging(LoggingConfig::resolve(args.log_level.as_deref(), &config.logging));
    if defaulted {
        log::info!("no config at {}, using defaults", config_path.display());
    } else {
        log::debug!("loaded config from {}", config_path.display());
    }

    let mut store = DescriptionStore::new();

    if args.list_presets {
        for (i, preset) in store.presets().iter().enumerate() {
            println!("{i:>2}  {}", preset.name);
        }
        return Ok(());
    }

    if let Some(name) = &args.preset {
        let Some((index, _)) = preset_by_name(name) else {
            bail!("unknown preset {name:?} (see --list-presets)");
        };
        store.apply_preset(index);
    } else if let Some(path) = &args.file {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let loaded = GradientDescription::from_toml_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        store.replace(|d| *d = loaded);
    }

    if args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        store.randomize(&mut rng);
    }

    match store.active_preset().and_then(|i| store.presets().get(i)) {
        Some(preset) => log::info!("preset: {}", preset.name),
        None => log::info!("custom gradient"),
    }

    println!("{}", generate_css_code(store.current()));

    if args.png {
        let exporter = Exporter::new(config.render.clone());
        let Some(path) = exporter.export(store.current().clone()) else {
            bail!("PNG export failed (see log)");
        };
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}
