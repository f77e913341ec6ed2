//! Headless battle driver.
//!
//! Loads content, seeds one battle, plays it with the autopilot and prints
//! the narrative log to stdout. Diagnostics go to stderr through `tracing`.
mod config;
mod session;

use anyhow::{Context, Result};
use battle_content::{BattleContent, ContentFactory};
use battle_core::{
    BattleEngine, BattleEnv, BattleSnapshot, DropIdOracle, EnemyTemplate, Item, PcgRng,
    SequentialDropIds,
};
use config::HeadlessConfig;
use session::{BattleSession, PlayerRecord, SessionObserver};

/// Items the player starts with: (template id, count).
const STARTING_INVENTORY: &[(&str, usize)] = &[("health_potion", 2), ("energy_drink", 1)];

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = HeadlessConfig::from_env();
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(
        seed,
        content_dir = %config.content_dir.display(),
        enemies = ?config.enemies,
        "starting headless battle"
    );

    let content = ContentFactory::new(&config.content_dir)
        .load_all()
        .context("Failed to load battle content")?;
    let enemies = resolve_enemies(&content, &config.enemies)?;

    let drop_ids = SequentialDropIds::new();
    let observer = SessionObserver::new(starting_inventory(&content, &drop_ids)?);
    let engine = BattleEngine::new(BattleEnv::new(
        &content.config,
        &PcgRng,
        &drop_ids,
        &observer,
    ));

    let mut record = PlayerRecord::new(content.player.clone());
    let snapshot = BattleSnapshot::start(&record.profile, &enemies, seed);
    let report = BattleSession::new(engine, &observer, seed, config.max_actions).run(snapshot)?;
    record.settle(&report);

    for line in &report.log {
        println!("{line}");
    }

    tracing::info!(
        outcome = %report.outcome,
        experience = record.experience,
        hp = record.profile.hp,
        energy = record.profile.energy,
        inventory = observer.inventory().len(),
        notifications = observer.reports_received(),
        "battle settled"
    );

    if config.report_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn resolve_enemies(content: &BattleContent, ids: &[String]) -> Result<Vec<EnemyTemplate>> {
    ids.iter()
        .map(|id| {
            content
                .enemy(id)
                .cloned()
                .with_context(|| format!("Unknown enemy '{id}'"))
        })
        .collect()
}

fn starting_inventory(content: &BattleContent, drop_ids: &dyn DropIdOracle) -> Result<Vec<Item>> {
    let mut inventory = Vec::new();
    for &(template_id, count) in STARTING_INVENTORY {
        let template = content
            .item(template_id)
            .with_context(|| format!("Unknown item '{template_id}'"))?;
        for _ in 0..count {
            inventory.push(template.instantiate(drop_ids.next_drop_id(&template.id)));
        }
    }
    Ok(inventory)
}
