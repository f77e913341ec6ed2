use std::path::PathBuf;

use battle_content::ContentFactory;
use battle_core::{BattleSnapshot, EntityId, ItemEffect, SpecialEffectKind};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn shipped_content_loads() {
    let content = ContentFactory::new(data_dir()).load_all().unwrap();

    assert_eq!(content.config.loot_table.len(), 3);
    assert!(content.enemy("kernel_daemon").is_some());
    assert_eq!(
        content.item("health_potion").map(|i| &i.effect),
        Some(&ItemEffect::RestoreHp(50))
    );
    assert_eq!(content.player.hp, content.player.max_hp);
}

#[test]
fn player_progression_comes_from_unlocked_talents() {
    let content = ContentFactory::new(data_dir()).load_all().unwrap();
    let progression = content.player.progression.as_ref().unwrap();

    assert!((progression.damage_bonus("buffer_overflow") - 0.3).abs() < 1e-9);
    assert!((progression.heal_bonus("patch") - 0.2).abs() < 1e-9);
    // cold_boot is defined but locked
    assert!(progression.special_effects("fork_bomb").is_empty());

    let kinds: Vec<_> = progression
        .special_effects("buffer_overflow")
        .iter()
        .filter_map(|e| e.kind())
        .collect();
    assert_eq!(kinds, [SpecialEffectKind::RevealWeakness]);
}

#[test]
fn shipped_content_seeds_a_battle() {
    let content = ContentFactory::new(data_dir()).load_all().unwrap();
    let enemies: Vec<_> = content.enemies.iter().map(|(_, t)| t.clone()).collect();

    let snapshot = BattleSnapshot::start(&content.player, &enemies, 7);

    assert_eq!(snapshot.turn_order.len(), enemies.len() + 1);
    assert_eq!(snapshot.current_turn, EntityId::PLAYER);
    assert!(snapshot.player.progression.is_some());
    assert_eq!(snapshot.enemies[2].abilities.len(), 3);
}
