// End-to-end properties of the completion engine

use munin_commands::{CommandConfig, CommandRegistry, CommandResult};
use munin_completion::{CompletionEngine, Invalidate, NameFilter, SuggestionCache, TriggerSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn noop(name: &str) -> CommandConfig {
    CommandConfig::new(name, "").with_handler(|_| Ok(CommandResult::silent()))
}

#[test]
fn first_level_is_builtins_help_and_namespaces() {
    let registry = CommandRegistry::shared();
    {
        let mut registry = registry.write();
        registry.register(noop("spawn")).unwrap();
        registry.register(noop("Pos")).unwrap();
        registry.register_in("BetterRaids", noop("start")).unwrap();
    }
    let engine = CompletionEngine::new(registry);
    assert_eq!(engine.suggest("munin "), vec!["BetterRaids", "help", "Pos", "spawn"]);
    assert_eq!(engine.suggest("munin s"), engine.suggest("munin "));
}

#[test]
fn deeper_positions_are_empty() {
    let registry = CommandRegistry::shared();
    registry.write().register_in("demo", noop("ping")).unwrap();
    let engine = CompletionEngine::new(registry);
    assert_eq!(engine.suggest("munin demo "), vec!["ping"]);
    assert!(engine.suggest("munin demo ping ").is_empty());
    assert!(engine.suggest("munin unknown ").is_empty());
}

#[test]
fn cache_rebuilds_exactly_once_per_invalidation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let cache = SuggestionCache::new("spawnables", NameFilter::default()).with_source(Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        vec!["Troll".to_string(), "Boar".to_string()]
    }));
    let engine = CompletionEngine::new(CommandRegistry::shared())
        .with_cache(cache)
        .with_trigger("spawn", TriggerSource::Cache("spawnables".to_string()));

    for _ in 0..3 {
        assert_eq!(engine.suggest("munin spawn "), vec!["Boar", "Troll"]);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    engine.invalidate();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    for _ in 0..3 {
        engine.suggest("munin spawn B");
    }
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    engine.invalidate();
    engine.invalidate();
    engine.suggest("munin spawn ");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
