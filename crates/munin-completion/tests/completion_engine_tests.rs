use munin_commands::{Caller, CommandConfig, CommandRegistry, CommandResult, RosterEntry};
use munin_completion::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(name: &str) -> CommandConfig {
        CommandConfig::new(name, "").with_handler(|_| Ok(CommandResult::silent()))
    }

    fn counting_engine(calls: Arc<AtomicUsize>) -> CompletionEngine {
        let registry = CommandRegistry::shared();
        registry.write().register(noop("spawn")).unwrap();
        let counter = calls.clone();
        let cache = SuggestionCache::new("spawnables", NameFilter::default()).with_source(Arc::new(
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                vec![
                    "Troll".to_string(),
                    "Troll(Clone)".to_string(),
                    "$enemy_troll".to_string(),
                    "_TerrainLod".to_string(),
                    "vfx_Explosion".to_string(),
                    "42".to_string(),
                    "x".to_string(),
                    "".to_string(),
                    "Boar".to_string(),
                    "Boar".to_string(),
                ]
            },
        ));
        CompletionEngine::new(registry)
            .with_cache(cache)
            .with_trigger("spawn", TriggerSource::Cache("spawnables".to_string()))
    }

    #[test]
    fn test_cache_filters_external_names() {
        let engine = counting_engine(Arc::new(AtomicUsize::new(0)));
        assert_eq!(engine.suggest("munin spawn "), vec!["Boar", "Troll"]);
    }

    #[test]
    fn test_rebuild_counter() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = counting_engine(calls.clone());

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        engine.suggest("munin spawn ");
        engine.suggest("munin spawn T");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        engine.invalidate();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        engine.suggest("munin ");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        engine.suggest("munin spawn ");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(engine.cache_stats("spawnables").unwrap().rebuilds, 2);
    }

    #[test]
    fn test_registry_changes_are_seen() {
        let registry = CommandRegistry::shared();
        let engine = CompletionEngine::new(registry.clone());
        assert_eq!(engine.suggest("munin "), vec!["help"]);

        registry.write().register_in("Demo", noop("ping")).unwrap();
        assert_eq!(engine.suggest("munin "), vec!["Demo", "help"]);
        assert_eq!(engine.suggest("munin demo "), vec!["ping"]);

        registry.write().unregister_in("demo", "ping");
        assert_eq!(engine.suggest("munin "), vec!["help"]);
        assert!(engine.suggest("munin demo ").is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = ConfigLoader::load_from_string(
            "triggers:\n  - command: Heal\n    source: roster\n",
            ConfigFormat::Yaml,
        )
        .unwrap();
        let roster = vec![RosterEntry::new(Caller::new(1, "Ivar"))];
        let engine = CompletionEngine::from_config(CommandRegistry::shared(), &config)
            .unwrap()
            .with_roster(Arc::new(roster));

        assert_eq!(engine.trigger("heal"), Some(&TriggerSource::Roster));
        assert_eq!(engine.suggest("munin heal "), vec!["Ivar"]);
    }

    #[test]
    fn test_trigger_wins_over_namespace() {
        let registry = CommandRegistry::shared();
        registry.write().register_in("tp", noop("home")).unwrap();
        let roster = vec![RosterEntry::new(Caller::new(1, "Ivar"))];
        let engine = CompletionEngine::new(registry)
            .with_trigger("tp", TriggerSource::Roster)
            .with_roster(Arc::new(roster));

        assert_eq!(engine.suggest("munin tp "), vec!["Ivar"]);
    }

    #[test]
    fn test_config_file() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"triggers": [{{"command": "spawn", "source": "cache:items"}}]}}"#
        )
        .unwrap();
        let config = ConfigLoader::load_from_json(file.path()).unwrap();
        assert_eq!(
            config.triggers[0].parse_source().unwrap(),
            TriggerSource::Cache("items".to_string())
        );
    }
}
