use munin_commands::*;
use munin_permissions::StaticEnvironment;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: u64 = 1;
    const ADMIN: u64 = 2;
    const PLAYER: u64 = 3;

    fn environment() -> Arc<StaticEnvironment> {
        Arc::new(
            StaticEnvironment::new()
                .with_host(CallerId(HOST))
                .with_admin(CallerId(ADMIN)),
        )
    }

    fn create_test_dispatcher() -> Dispatcher {
        let registry = CommandRegistry::shared();
        {
            let mut registry = registry.write();
            registry
                .register(
                    CommandConfig::new("spawn", "Spawn a prefab")
                        .with_usage("spawn <prefab> [count]")
                        .with_permission(PermissionLevel::Admin)
                        .with_example("spawn Troll 2")
                        .with_handler(|args| {
                            let prefab = args.get_string(0, "");
                            let count = args.get_int(1, 1);
                            Ok(CommandResult::success(format!("Spawned {} x{}", prefab, count)))
                        }),
                )
                .unwrap();
            registry
                .register(
                    CommandConfig::new("pos", "Show your position")
                        .with_handler(|args| match args.caller() {
                            Some(caller) => Ok(CommandResult::info(format!("{} is at 0,0,0", caller.name))),
                            None => Ok(CommandResult::error("No caller")),
                        }),
                )
                .unwrap();
            registry
                .register(
                    CommandConfig::new("shutdown", "Stop the server")
                        .with_permission(PermissionLevel::Host)
                        .with_handler(|_| Ok(CommandResult::success("Stopping"))),
                )
                .unwrap();
            registry
                .register(
                    CommandConfig::new("debugdump", "Internal diagnostics")
                        .with_hidden(true)
                        .with_handler(|_| Ok(CommandResult::silent())),
                )
                .unwrap();
            registry
                .register_in(
                    "BetterRaids",
                    CommandConfig::new("start", "Start a raid")
                        .with_handler(|args| Ok(CommandResult::success(format!("Raid {}", args.get_rest(0))))),
                )
                .unwrap();
            registry
                .register_in(
                    "BetterRaids",
                    CommandConfig::new("reset", "Reset raid timers")
                        .with_permission(PermissionLevel::Admin)
                        .with_handler(|_| Ok(CommandResult::success("Reset"))),
                )
                .unwrap();
        }
        Dispatcher::new(registry, environment())
    }

    #[test]
    fn test_admin_spawn() {
        let dispatcher = create_test_dispatcher();
        let admin = Caller::new(ADMIN, "Admin");
        let result = dispatcher.execute("spawn Troll 2", Some(&admin));
        assert_eq!(result, CommandResult::success("Spawned Troll x2"));
    }

    #[test]
    fn test_player_denied() {
        let dispatcher = create_test_dispatcher();
        let player = Caller::new(PLAYER, "Player");
        let result = dispatcher.execute("spawn Troll", Some(&player));
        assert_eq!(result.kind(), ResultKind::NoPermission);
        assert!(result.message().unwrap().contains("spawn"));
    }

    #[test]
    fn test_host_satisfies_every_level() {
        let dispatcher = create_test_dispatcher();
        let host = Caller::new(HOST, "Host");
        assert!(dispatcher.execute("spawn Troll", Some(&host)).is_success());
        assert!(dispatcher.execute("shutdown", Some(&host)).is_success());

        let admin = Caller::new(ADMIN, "Admin");
        assert_eq!(
            dispatcher.execute("shutdown", Some(&admin)).kind(),
            ResultKind::NoPermission
        );
    }

    #[test]
    fn test_caller_passed_to_handler() {
        let dispatcher = create_test_dispatcher();
        let player = Caller::new(PLAYER, "Freydis");
        let result = dispatcher.execute("pos", Some(&player));
        assert_eq!(result, CommandResult::info("Freydis is at 0,0,0"));
    }

    #[test]
    fn test_namespace_dispatch() {
        let dispatcher = create_test_dispatcher();
        let result = dispatcher.execute("betterraids START the   swamp", None);
        assert_eq!(result, CommandResult::success("Raid the swamp"));

        let player = Caller::new(PLAYER, "Player");
        assert_eq!(
            dispatcher.execute("BetterRaids reset", Some(&player)).kind(),
            ResultKind::NoPermission
        );
    }

    #[test]
    fn test_help_hides_hidden_and_forbidden() {
        let dispatcher = create_test_dispatcher();
        let player = Caller::new(PLAYER, "Player");
        let text = dispatcher
            .execute("help", Some(&player))
            .message()
            .unwrap()
            .to_string();

        assert!(text.contains("pos"));
        assert!(!text.contains("spawn"));
        assert!(!text.contains("shutdown"));
        assert!(!text.contains("debugdump"));
        assert!(text.contains("BetterRaids (1 command)"));
    }

    #[test]
    fn test_help_for_host_lists_everything_visible() {
        let dispatcher = create_test_dispatcher();
        let host = Caller::new(HOST, "Host");
        let text = dispatcher
            .execute("help", Some(&host))
            .message()
            .unwrap()
            .to_string();

        let pos = text.find("  pos").unwrap();
        let shutdown = text.find("  shutdown").unwrap();
        let spawn = text.find("  spawn").unwrap();
        assert!(pos < shutdown && shutdown < spawn);
        assert!(text.contains("BetterRaids (2 commands)"));
        assert!(!text.contains("debugdump"));
    }

    #[test]
    fn test_help_detail_for_hidden_command() {
        let dispatcher = create_test_dispatcher();
        let result = dispatcher.execute("help debugdump", None);
        assert_eq!(result.kind(), ResultKind::Info);
    }

    #[test]
    fn test_help_command_detail() {
        let dispatcher = create_test_dispatcher();
        let text = dispatcher
            .execute("help spawn", None)
            .message()
            .unwrap()
            .to_string();
        assert!(text.contains("Spawn a prefab"));
        assert!(text.contains("Usage: munin spawn <prefab> [count]"));
        assert!(text.contains("Permission: admin"));
        assert!(text.contains("munin spawn Troll 2"));
    }

    #[test]
    fn test_root_command_from_config() {
        let config = DispatcherConfig {
            root_command: "odin".to_string(),
            ..Default::default()
        };
        let dispatcher = create_test_dispatcher().with_config(config);
        let result = dispatcher.execute("", None);
        assert!(result.message().unwrap().contains("'odin help'"));
    }

    #[test]
    fn test_handler_runs_without_registry_lock() {
        let registry = CommandRegistry::shared();
        let inner = registry.clone();
        registry
            .write()
            .register(CommandConfig::new("selfmod", "Registers another command").with_handler(
                move |_| {
                    inner.write().register(
                        CommandConfig::new("late", "").with_handler(|_| Ok(CommandResult::success("late"))),
                    )?;
                    Ok(CommandResult::success("registered"))
                },
            ))
            .unwrap();

        let dispatcher = Dispatcher::new(registry, environment());
        assert!(dispatcher.execute("selfmod", None).is_success());
        assert_eq!(dispatcher.execute("late", None), CommandResult::success("late"));
    }

    #[test]
    fn test_unregister_takes_effect() {
        let dispatcher = create_test_dispatcher();
        dispatcher.registry().write().unregister("pos");
        assert_eq!(dispatcher.execute("pos", None).kind(), ResultKind::NotFound);
    }

    #[test]
    fn test_help_word_beats_commands_named_help() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = CommandRegistry::shared();
        {
            let mut registry = registry.write();
            let counter = calls.clone();
            registry
                .register(CommandConfig::new("help", "Shadowed").with_handler(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(CommandResult::success("builtin help ran"))
                }))
                .unwrap();
            let counter = calls.clone();
            registry
                .register_in(
                    "Help",
                    CommandConfig::new("x", "Shadowed too").with_handler(move |_| {
                        counter.fetch_add(1, Ordering::SeqCst);
                        Ok(CommandResult::success("namespaced x ran"))
                    }),
                )
                .unwrap();
            registry
                .register(CommandConfig::new("pos", "Show your position").with_handler(|_| Ok(CommandResult::silent())))
                .unwrap();
        }
        let dispatcher = Dispatcher::new(registry, environment());

        let result = dispatcher.execute("HELP", None);
        assert_eq!(result.kind(), ResultKind::Info);
        let text = result.message().unwrap();
        assert!(text.starts_with("Commands:"));
        assert!(text.contains("  pos - Show your position"));
        assert!(!text.contains("Shadowed"));
        assert!(!text.contains("Help ("));

        let result = dispatcher.execute("help x", None);
        assert!(!result.is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_panicking_handler_is_contained() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let registry = CommandRegistry::shared();
        registry
            .write()
            .register(CommandConfig::new("crash", "").with_handler(move |args| {
                counter.fetch_add(1, Ordering::SeqCst);
                let values: Vec<i32> = Vec::new();
                Ok(CommandResult::success(values[args.len()].to_string()))
            }))
            .unwrap();

        let dispatcher = Dispatcher::new(registry, environment());
        let result = dispatcher.execute("crash", None);
        assert_eq!(result.kind(), ResultKind::Error);
        assert!(result.message().unwrap().starts_with("Command failed: "));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(dispatcher.execute("crash", None).kind(), ResultKind::Error);
    }

    #[test]
    fn test_formatted_output_uses_theme() {
        let dispatcher = create_test_dispatcher();
        let formatted = dispatcher.execute_formatted("nothing", None).unwrap();
        let theme = Theme::default();
        assert!(formatted.starts_with(&format!("<color={}>", theme.warning)));
        assert!(formatted.ends_with("</color>"));
    }
}
