//! Demo host
//!
//! A small in-memory "server" with four connected players, a list of
//! spawnable prefabs and a handful of built-in and mod commands. It stands
//! in for the game host the framework is normally embedded in.

use std::sync::Arc;

use anyhow::bail;
use munin_commands::{
    Caller, CallerEnvironment, CallerId, CommandArgs, CommandConfig, CommandRegistry,
    CommandResult, PermissionLevel, Roster, RosterEntry, TableData,
};
use munin_completion::{TriggerConfig, TriggerSource};
use munin_permissions::StaticEnvironment;

pub const SPAWNABLES: &str = "spawnables";
pub const MOD_NAMESPACE: &str = "Demo";

pub const HOST_ID: u64 = 1;
pub const ADMIN_ID: u64 = 2;

pub fn roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new(Caller::new(HOST_ID, "Odin")),
        RosterEntry::new(Caller::new(ADMIN_ID, "Thor")),
        RosterEntry::new(Caller::new(3, "Loki")),
        RosterEntry::new(Caller::new(4, "Freya")),
    ]
}

pub fn environment() -> StaticEnvironment {
    StaticEnvironment::new()
        .with_host(CallerId(HOST_ID))
        .with_admin(CallerId(ADMIN_ID))
}

/// Raw prefab names as the host would report them, junk included
pub fn spawnable_names() -> Vec<String> {
    [
        "Troll",
        "Boar",
        "Deer",
        "Greydwarf",
        "Skeleton",
        "Troll(Clone)",
        "$enemy_troll",
        "_TerrainCompiler",
        "vfx_Explosion",
        "sfx_arrow_hit",
        "404",
        "X",
        "Boar",
        "SwordIron",
        "ShieldWood",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

pub fn default_triggers() -> Vec<TriggerConfig> {
    let spawnables = TriggerSource::Cache(SPAWNABLES.to_string());
    vec![
        TriggerConfig::new("spawn", &spawnables),
        TriggerConfig::new("heal", &TriggerSource::Roster),
        TriggerConfig::new("tp", &TriggerSource::Roster),
    ]
}

fn role(environment: &dyn CallerEnvironment, caller: &Caller) -> &'static str {
    if environment.is_host(caller) {
        "host"
    } else if environment.is_admin(caller) {
        "admin"
    } else {
        "player"
    }
}

fn require_caller(args: &CommandArgs) -> anyhow::Result<&Caller> {
    match args.caller() {
        Some(caller) => Ok(caller),
        None => bail!("this command must be run by a player"),
    }
}

/// Register the demo commands; returns how many were registered
pub fn register_commands(
    registry: &mut CommandRegistry,
    roster: Arc<Vec<RosterEntry>>,
    environment: Arc<StaticEnvironment>,
) -> munin_commands::Result<usize> {
    let players_roster = Arc::clone(&roster);
    let heal_roster = Arc::clone(&roster);
    let tp_roster = Arc::clone(&roster);
    let dump_roster = roster;

    let builtins = vec![
        CommandConfig::new("pos", "Show your position")
            .with_handler(|args| {
                let caller = require_caller(args)?;
                Ok(CommandResult::info(format!(
                    "{} is at (0.0, 32.0, 0.0)",
                    caller.name
                )))
            }),
        CommandConfig::new("players", "List connected players").with_handler(move |_| {
            let mut table = TableData::new(["Name", "Id", "Role"]);
            for entry in players_roster.active_callers() {
                table.push_row([
                    entry.name.clone(),
                    entry.caller.id.to_string(),
                    role(environment.as_ref(), &entry.caller).to_string(),
                ]);
            }
            Ok(CommandResult::table(table))
        }),
        CommandConfig::new("spawn", "Spawn a prefab near you")
            .with_usage("spawn <prefab> [count] [--level=N]")
            .with_permission(PermissionLevel::Admin)
            .with_example("spawn Troll")
            .with_example("spawn Boar 5 --level=2")
            .with_handler(|args| {
                if !args.has_required(1) {
                    return Ok(CommandResult::error("Usage: spawn <prefab> [count] [--level=N]"));
                }
                let prefab = args.get_string(0, "");
                let count = args.get_int(1, 1);
                if !(1..=50).contains(&count) {
                    return Ok(CommandResult::error("Count must be between 1 and 50"));
                }
                let level = args.get_named_int("level", 1).max(1);
                Ok(CommandResult::success(format!(
                    "Spawned {} x {} (level {})",
                    count, prefab, level
                )))
            }),
        CommandConfig::new("heal", "Restore a player's health")
            .with_usage("heal <player>")
            .with_permission(PermissionLevel::Admin)
            .with_handler(move |args| match args.resolve_player(0, &*heal_roster) {
                Some(entry) => Ok(CommandResult::success(format!("Healed {}", entry.name))),
                None => Ok(CommandResult::error(format!(
                    "No player matching '{}'",
                    args.get_string(0, "")
                ))),
            }),
        CommandConfig::new("tp", "Teleport to a player")
            .with_usage("tp <player>")
            .with_permission(PermissionLevel::Admin)
            .with_handler(move |args| {
                let caller = require_caller(args)?;
                match args.resolve_player(0, &*tp_roster) {
                    Some(entry) if entry.caller == *caller => {
                        Ok(CommandResult::info("You are already there"))
                    }
                    Some(entry) => Ok(CommandResult::success(format!(
                        "Teleported {} to {}",
                        caller.name, entry.name
                    ))),
                    None => Ok(CommandResult::error(format!(
                        "No player matching '{}'",
                        args.get_string(0, "")
                    ))),
                }
            }),
        CommandConfig::new("say", "Broadcast a message")
            .with_usage("say <message>")
            .with_handler(|args| {
                let message = args.get_rest(0);
                if message.is_empty() {
                    return Ok(CommandResult::error("Nothing to say"));
                }
                let who = args.caller().map(|c| c.name.as_str()).unwrap_or("Server");
                Ok(CommandResult::info(format!("{}: {}", who, message)))
            }),
        CommandConfig::new("shutdown", "Stop the server")
            .with_permission(PermissionLevel::Host)
            .with_handler(|_| Ok(CommandResult::success("Server stopping"))),
        CommandConfig::new("debugdump", "Dump host state")
            .with_hidden(true)
            .with_permission(PermissionLevel::Admin)
            .with_handler(move |_| {
                Ok(CommandResult::info(format!(
                    "players={} prefabs={}",
                    dump_roster.len(),
                    spawnable_names().len()
                )))
            }),
    ];

    let mod_commands = vec![
        CommandConfig::new("ping", "Reply with pong")
            .with_handler(|_| Ok(CommandResult::success("pong"))),
        CommandConfig::new("echo", "Show how arguments were parsed")
            .with_usage("echo [args...]")
            .with_example("echo a \"b c\" --mode=fast -v")
            .with_handler(|args| {
                let mut table = TableData::new(["Kind", "Key", "Value"]);
                for (index, value) in args.positional().iter().enumerate() {
                    table.push_row(["positional".to_string(), index.to_string(), value.clone()]);
                }
                for (key, value) in args.named() {
                    table.push_row(["named".to_string(), key.clone(), value.clone()]);
                }
                for flag in args.flags() {
                    table.push_row(["flag".to_string(), flag.clone(), String::new()]);
                }
                if table.data_rows().is_empty() {
                    return Ok(CommandResult::info("No arguments"));
                }
                Ok(CommandResult::table(table))
            }),
        CommandConfig::new("fail", "Fail on purpose")
            .with_handler(|_| bail!("the demo failed on purpose")),
    ];

    let mut count = registry.register_many(builtins)?;
    count += registry.register_many_in(MOD_NAMESPACE, mod_commands)?;
    Ok(count)
}
