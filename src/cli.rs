//! CLI definitions and command routing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::HostsPaths;
use crate::edit::AddOutcome;
use crate::entry::{Address, HostEntry};
use crate::error::HostsError;
use crate::platform::HostsStore;
use crate::{backup, document, edit, hosts, store};

#[derive(Parser)]
#[command(name = "hostedit")]
#[command(about = "View and edit hosts file mappings")]
pub struct Cli {
    /// Hosts file to edit instead of the system one (no elevation)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Print the resulting file instead of writing it
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Hosts(HostsCmd),

    /// Manage backups taken before each save
    Backup {
        #[command(subcommand)]
        cmd: BackupCmd,
    },

    /// Show or change settings in config.toml
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

/// Commands that read or edit the hosts file.
#[derive(Subcommand)]
pub enum HostsCmd {
    /// List mappings (address, host, state)
    List {
        /// Only enabled mappings
        #[arg(long, conflicts_with = "disabled")]
        enabled: bool,
        /// Only disabled (commented-out) mappings
        #[arg(long)]
        disabled: bool,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Map one or more hosts to an address
    Add {
        address: Address,
        #[arg(required = true)]
        hosts: Vec<String>,
        /// Add the mappings commented out
        #[arg(long)]
        disabled: bool,
    },

    /// Remove every mapping for a host
    Remove {
        host: String,
        /// Only the mapping to this address
        #[arg(long)]
        address: Option<Address>,
    },

    /// Uncomment the mappings for a host
    Enable {
        host: String,
        /// Only the mapping to this address
        #[arg(long)]
        address: Option<Address>,
    },

    /// Comment out the mappings for a host
    Disable {
        host: String,
        /// Only the mapping to this address
        #[arg(long)]
        address: Option<Address>,
    },

    /// Rewrite the file in canonical form (drops non-mapping comments)
    Save,

    /// Re-read the file and report what it contains, without writing
    Reset,

    /// Print the path of the hosts file being edited
    Path,
}

#[derive(Subcommand)]
pub enum BackupCmd {
    /// List backups, oldest first
    List,
    /// Delete old backups
    Prune {
        /// Backups to keep (defaults to backup_keep from config)
        #[arg(long)]
        keep: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Print the effective config
    Show,
    /// Set a key: hosts_file, backup, backup_keep, elevate
    Set { key: String, value: String },
}

/// State shared by the edit commands.
struct Session {
    paths: HostsPaths,
    config: crate::config::Config,
    store: Box<dyn HostsStore>,
    dry_run: bool,
}

impl Session {
    /// Load entries; a missing file reads as empty so `add` can create it.
    fn load_or_empty(&self) -> Result<Vec<HostEntry>> {
        match self.store.read() {
            Ok(text) => Ok(document::parse(&text)),
            Err(HostsError::NotFound { .. }) => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn commit(&self, entries: &[HostEntry]) -> Result<()> {
        if self.dry_run {
            print!("{}", hosts::render_preview(entries)?);
            return Ok(());
        }
        let backup_dir = self.config.backup.then_some(self.paths.backups_dir.as_path());
        if let Some(path) = hosts::save(self.store.as_ref(), entries, backup_dir)? {
            backup::prune(&self.paths.backups_dir, self.config.backup_keep)?;
            log::debug!("backup at {}", path.display());
        }
        Ok(())
    }
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = HostsPaths::default_paths();

    match cli.command {
        Commands::Config { cmd } => cmd_config(&paths, cmd),
        Commands::Backup { cmd } => cmd_backup(&paths, cmd),
        Commands::Hosts(command) => {
            let config = store::load_config(&paths)?;
            let store = crate::platform::default_hosts_store(&config, cli.file);
            let session = Session {
                paths,
                config,
                store,
                dry_run: cli.dry_run,
            };
            cmd_hosts(&session, command)
        }
    }
}

fn state(entry: &HostEntry) -> &'static str {
    if entry.enabled {
        "enabled"
    } else {
        "disabled"
    }
}

fn cmd_hosts(session: &Session, command: HostsCmd) -> Result<()> {
    match command {
        HostsCmd::List {
            enabled,
            disabled,
            json,
        } => {
            let entries: Vec<HostEntry> = hosts::load(session.store.as_ref())?
                .into_iter()
                .filter(|e| !(enabled && !e.enabled) && !(disabled && e.enabled))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for e in &entries {
                    println!("{}\t{}\t{}", e.address, e.host, state(e));
                }
            }
            Ok(())
        }
        HostsCmd::Add {
            address,
            hosts: names,
            disabled,
        } => {
            let mut entries = session.load_or_empty()?;
            let mut report = Vec::new();
            for name in names {
                let entry = HostEntry::new(!disabled, address.clone(), name)?;
                let line = format!("{} {}", entry.address, entry.host);
                match edit::add(&mut entries, entry) {
                    AddOutcome::Added => report.push(format!("Added {line}")),
                    AddOutcome::StateChanged if disabled => {
                        report.push(format!("Disabled existing {line}"))
                    }
                    AddOutcome::StateChanged => report.push(format!("Enabled existing {line}")),
                    AddOutcome::Unchanged => {}
                }
            }
            if report.is_empty() {
                println!("Already present: nothing to do");
                return Ok(());
            }
            session.commit(&entries)?;
            if !session.dry_run {
                for line in report {
                    println!("{line}");
                }
            }
            Ok(())
        }
        HostsCmd::Remove { host, address } => {
            let mut entries = hosts::load(session.store.as_ref())?;
            let removed = edit::remove(&mut entries, &host, address.as_ref());
            if removed == 0 {
                anyhow::bail!("no mapping for host '{host}'");
            }
            session.commit(&entries)?;
            if !session.dry_run {
                println!("Removed {removed} mapping(s) for {host}");
            }
            Ok(())
        }
        HostsCmd::Enable { host, address } => toggle(session, &host, address.as_ref(), true),
        HostsCmd::Disable { host, address } => toggle(session, &host, address.as_ref(), false),
        HostsCmd::Save => {
            let entries = hosts::load(session.store.as_ref())?;
            session.commit(&entries)?;
            if !session.dry_run {
                println!(
                    "Saved {} mapping(s) to {}",
                    entries.len(),
                    session.store.path().display()
                );
            }
            Ok(())
        }
        HostsCmd::Reset => {
            let entries = hosts::load(session.store.as_ref())?;
            let disabled = entries.iter().filter(|e| !e.enabled).count();
            println!(
                "Reloaded {} mapping(s) ({} disabled) from {}",
                entries.len(),
                disabled,
                session.store.path().display()
            );
            Ok(())
        }
        HostsCmd::Path => {
            println!("{}", session.store.path().display());
            Ok(())
        }
    }
}

fn toggle(session: &Session, host: &str, address: Option<&Address>, enabled: bool) -> Result<()> {
    let mut entries = hosts::load(session.store.as_ref())?;
    if edit::count(&entries, host, address) == 0 {
        anyhow::bail!("no mapping for host '{host}'");
    }
    let verb = if enabled { "enabled" } else { "disabled" };
    let changed = edit::set_enabled(&mut entries, host, address, enabled);
    if changed == 0 {
        println!("{host} already {verb}");
        return Ok(());
    }
    session.commit(&entries)?;
    if !session.dry_run {
        println!("{} {changed} mapping(s) for {host}", capitalize(verb));
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn cmd_backup(paths: &HostsPaths, cmd: BackupCmd) -> Result<()> {
    match cmd {
        BackupCmd::List => {
            for path in backup::list(&paths.backups_dir)? {
                println!("{}", path.display());
            }
            Ok(())
        }
        BackupCmd::Prune { keep } => {
            let keep = match keep {
                Some(k) => k,
                None => store::load_config(paths)?.backup_keep,
            };
            let removed = backup::prune(&paths.backups_dir, keep)?;
            println!("Removed {} backup(s)", removed.len());
            Ok(())
        }
    }
}

fn cmd_config(paths: &HostsPaths, cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Show => {
            let config = store::load_config(paths)?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCmd::Set { key, value } => {
            let mut config = store::load_config(paths)?;
            config.set(&key, &value)?;
            store::ensure_dirs(paths)?;
            store::save_config(paths, &config)?;
            println!("Set {key} = {value}");
            Ok(())
        }
    }
}
