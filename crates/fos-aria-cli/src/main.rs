//! fOS ARIA - command line inspector for the role knowledge base

use anyhow::{bail, Context, Result};
use fos_aria::{Config, KnowledgeBase, Severity};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: fos-aria <command> [role]

Commands:
  subroles <role>   Sub-roles of a role, one per line
  selector <role>   Selector matching every element with the role
  role <role>       Role definition as JSON
  validate          Validate the role table
  dump              All resolved sub-roles as JSON
  shortcut          Landmark outline shortcut

Environment:
  FOS_ARIA_TABLE        JSON role table replacing the built-in one
  FOS_ARIA_VALIDATION   off | warn | strict (default: warn)
  FOS_ARIA_SHORTCUT     landmark outline shortcut (default: ctrl+m)
  RUST_LOG              log filter (default: info)";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str);
    let role = args.get(1).map(String::as_str);

    if matches!(command, None | Some("-h" | "--help" | "help")) {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = Config::from_env().context("reading FOS_ARIA_* environment")?;
    let kb = KnowledgeBase::from_config(&config).context("loading role table")?;
    tracing::debug!(
        "fos-aria {} using table {} ({} roles)",
        fos_aria::VERSION,
        kb.table().version,
        kb.table().len()
    );

    match (command, role) {
        (Some("subroles"), Some(role)) => {
            for sub_role in kb.sub_roles(role).iter() {
                println!("{}", sub_role);
            }
        }
        (Some("selector"), Some(role)) => println!("{}", kb.selector(role)),
        (Some("role"), Some(role)) => {
            let def = kb
                .role(role)
                .with_context(|| format!("role {} is not defined", role))?;
            println!("{}", serde_json::to_string_pretty(def)?);
        }
        (Some("validate"), None) => {
            let report = kb.validate();
            for issue in &report.issues {
                println!("{}: {}", issue.severity(), issue);
            }
            println!("{}", report);
            if report.issues.iter().any(|i| i.severity() == Severity::Error) {
                bail!("role table {} has errors", kb.table().version);
            }
        }
        (Some("dump"), None) => {
            let sets: std::collections::BTreeMap<_, _> = kb.hierarchy().iter().collect();
            println!("{}", serde_json::to_string_pretty(&sets)?);
        }
        (Some("shortcut"), None) => println!("{}", config.shortcut),
        _ => bail!("invalid arguments\n\n{}", USAGE),
    }

    Ok(())
}
