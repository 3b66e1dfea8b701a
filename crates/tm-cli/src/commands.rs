use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use tm_crypto::{checksum, consistent_name};
use tm_store::{MemoryStore, MetadataStore, SizeLimit};
use tm_types::{MetaDigest, RoleName, SignedMeta};

use crate::cli::*;
use crate::load::{load_config, load_dir};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Command::Inspect(args) => cmd_inspect(args, format),
        Command::List(args) => cmd_list(args, cli.config.as_deref(), format),
        Command::Get(args) => cmd_get(args, cli.config.as_deref()),
    }
}

/// What a single metadata file looks like to a store.
#[derive(Debug, Serialize)]
struct FileReport {
    role: RoleName,
    size: usize,
    sha256: String,
    consistent_name: RoleName,
    version: Option<i64>,
    base_role: bool,
}

impl FileReport {
    fn new(role: RoleName, data: &[u8]) -> Self {
        let digest = checksum(data);
        Self {
            consistent_name: consistent_name(&role, digest.as_ref()),
            size: data.len(),
            sha256: digest.to_hex(),
            version: SignedMeta::version_of(data),
            base_role: role.is_base_role(),
            role,
        }
    }
}

#[derive(Debug, Serialize)]
struct Listing {
    location: String,
    files: Vec<RoleName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consistent: Option<Vec<RoleName>>,
}

fn cmd_inspect(args: InspectArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        reports.push(FileReport::new(role_from_stem(path)?, &data));
    }

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    for report in &reports {
        let kind = if report.base_role { ", base role" } else { "" };
        println!("{} ({} bytes{kind})", report.role.as_str().bold(), report.size);
        println!("  sha256:     {}", report.sha256.dimmed());
        println!("  consistent: {}", report.consistent_name.as_str().cyan());
        match report.version {
            Some(version) => println!(
                "  version:    {} (alias {})",
                version.to_string().yellow(),
                report.role.versioned(version).as_str().yellow()
            ),
            None => println!("  version:    {}", "not versioned".dimmed()),
        }
    }
    Ok(())
}

fn cmd_list(args: ListArgs, config: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let mut store = MemoryStore::with_config(load_config(config)?);
    load_dir(&mut store, &args.dir)?;

    let listing = Listing {
        location: store.location(),
        files: store.list_files(),
        consistent: args.consistent.then(|| store.consistent_names()),
    };

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }
    println!("{} {}", "Store:".bold(), listing.location);
    for name in &listing.files {
        println!("  {name}");
    }
    if let Some(consistent) = &listing.consistent {
        println!("{}", "Consistent names:".bold());
        for name in consistent {
            println!("  {}", name.as_str().cyan());
        }
    }
    Ok(())
}

fn cmd_get(args: GetArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let mut store = MemoryStore::with_config(load_config(config)?);
    load_dir(&mut store, &args.dir)?;

    let name = resolve_name(&args.name, args.sha256.as_deref())?;
    let data = store.get_sized(&name, SizeLimit::from(args.size))?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&data)?;
    stdout.flush()?;
    Ok(())
}

/// The name to look up: `name` itself, or its consistent name when a
/// checksum is given.
fn resolve_name(name: &str, sha256: Option<&str>) -> anyhow::Result<RoleName> {
    match sha256 {
        Some(hex) => {
            let digest = MetaDigest::from_hex(hex)
                .with_context(|| format!("invalid --sha256 for {name}"))?;
            Ok(consistent_name(name, digest.as_ref()))
        }
        None => Ok(RoleName::from(name)),
    }
}

fn role_from_stem(path: &Path) -> anyhow::Result<RoleName> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("no role name in {}", path.display()))?;
    Ok(RoleName::from(stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_signed_metadata() {
        let data = br#"{"signed":{"_type":"root","version":3},"signatures":[]}"#;
        let report = FileReport::new(RoleName::from("root"), data);
        assert_eq!(report.version, Some(3));
        assert!(report.base_role);
        assert_eq!(report.size, data.len());
        assert_eq!(report.sha256.len(), 64);
        assert_eq!(
            report.consistent_name.as_str(),
            format!("root.{}", report.sha256)
        );
    }

    #[test]
    fn report_for_raw_blob() {
        let report = FileReport::new(RoleName::from("root"), b"\x00\x01key");
        assert_eq!(report.version, None);
        assert!(!FileReport::new(RoleName::from("targets/releases"), b"{}").base_role);
    }

    #[test]
    fn resolve_name_without_checksum() {
        assert_eq!(resolve_name("root", None).unwrap(), RoleName::from("root"));
    }

    #[test]
    fn resolve_name_pins_checksum() {
        let digest = checksum(b"root bytes");
        let name = resolve_name("root", Some(&digest.to_hex())).unwrap();
        assert_eq!(name, consistent_name("root", digest.as_ref()));
    }

    #[test]
    fn resolve_name_rejects_bad_checksum() {
        let err = resolve_name("root", Some("abcd")).unwrap_err();
        assert!(err.to_string().contains("invalid --sha256"));
        assert!(resolve_name("root", Some("zz")).is_err());
    }

    #[test]
    fn pinned_get_reads_consistent_copy() {
        let data = br#"{"signed":{"version":2}}"#;
        let mut store = MemoryStore::new();
        store.set("root", bytes::Bytes::from_static(data)).unwrap();
        let name = resolve_name("root", Some(&checksum(data).to_hex())).unwrap();
        assert_eq!(&store.get_sized(&name, tm_store::NO_SIZE_LIMIT).unwrap()[..], &data[..]);
    }

    #[test]
    fn role_from_stem_uses_file_name() {
        assert_eq!(
            role_from_stem(Path::new("/tmp/repo/snapshot.json")).unwrap(),
            RoleName::from("snapshot")
        );
    }

    #[test]
    fn listing_omits_consistent_when_not_requested() {
        let listing = Listing {
            location: "memory".into(),
            files: vec![RoleName::from("root")],
            consistent: None,
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["files"][0], "root");
        assert!(json.get("consistent").is_none());
    }
}
