//! Lada CLI - Command-line tool for Sims 1 neighborhood inspection.
//!
//! This is the main entry point for the Lada command-line application.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use memmap2::Mmap;
use serde_json::json;

use lada::prelude::*;

/// Lada - Sims 1 neighborhood inspection and compatibility ranking
#[derive(Parser)]
#[command(name = "lada")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List raw chunks of an IFF file
    Chunks {
        /// Path to the Neighborhood.iff file
        #[arg(short = 'n', long, env = "NEIGHBORHOOD_IFF")]
        hood: PathBuf,
    },

    /// List sims with person data
    Sims {
        /// Path to the Neighborhood.iff file
        #[arg(short = 'n', long, env = "NEIGHBORHOOD_IFF")]
        hood: PathBuf,

        /// Emit JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// List families
    Families {
        /// Path to the Neighborhood.iff file
        #[arg(short = 'n', long, env = "NEIGHBORHOOD_IFF")]
        hood: PathBuf,

        /// Emit JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Rank all sims by compatibility with one sim
    Compat {
        /// Path to the Neighborhood.iff file
        #[arg(short = 'n', long, env = "NEIGHBORHOOD_IFF")]
        hood: PathBuf,

        /// Neighbor id of the sim to rank against
        #[arg(short, long)]
        sim: u16,

        /// Emit JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chunks { hood } => cmd_chunks(&hood),
        Commands::Sims { hood, json } => cmd_sims(&hood, json),
        Commands::Families { hood, json } => cmd_families(&hood, json),
        Commands::Compat { hood, sim, json } => cmd_compat(&hood, sim, json),
    }
}

/// Memory-map the neighborhood file; the decoders want one immutable buffer.
fn map_file(path: &PathBuf) -> Result<Mmap> {
    let file =
        fs::File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mmap =
        unsafe { Mmap::map(&file) }.with_context(|| format!("Failed to map {}", path.display()))?;
    Ok(mmap)
}

fn load_neighborhood(path: &PathBuf) -> Result<(Mmap, Neighborhood)> {
    let mmap = map_file(path)?;
    let hood = Neighborhood::parse(&mmap).context("Failed to parse neighborhood")?;
    Ok((mmap, hood))
}

/// Sims that belong in user-facing listings: they carry person data and
/// are not in the default family (chunk id 0), which holds NPC templates
/// like the maid and the repairman.
fn listable(hood: &Neighborhood) -> impl Iterator<Item = &Sim> {
    hood.sims.iter().filter(move |sim| {
        sim.has_person_data()
            && hood
                .family_of(sim)
                .is_some_and(|family| family.chunk_id != 0)
    })
}

fn format_guid(guid: u32) -> String {
    format!("0x{guid:08X}")
}

fn sim_json(hood: &Neighborhood, sim: &Sim) -> serde_json::Value {
    let family = hood.family_of(sim);
    let person = sim.person.as_ref();
    json!({
        "id": sim.neighbor_id,
        "guid": format_guid(sim.guid),
        "name": sim.name,
        "family_name": family.map(|f| f.name.as_str()).unwrap_or(""),
        "family_id": family.map(|f| f.chunk_id).unwrap_or(0),
        "house_number": family.map(|f| f.house_number).unwrap_or(0),
        "age": person.map(|p| p.age().to_string()),
        "gender": person.map(|p| p.gender.to_string()),
        "personality": person.map(|p| &p.personality),
        "interests": person.map(|p| &p.interests),
    })
}

fn cmd_chunks(path: &PathBuf) -> Result<()> {
    let mmap = map_file(path)?;
    let iff = IffFile::parse(&mmap).context("Failed to parse IFF container")?;

    let mut count = 0;
    for chunk in iff.chunks() {
        let chunk = chunk?;
        println!(
            "{:>8}  {}  id={:<5} {:>8} bytes  {}",
            chunk.offset,
            chunk.tag(),
            chunk.id,
            chunk.payload.len(),
            chunk.label
        );
        count += 1;
    }

    println!("\nTotal: {count} chunks");
    Ok(())
}

fn cmd_sims(path: &PathBuf, as_json: bool) -> Result<()> {
    let (_mmap, hood) = load_neighborhood(path)?;

    if as_json {
        let sims: Vec<_> = listable(&hood).map(|sim| sim_json(&hood, sim)).collect();
        println!("{}", serde_json::to_string_pretty(&json!({ "sims": sims }))?);
        return Ok(());
    }

    for sim in listable(&hood) {
        let Some(person) = sim.person.as_ref() else {
            continue;
        };
        let family = hood.family_of(sim).map(|f| f.name.as_str()).unwrap_or("-");
        println!(
            "{:>4}  {:<24} {:<12} {:<6} {:<6} zodiac={}",
            sim.neighbor_id,
            sim.name,
            family,
            person.age(),
            person.gender,
            person.zodiac
        );
    }

    Ok(())
}

fn cmd_families(path: &PathBuf, as_json: bool) -> Result<()> {
    let (_mmap, hood) = load_neighborhood(path)?;

    if as_json {
        let families: Vec<_> = hood
            .families
            .iter()
            .filter(|family| family.chunk_id != 0)
            .map(|family| {
                json!({
                    "id": family.chunk_id,
                    "name": family.name,
                    "house_number": family.house_number,
                    "budget": family.budget,
                    "member_guids": family.member_guids.iter().copied()
                        .map(format_guid).collect::<Vec<_>>(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "families": families }))?
        );
        return Ok(());
    }

    for family in hood.families.iter().filter(|f| f.chunk_id != 0) {
        let house = if family.is_placed() {
            format!("house {}", family.house_number)
        } else {
            "unplaced".to_string()
        };
        println!(
            "{:>4}  {:<16} {:<10} ${:<8} {} members",
            family.chunk_id,
            family.name,
            house,
            family.budget,
            family.member_guids.len()
        );
    }

    Ok(())
}

fn cmd_compat(path: &PathBuf, sim_id: u16, as_json: bool) -> Result<()> {
    let (_mmap, hood) = load_neighborhood(path)?;

    let target = hood
        .sim(sim_id)
        .with_context(|| format!("No sim with id {sim_id}"))?;
    anyhow::ensure!(
        target.has_person_data(),
        "Sim {} has no person data and cannot be ranked",
        sim_id
    );

    let others: Vec<Sim> = listable(&hood).cloned().collect();
    let rankings = rank_against(target, &others);

    if as_json {
        let entries: Vec<_> = rankings
            .iter()
            .map(|entry| {
                json!({
                    "sim": sim_json(&hood, entry.sim),
                    "score": entry.score,
                    "common_interests": entry.common_interests,
                    "risky_topics": entry.risky_topics,
                    "relationship_daily": entry.daily,
                    "relationship_lifetime": entry.lifetime,
                    "is_friend": entry.is_friend,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "sim_id": sim_id,
                "rankings": entries,
            }))?
        );
        return Ok(());
    }

    println!("Compatibility for {} (id {})\n", target.name, sim_id);
    for entry in &rankings {
        let friend = if entry.is_friend { "friend" } else { "" };
        println!(
            "{:>5}  {:<24} common: {:<32} risky: {:<32} {}",
            entry.score,
            entry.sim.name,
            join_topics(&entry.common_interests),
            join_topics(&entry.risky_topics),
            friend
        );
    }

    Ok(())
}

fn join_topics(topics: &[Topic]) -> String {
    topics
        .iter()
        .map(|topic| topic.name())
        .collect::<Vec<_>>()
        .join(", ")
}
