use anyhow::{Context, Result};
use tracing::info_span;

use roster_cli::config::resolve_roster_path;
use roster_core::Picker;
use roster_ingest::load_roster;
use roster_model::{CharacterRecord, PickRequest};

use crate::cli::{OutputArg, PickArgs, SchemaArgs};

pub fn run_pick(args: &PickArgs) -> Result<()> {
    let path = resolve_roster_path(args.roster.as_deref());
    let span = info_span!("pick", roster = %path.display(), seed = args.seed);
    let _guard = span.enter();

    let picker = Picker::new(path);
    let request = PickRequest {
        seed: args.seed,
        gender: args.gender.into(),
        quantity: usize::from(args.count),
        filter: args.filter.clone(),
    };
    let record = picker.pick(&request);

    match args.output {
        OutputArg::Json => {
            let json =
                serde_json::to_string_pretty(&record).context("serialize character record")?;
            println!("{json}");
        }
        OutputArg::Text => print_record(&record),
    }
    Ok(())
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let path = resolve_roster_path(args.roster.as_deref());
    let roster = load_roster(&path).with_context(|| format!("load roster {}", path.display()))?;

    let schema = &roster.schema;
    println!("characters: {}", roster.table.row_count());
    println!("character_tags: {}", schema.character_tags);
    println!("tags_rule: {}", optional_column(schema.tags_rule.as_deref()));
    println!(
        "civitai_id: {}",
        optional_column(schema.civitai_id.as_deref())
    );
    println!("gender: {}", optional_column(schema.gender.as_deref()));
    println!("pixiv_tag: {}", optional_column(schema.pixiv_tag.as_deref()));
    println!("outfit_columns: {}", schema.outfit_columns.join(", "));
    Ok(())
}

fn optional_column(resolved: Option<&str>) -> &str {
    resolved.unwrap_or("(not found)")
}

/// Prints the record in host-contract field order; outfits stay multi-value
/// as repeated lines.
fn print_record(record: &CharacterRecord) {
    println!("tags_rule: {}", record.tags_rule);
    println!("civitai_id: {}", record.civitai_id);
    println!("character_tags: {}", record.character_tags);
    for outfit in &record.outfits {
        println!("outfit: {outfit}");
    }
    println!("pixiv_tag: {}", record.pixiv_tag);
    println!("item_e: {}", record.item_e);
    println!("item_f: {}", record.item_f);
}
