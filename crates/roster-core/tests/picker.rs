use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use roster_core::Picker;
use roster_model::{Gender, NO_MATCH_MESSAGE, PickRequest};

const ROSTER_CSV: &str = "\
TAGS RULE,CIVITAI ID,character_tags,sexo,pixiv_tag,styleLora,styleName,outfit_1,outfit_2,outfit_3
naruto uzumaki,urn:air:sdxl:lora:civitai:1234,uzumaki_naruto,boy,NARUTO,civitai:42,ghibli style,orange jumpsuit,sage cloak,
sakura haruno,5678,haruno_sakura,girl,NARUTO,,,red qipao,,
hatsune miku,urn:air:sdxl:lora:civitai:9999,hatsune_miku,girl,VOCALOID,civitai/77,flat style,stage dress,casual hoodie,winter coat
";

fn write_roster(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("roster.csv");
    fs::write(&path, contents).expect("write roster");
    path
}

fn request(seed: u64, gender: Gender, quantity: usize, filter: &str) -> PickRequest {
    PickRequest {
        seed,
        gender,
        quantity,
        filter: filter.to_string(),
    }
}

#[test]
fn same_seed_and_filters_give_identical_records() {
    let dir = TempDir::new().expect("temp dir");
    let picker = Picker::new(write_roster(&dir, ROSTER_CSV));

    for seed in [0, 1, 17, u64::MAX] {
        let req = request(seed, Gender::Any, 3, "");
        let first = picker.pick(&req);
        let second = picker.pick(&req);
        assert_eq!(first, second, "divergent outputs for seed {seed}");
    }
}

#[test]
fn substring_filter_narrows_the_draw() {
    let dir = TempDir::new().expect("temp dir");
    let picker = Picker::new(write_roster(&dir, ROSTER_CSV));

    let record = picker.pick(&request(5, Gender::Any, 1, "MIKU"));
    assert_eq!(record.character_tags, "hatsune_miku");
    assert_eq!(record.civitai_id, "9999");
    assert_eq!(record.item_e, "77");
    assert_eq!(record.item_f, "flat style");
}

#[test]
fn gender_filter_restricts_to_matching_rows() {
    let dir = TempDir::new().expect("temp dir");
    let picker = Picker::new(write_roster(&dir, ROSTER_CSV));

    for seed in 0..20 {
        let record = picker.pick(&request(seed, Gender::Girl, 1, ""));
        assert!(
            record.character_tags == "haruno_sakura" || record.character_tags == "hatsune_miku",
            "unexpected pick {}",
            record.character_tags
        );
    }
}

#[test]
fn gender_filter_without_gender_column_is_a_no_op() {
    let dir = TempDir::new().expect("temp dir");
    let picker = Picker::new(write_roster(
        &dir,
        "TAGS RULE,character_tags,outfit_1\nnaruto,uzumaki_naruto,jumpsuit\n",
    ));

    let record = picker.pick(&request(0, Gender::Girl, 1, ""));
    assert_eq!(record.character_tags, "uzumaki_naruto");
}

#[test]
fn zero_match_filter_returns_the_distinguished_record() {
    let dir = TempDir::new().expect("temp dir");
    let picker = Picker::new(write_roster(&dir, ROSTER_CSV));

    let record = picker.pick(&request(0, Gender::Any, 1, "no such character"));
    assert_eq!(record.tags_rule, NO_MATCH_MESSAGE);
    assert!(record.civitai_id.is_empty());
    assert!(record.outfits.is_empty());
}

#[test]
fn outfit_requests_beyond_the_pool_cover_every_outfit() {
    let dir = TempDir::new().expect("temp dir");
    let picker = Picker::new(write_roster(&dir, ROSTER_CSV));

    let record = picker.pick(&request(9, Gender::Any, 7, "miku"));
    assert_eq!(record.outfits.len(), 7);
    let distinct: BTreeSet<&str> = record.outfits.iter().map(String::as_str).collect();
    assert_eq!(
        distinct,
        BTreeSet::from(["stage dress", "casual hoodie", "winter coat"])
    );
}

#[test]
fn rows_with_blank_outfit_cells_skip_them() {
    let dir = TempDir::new().expect("temp dir");
    let picker = Picker::new(write_roster(&dir, ROSTER_CSV));

    let record = picker.pick(&request(2, Gender::Any, 4, "sakura"));
    assert_eq!(record.outfits, vec!["red qipao"; 4]);
}

#[test]
fn missing_roster_degrades_instead_of_failing() {
    let picker = Picker::new("/nonexistent/roster.csv");

    let record = picker.pick(&request(0, Gender::Any, 1, ""));
    assert!(record.tags_rule.contains("roster file not found"));
    assert!(record.civitai_id.is_empty());
    assert!(record.outfits.is_empty());
}

#[test]
fn try_pick_surfaces_load_errors() {
    let picker = Picker::new("/nonexistent/roster.csv");
    assert!(picker.try_pick(&PickRequest::default()).is_err());
}

#[test]
fn picker_always_reports_state_changed() {
    let picker = Picker::new("/nonexistent/roster.csv");
    assert!(picker.is_changed());
}
