//! Reference catalogue loading.
//!
//! The game's reference data ships as one SQLite file per catalogue
//! (weapons, spells, each wearable family, races, classes, backgrounds,
//! feats, abilities). Everything is read once at startup into immutable
//! snapshots; handlers serve from memory. A missing database file
//! degrades to an empty catalogue with a warning instead of failing
//! startup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sqlx::{Row, SqlitePool};

use bg3companion_domain::catalog::{default_roles, default_skills};
use bg3companion_domain::{
    infer_school, Ability, AbilityCheck, AbilitySave, AbilitySkill, AbilityUse, Background,
    BackgroundCharacter, BackgroundNote, BackgroundSkill, CharacterClass, ClassProgressionEntry,
    ClassSpellList, EquipmentCategory, EquipmentItem, EquipmentLocation, EquipmentSpecial, Feat,
    FeatNote, FeatOption, Race, RaceFeature, Spell, SpellProperty, Subclass, SubclassFeature,
    Subrace, SubraceFeature, Weapon, WeaponAbility, WeaponAction, WeaponDamage, WeaponLocation,
    WeaponNote,
};

use crate::infrastructure::ports::RepoError;

/// The wearable-equipment database files and their categories.
const EQUIPMENT_FILES: [(&str, EquipmentCategory); 9] = [
    ("bg3_armours.db", EquipmentCategory::Armour),
    ("bg3_rings.db", EquipmentCategory::Ring),
    ("bg3_amulets.db", EquipmentCategory::Amulet),
    ("bg3_cloaks.db", EquipmentCategory::Cloak),
    ("bg3_clothing.db", EquipmentCategory::Clothing),
    ("bg3_footwears.db", EquipmentCategory::Footwear),
    ("bg3_handwears.db", EquipmentCategory::Handwear),
    ("bg3_headwears.db", EquipmentCategory::Headwear),
    ("bg3_shields.db", EquipmentCategory::Shield),
];

/// Immutable snapshot of every reference catalogue.
pub struct ReferenceData {
    pub weapons: Vec<Weapon>,
    pub spells: Vec<Spell>,
    pub equipment: Vec<EquipmentItem>,
    pub races: Vec<Race>,
    pub classes: Vec<CharacterClass>,
    pub backgrounds: Vec<Background>,
    pub feats: Vec<Feat>,
    pub abilities: Vec<Ability>,
    pub skills: Vec<String>,
    pub roles: Vec<String>,
}

impl ReferenceData {
    /// Load every catalogue from `data_dir`.
    pub async fn load(data_dir: &Path) -> Self {
        let weapons = load_catalogue(data_dir, "bg3_weapons.db", load_weapons).await;
        let spells = load_catalogue(data_dir, "bg3_spells.db", load_spells).await;
        let races = load_catalogue(data_dir, "bg3_races.db", load_races).await;
        let classes = load_catalogue(data_dir, "bg3_classes.db", load_classes).await;
        let backgrounds = load_catalogue(data_dir, "bg3_backgrounds.db", load_backgrounds).await;
        let feats = load_catalogue(data_dir, "bg3_feats.db", load_feats).await;
        let abilities = load_catalogue(data_dir, "bg3_abilities.db", load_abilities).await;

        let mut equipment = Vec::new();
        for (file, category) in EQUIPMENT_FILES {
            let mut items = match open(data_dir, file).await {
                Some(pool) => match load_equipment(&pool, category).await {
                    Ok(items) => items,
                    Err(e) => {
                        tracing::warn!("Failed to load {file}: {e}");
                        Vec::new()
                    }
                },
                None => Vec::new(),
            };
            equipment.append(&mut items);
        }

        tracing::info!(
            weapons = weapons.len(),
            spells = spells.len(),
            equipment = equipment.len(),
            races = races.len(),
            classes = classes.len(),
            "Reference catalogues loaded"
        );

        Self {
            weapons,
            spells,
            equipment,
            races,
            classes,
            backgrounds,
            feats,
            abilities,
            skills: default_skills(),
            roles: default_roles(),
        }
    }

    /// Wearables of one category, in load order.
    pub fn equipment_in(&self, category: EquipmentCategory) -> Vec<&EquipmentItem> {
        self.equipment
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }
}

async fn open(data_dir: &Path, file: &str) -> Option<SqlitePool> {
    let path: PathBuf = data_dir.join(file);
    if !path.exists() {
        tracing::warn!("Reference database {} not found; serving empty catalogue", path.display());
        return None;
    }
    match SqlitePool::connect(&format!("sqlite:{}?mode=ro", path.to_string_lossy())).await {
        Ok(pool) => Some(pool),
        Err(e) => {
            tracing::warn!("Failed to open {}: {e}", path.display());
            None
        }
    }
}

async fn load_catalogue<T, F, Fut>(data_dir: &Path, file: &str, loader: F) -> Vec<T>
where
    F: FnOnce(SqlitePool) -> Fut,
    Fut: std::future::Future<Output = Result<Vec<T>, RepoError>>,
{
    match open(data_dir, file).await {
        Some(pool) => match loader(pool).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Failed to load {file}: {e}");
                Vec::new()
            }
        },
        None => Vec::new(),
    }
}

fn db_err(context: &'static str) -> impl Fn(sqlx::Error) -> RepoError {
    move |e| RepoError::database(context, e)
}

/// Group child rows by a parent key column.
fn group_by_key<T>(rows: Vec<(String, T)>) -> HashMap<String, Vec<T>> {
    let mut map: HashMap<String, Vec<T>> = HashMap::new();
    for (key, value) in rows {
        map.entry(key).or_default().push(value);
    }
    map
}

// =============================================================================
// Weapons
// =============================================================================

pub async fn load_weapons(pool: SqlitePool) -> Result<Vec<Weapon>, RepoError> {
    let err = db_err("weapons");

    let weapon_rows = sqlx::query("SELECT * FROM Weapons")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;

    let damage_rows = sqlx::query(
        "SELECT weapon_id, damage_dice, damage_bonus, damage_total_range, modifier, \
         damage_type, damage_source FROM Damage",
    )
    .fetch_all(&pool)
    .await
    .map_err(&err)?;
    let mut damages = group_by_key(
        damage_rows
            .iter()
            .map(|row| {
                (
                    row.get("weapon_id"),
                    WeaponDamage {
                        damage_dice: row.get("damage_dice"),
                        damage_bonus: row.get("damage_bonus"),
                        damage_total_range: row.get("damage_total_range"),
                        modifier: row.get("modifier"),
                        damage_type: row.get("damage_type"),
                        damage_source: row.get("damage_source"),
                    },
                )
            })
            .collect(),
    );

    let action_rows = sqlx::query("SELECT weapon_id, name, description FROM Weapon_Actions")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut actions = group_by_key(
        action_rows
            .iter()
            .map(|row| {
                (
                    row.get("weapon_id"),
                    WeaponAction {
                        name: row.get::<Option<String>, _>("name").unwrap_or_default(),
                        description: row.get("description"),
                    },
                )
            })
            .collect(),
    );

    let ability_rows = sqlx::query("SELECT weapon_id, name, description FROM Special_Abilities")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut abilities = group_by_key(
        ability_rows
            .iter()
            .map(|row| {
                (
                    row.get("weapon_id"),
                    WeaponAbility {
                        name: row.get::<Option<String>, _>("name").unwrap_or_default(),
                        description: row.get("description"),
                    },
                )
            })
            .collect(),
    );

    let location_rows = sqlx::query("SELECT weapon_id, location_description FROM Weapon_Locations")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut locations = group_by_key(
        location_rows
            .iter()
            .map(|row| {
                (
                    row.get("weapon_id"),
                    WeaponLocation {
                        description: row
                            .get::<Option<String>, _>("location_description")
                            .unwrap_or_default(),
                    },
                )
            })
            .collect(),
    );

    let note_rows = sqlx::query("SELECT weapon_id, note_content FROM Notes")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut notes = group_by_key(
        note_rows
            .iter()
            .map(|row| {
                (
                    row.get("weapon_id"),
                    WeaponNote {
                        content: row.get::<Option<String>, _>("note_content").unwrap_or_default(),
                    },
                )
            })
            .collect(),
    );

    Ok(weapon_rows
        .iter()
        .map(|row| {
            let weapon_id: String = row.get("weapon_id");
            Weapon {
                name: row.get::<Option<String>, _>("name").unwrap_or_default(),
                rarity: row.get("rarity"),
                description: row.get("description"),
                quote: row.get("quote"),
                weight_kg: row.get("weight_kg"),
                weight_lb: row.get("weight_lb"),
                price: row.get("price"),
                enchantment: row.get("enchantment"),
                weapon_type: row.get("type"),
                range_m: row.get("range_m"),
                range_f: row.get("range_f"),
                attributes: row.get("attributes"),
                image_path: row.get("image_path"),
                damages: damages.remove(&weapon_id).unwrap_or_default(),
                actions: actions.remove(&weapon_id).unwrap_or_default(),
                abilities: abilities.remove(&weapon_id).unwrap_or_default(),
                locations: locations.remove(&weapon_id).unwrap_or_default(),
                notes: notes.remove(&weapon_id).unwrap_or_default(),
                weapon_id,
            }
        })
        .collect())
}

// =============================================================================
// Spells
// =============================================================================

pub async fn load_spells(pool: SqlitePool) -> Result<Vec<Spell>, RepoError> {
    let err = db_err("spells");

    let spell_rows = sqlx::query(
        "SELECT name, level, description, image_path FROM Spells ORDER BY name COLLATE NOCASE",
    )
    .fetch_all(&pool)
    .await
    .map_err(&err)?;

    let property_rows = sqlx::query(
        "SELECT spell_name, property_name, property_value FROM Spell_Properties \
         ORDER BY spell_name COLLATE NOCASE, property_name COLLATE NOCASE",
    )
    .fetch_all(&pool)
    .await
    .map_err(&err)?;
    let mut properties = group_by_key(
        property_rows
            .iter()
            .map(|row| {
                (
                    row.get("spell_name"),
                    SpellProperty {
                        name: row.get::<Option<String>, _>("property_name").unwrap_or_default(),
                        value: row
                            .get::<Option<String>, _>("property_value")
                            .unwrap_or_default(),
                    },
                )
            })
            .collect(),
    );

    Ok(spell_rows
        .iter()
        .map(|row| {
            let name: String = row.get("name");
            let description: Option<String> = row.get("description");
            Spell {
                level: row.get("level"),
                school: description
                    .as_deref()
                    .and_then(infer_school)
                    .map(|s| s.to_string()),
                description,
                image_path: row.get("image_path"),
                properties: properties.remove(&name).unwrap_or_default(),
                name,
            }
        })
        .collect())
}

// =============================================================================
// Wearable equipment (shared shape across nine databases)
// =============================================================================

pub async fn load_equipment(
    pool: &SqlitePool,
    category: EquipmentCategory,
) -> Result<Vec<EquipmentItem>, RepoError> {
    let err = db_err("equipment");

    let item_rows = sqlx::query("SELECT * FROM Items")
        .fetch_all(pool)
        .await
        .map_err(&err)?;

    let location_rows = sqlx::query("SELECT item_id, description FROM Locations")
        .fetch_all(pool)
        .await
        .map_err(&err)?;
    let mut locations = group_by_key(
        location_rows
            .iter()
            .map(|row| {
                (
                    row.get("item_id"),
                    EquipmentLocation {
                        description: row.get::<Option<String>, _>("description").unwrap_or_default(),
                    },
                )
            })
            .collect(),
    );

    let special_rows = sqlx::query("SELECT item_id, type, name, effect FROM Specials")
        .fetch_all(pool)
        .await
        .map_err(&err)?;
    let mut specials = group_by_key(
        special_rows
            .iter()
            .map(|row| {
                (
                    row.get("item_id"),
                    EquipmentSpecial {
                        special_type: row.get::<Option<String>, _>("type").unwrap_or_default(),
                        name: row.get::<Option<String>, _>("name").unwrap_or_default(),
                        effect: row.get::<Option<String>, _>("effect").unwrap_or_default(),
                    },
                )
            })
            .collect(),
    );

    Ok(item_rows
        .iter()
        .map(|row| {
            let item_id: String = row.get("item_id");
            EquipmentItem {
                name: row.get::<Option<String>, _>("name").unwrap_or_default(),
                category,
                description: optional_column(row, "description"),
                quote: optional_column(row, "quote"),
                item_type: optional_column(row, "type"),
                rarity: optional_column(row, "rarity"),
                weight_kg: optional_column(row, "weight_kg"),
                weight_lb: optional_column(row, "weight_lb"),
                price_gp: optional_column(row, "price_gp"),
                image_path: optional_column(row, "image_path"),
                // Category-specific columns; absent in most of the databases
                armour_class_base: optional_column(row, "armour_class_base"),
                armour_class_modifier: optional_column(row, "armour_class_modifier"),
                shield_class_base: optional_column(row, "shield_class_base"),
                required_proficiency: optional_column(row, "required_proficiency"),
                locations: locations.remove(&item_id).unwrap_or_default(),
                specials: specials.remove(&item_id).unwrap_or_default(),
                item_id,
            }
        })
        .collect())
}

/// Read a column that only some of the equipment databases carry.
fn optional_column<'r, T>(row: &'r sqlx::sqlite::SqliteRow, column: &str) -> Option<T>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get::<Option<T>, _>(column).unwrap_or(None)
}

// =============================================================================
// Races
// =============================================================================

pub async fn load_races(pool: SqlitePool) -> Result<Vec<Race>, RepoError> {
    let err = db_err("races");

    let race_rows = sqlx::query("SELECT name, description, base_speed, size FROM races")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;

    let feature_rows = sqlx::query("SELECT race_name, name, description FROM racial_features")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut race_features = group_by_key(
        feature_rows
            .iter()
            .map(|row| {
                (
                    row.get("race_name"),
                    RaceFeature {
                        name: row.get::<Option<String>, _>("name").unwrap_or_default(),
                        description: row.get("description"),
                    },
                )
            })
            .collect(),
    );

    let subrace_feature_rows =
        sqlx::query("SELECT subrace_name, name, description FROM subrace_features")
            .fetch_all(&pool)
            .await
            .map_err(&err)?;
    let mut subrace_features = group_by_key(
        subrace_feature_rows
            .iter()
            .map(|row| {
                (
                    row.get("subrace_name"),
                    SubraceFeature {
                        name: row.get::<Option<String>, _>("name").unwrap_or_default(),
                        description: row.get("description"),
                    },
                )
            })
            .collect(),
    );

    let subrace_rows = sqlx::query("SELECT race_name, name, description FROM subraces")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut subraces: HashMap<String, Vec<Subrace>> = HashMap::new();
    for row in &subrace_rows {
        let race_name: String = row.get("race_name");
        let name: String = row.get::<Option<String>, _>("name").unwrap_or_default();
        let subrace = Subrace {
            features: subrace_features.remove(&name).unwrap_or_default(),
            description: row.get("description"),
            name,
        };
        subraces.entry(race_name).or_default().push(subrace);
    }

    Ok(race_rows
        .iter()
        .map(|row| {
            let name: String = row.get("name");
            Race {
                description: row.get("description"),
                base_speed: row.get("base_speed"),
                size: row.get("size"),
                features: race_features.remove(&name).unwrap_or_default(),
                subraces: subraces.remove(&name).unwrap_or_default(),
                name,
            }
        })
        .collect())
}

// =============================================================================
// Classes
// =============================================================================

pub async fn load_classes(pool: SqlitePool) -> Result<Vec<CharacterClass>, RepoError> {
    let err = db_err("classes");

    let class_rows = sqlx::query("SELECT * FROM Classes")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;

    let subclass_feature_rows = sqlx::query(
        "SELECT subclass_name, level, feature_name, feature_description FROM Subclasses_Features",
    )
    .fetch_all(&pool)
    .await
    .map_err(&err)?;
    let mut subclass_features = group_by_key(
        subclass_feature_rows
            .iter()
            .map(|row| {
                (
                    row.get("subclass_name"),
                    SubclassFeature {
                        level: row.get::<Option<i64>, _>("level").unwrap_or_default(),
                        feature_name: row
                            .get::<Option<String>, _>("feature_name")
                            .unwrap_or_default(),
                        feature_description: row.get("feature_description"),
                    },
                )
            })
            .collect(),
    );

    let subclass_rows = sqlx::query("SELECT class_name, name, description FROM Subclasses")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut subclasses: HashMap<String, Vec<Subclass>> = HashMap::new();
    for row in &subclass_rows {
        let class_name: String = row.get("class_name");
        let name: String = row.get::<Option<String>, _>("name").unwrap_or_default();
        let subclass = Subclass {
            features: subclass_features.remove(&name).unwrap_or_default(),
            description: row.get("description"),
            name,
        };
        subclasses.entry(class_name).or_default().push(subclass);
    }

    let progression_rows = sqlx::query("SELECT * FROM Class_Progression")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut progressions = group_by_key(
        progression_rows
            .iter()
            .map(|row| (row.get("class_name"), progression_entry(row)))
            .collect(),
    );

    let spell_rows =
        sqlx::query("SELECT class_name, level, spell_name FROM Class_Spells_Learned")
            .fetch_all(&pool)
            .await
            .map_err(&err)?;
    let mut spells_learned: HashMap<String, std::collections::BTreeMap<i64, Vec<String>>> =
        HashMap::new();
    for row in &spell_rows {
        let class_name: Option<String> = row.get("class_name");
        let level: Option<i64> = row.get("level");
        let spell_name: Option<String> = row.get("spell_name");
        let (Some(class_name), Some(level), Some(spell_name)) = (class_name, level, spell_name)
        else {
            continue;
        };
        if spell_name.is_empty() {
            continue;
        }
        spells_learned
            .entry(class_name)
            .or_default()
            .entry(level)
            .or_default()
            .push(spell_name);
    }

    Ok(class_rows
        .iter()
        .map(|row| {
            let name: String = row.get::<Option<String>, _>("name").unwrap_or_default();

            let mut progression = progressions.remove(&name).unwrap_or_default();
            progression.sort_by_key(|entry| entry.level);

            let spells = spells_learned
                .remove(&name)
                .unwrap_or_default()
                .into_iter()
                .map(|(level, mut spells)| {
                    spells.sort();
                    spells.dedup();
                    ClassSpellList { level, spells }
                })
                .collect();

            CharacterClass {
                description: row.get("description"),
                hit_points_at_level1: row.get("hit_points_at_level1"),
                hit_points_on_level_up: row.get("hit_points_on_level_up"),
                key_abilities: row.get("key_abilities"),
                saving_throw_proficiencies: row.get("saving_throw_proficiencies"),
                equipment_proficiencies: row.get("equipment_proficiencies"),
                skill_proficiencies: row.get("skill_proficiencies"),
                spellcasting_ability: row.get("spellcasting_ability"),
                starting_equipment: row.get("starting_equipment"),
                subclasses: subclasses.remove(&name).unwrap_or_default(),
                progression,
                spells_learned: spells,
                name,
            }
        })
        .collect())
}

fn progression_entry(row: &sqlx::sqlite::SqliteRow) -> ClassProgressionEntry {
    ClassProgressionEntry {
        level: row.get::<Option<i64>, _>("level").unwrap_or_default(),
        proficiency_bonus: row.get("proficiency_bonus"),
        features: row.get("features"),
        rage_charges: row.get("rage_charges"),
        rage_damage: row.get("rage_damage"),
        cantrips_known: row.get("cantrips_known"),
        spells_known: row.get("spells_known"),
        spell_slots_1st: row.get("spell_slots_1st"),
        spell_slots_2nd: row.get("spell_slots_2nd"),
        spell_slots_3rd: row.get("spell_slots_3rd"),
        spell_slots_4th: row.get("spell_slots_4th"),
        spell_slots_5th: row.get("spell_slots_5th"),
        spell_slots_6th: row.get("spell_slots_6th"),
        sorcery_points: row.get("sorcery_points"),
        sneak_attack_damage: row.get("sneak_attack_damage"),
        bardic_inspiration_charges: row.get("bardic_inspiration_charges"),
        channel_divinity_charges: row.get("channel_divinity_charges"),
        lay_on_hands_charges: row.get("lay_on_hands_charges"),
        ki_points: row.get("ki_points"),
        unarmoured_movement_bonus: row.get("unarmoured_movement_bonus"),
        martial_arts_damage: row.get("martial_arts_damage"),
        spell_slots_per_level: row.get("spell_slots_per_level"),
        invocations_known: row.get("invocations_known"),
    }
}

// =============================================================================
// Backgrounds
// =============================================================================

pub async fn load_backgrounds(pool: SqlitePool) -> Result<Vec<Background>, RepoError> {
    let err = db_err("backgrounds");

    let background_rows = sqlx::query("SELECT name, description FROM Backgrounds")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;

    let skill_rows = sqlx::query("SELECT background_name, skill_name FROM Background_Skills")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut skills = group_by_key(
        skill_rows
            .iter()
            .map(|row| {
                (
                    row.get("background_name"),
                    BackgroundSkill {
                        name: row.get::<Option<String>, _>("skill_name").unwrap_or_default(),
                    },
                )
            })
            .collect(),
    );

    let character_rows =
        sqlx::query("SELECT background_name, character_name FROM Background_Characters")
            .fetch_all(&pool)
            .await
            .map_err(&err)?;
    let mut characters = group_by_key(
        character_rows
            .iter()
            .map(|row| {
                (
                    row.get("background_name"),
                    BackgroundCharacter {
                        name: row
                            .get::<Option<String>, _>("character_name")
                            .unwrap_or_default(),
                    },
                )
            })
            .collect(),
    );

    let note_rows = sqlx::query("SELECT background_name, note FROM Background_Notes")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut notes = group_by_key(
        note_rows
            .iter()
            .map(|row| {
                (
                    row.get("background_name"),
                    BackgroundNote {
                        note: row.get::<Option<String>, _>("note").unwrap_or_default(),
                    },
                )
            })
            .collect(),
    );

    Ok(background_rows
        .iter()
        .map(|row| {
            let name: String = row.get("name");
            Background {
                description: row.get("description"),
                skills: skills.remove(&name).unwrap_or_default(),
                characters: characters.remove(&name).unwrap_or_default(),
                notes: notes.remove(&name).unwrap_or_default(),
                name,
            }
        })
        .collect())
}

// =============================================================================
// Feats
// =============================================================================

pub async fn load_feats(pool: SqlitePool) -> Result<Vec<Feat>, RepoError> {
    let err = db_err("feats");

    let feat_rows = sqlx::query("SELECT name, description, prerequisite FROM Feats")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;

    let option_rows = sqlx::query("SELECT feat_name, option_name, description FROM Feat_Options")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut options = group_by_key(
        option_rows
            .iter()
            .map(|row| {
                (
                    row.get("feat_name"),
                    FeatOption {
                        name: row.get::<Option<String>, _>("option_name").unwrap_or_default(),
                        description: row.get("description"),
                    },
                )
            })
            .collect(),
    );

    let note_rows = sqlx::query("SELECT feat_name, note FROM Feat_Notes")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut notes = group_by_key(
        note_rows
            .iter()
            .map(|row| {
                (
                    row.get("feat_name"),
                    FeatNote {
                        note: row.get::<Option<String>, _>("note").unwrap_or_default(),
                    },
                )
            })
            .collect(),
    );

    Ok(feat_rows
        .iter()
        .map(|row| {
            let name: String = row.get("name");
            Feat {
                description: row.get("description"),
                prerequisite: row.get("prerequisite"),
                options: options.remove(&name).unwrap_or_default(),
                notes: notes.remove(&name).unwrap_or_default(),
                name,
            }
        })
        .collect())
}

// =============================================================================
// Abilities
// =============================================================================

pub async fn load_abilities(pool: SqlitePool) -> Result<Vec<Ability>, RepoError> {
    let err = db_err("abilities");

    let ability_rows = sqlx::query("SELECT name, description, image_path FROM Abilities")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;

    let use_rows = sqlx::query("SELECT ability_name, use_name, description FROM Ability_Uses")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut uses = group_by_key(
        use_rows
            .iter()
            .map(|row| {
                (
                    row.get("ability_name"),
                    AbilityUse {
                        name: row.get::<Option<String>, _>("use_name").unwrap_or_default(),
                        description: row.get("description"),
                    },
                )
            })
            .collect(),
    );

    let check_rows =
        sqlx::query("SELECT ability_name, check_type, description FROM Ability_Checks")
            .fetch_all(&pool)
            .await
            .map_err(&err)?;
    let mut checks = group_by_key(
        check_rows
            .iter()
            .map(|row| {
                (
                    row.get("ability_name"),
                    AbilityCheck {
                        check_type: row.get("check_type"),
                        description: row.get("description"),
                    },
                )
            })
            .collect(),
    );

    let skill_rows =
        sqlx::query("SELECT ability_name, skill_name, description FROM Ability_Check_Skills")
            .fetch_all(&pool)
            .await
            .map_err(&err)?;
    let mut skills = group_by_key(
        skill_rows
            .iter()
            .map(|row| {
                (
                    row.get("ability_name"),
                    AbilitySkill {
                        name: row.get::<Option<String>, _>("skill_name").unwrap_or_default(),
                        description: row.get("description"),
                    },
                )
            })
            .collect(),
    );

    let save_rows = sqlx::query("SELECT ability_name, description FROM Ability_Saves")
        .fetch_all(&pool)
        .await
        .map_err(&err)?;
    let mut saves = group_by_key(
        save_rows
            .iter()
            .map(|row| {
                (
                    row.get("ability_name"),
                    AbilitySave {
                        description: row.get("description"),
                    },
                )
            })
            .collect(),
    );

    Ok(ability_rows
        .iter()
        .map(|row| {
            let name: String = row.get("name");
            Ability {
                description: row.get("description"),
                image_path: row.get("image_path"),
                uses: uses.remove(&name).unwrap_or_default(),
                checks: checks.remove(&name).unwrap_or_default(),
                skills: skills.remove(&name).unwrap_or_default(),
                saves: saves.remove(&name).unwrap_or_default(),
                name,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // File-backed test databases: an in-memory pool would hand each pooled
    // connection its own empty database.
    async fn test_pool(dir: &tempfile::TempDir, statements: &[&str]) -> SqlitePool {
        let path = dir.path().join("reference.db");
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", path.to_string_lossy()))
            .await
            .expect("pool");
        for statement in statements {
            sqlx::query(statement).execute(&pool).await.expect("schema");
        }
        pool
    }

    #[tokio::test]
    async fn spells_group_properties_and_infer_school() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = test_pool(&dir, &[
            "CREATE TABLE Spells (name TEXT, level TEXT, description TEXT, image_path TEXT)",
            "CREATE TABLE Spell_Properties (spell_name TEXT, property_name TEXT, property_value TEXT)",
            "INSERT INTO Spells VALUES \
             ('Fire Bolt', 'Cantrip', 'A classic evocation cantrip.', NULL), \
             ('Mage Hand', 'Cantrip', 'A conjuration standby.', NULL)",
            "INSERT INTO Spell_Properties VALUES \
             ('Fire Bolt', 'Damage', '1d10 Fire'), \
             ('Fire Bolt', 'Range', '18m')",
        ])
        .await;

        let spells = load_spells(pool).await.expect("load");
        assert_eq!(spells.len(), 2);
        assert_eq!(spells[0].name, "Fire Bolt");
        assert_eq!(spells[0].school.as_deref(), Some("Evocation"));
        assert_eq!(spells[0].properties.len(), 2);
        assert_eq!(spells[1].school.as_deref(), Some("Conjuration"));
        assert!(spells[1].properties.is_empty());
    }

    #[tokio::test]
    async fn weapons_attach_their_child_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = test_pool(&dir, &[
            "CREATE TABLE Weapons (weapon_id TEXT, name TEXT, rarity TEXT, description TEXT, \
             quote TEXT, weight_kg REAL, weight_lb REAL, price INTEGER, enchantment INTEGER, \
             type TEXT, range_m REAL, range_f REAL, attributes TEXT, image_path TEXT)",
            "CREATE TABLE Damage (weapon_id TEXT, damage_dice TEXT, damage_bonus INTEGER, \
             damage_total_range TEXT, modifier TEXT, damage_type TEXT, damage_source TEXT)",
            "CREATE TABLE Weapon_Actions (weapon_id TEXT, name TEXT, description TEXT)",
            "CREATE TABLE Special_Abilities (weapon_id TEXT, name TEXT, description TEXT)",
            "CREATE TABLE Weapon_Locations (weapon_id TEXT, location_description TEXT)",
            "CREATE TABLE Notes (weapon_id TEXT, note_content TEXT)",
            "INSERT INTO Weapons (weapon_id, name, type, enchantment) \
             VALUES ('wpn_everburn', 'Everburn Blade', 'Greatsword', 0)",
            "INSERT INTO Damage VALUES \
             ('wpn_everburn', '2d6', NULL, NULL, NULL, 'Slashing', 'Weapon'), \
             ('wpn_everburn', '1d4', NULL, NULL, NULL, 'Fire', 'Bonus')",
            "INSERT INTO Weapon_Locations VALUES ('wpn_everburn', 'Commander Zhalk, Nautiloid')",
        ])
        .await;

        let weapons = load_weapons(pool).await.expect("load");
        assert_eq!(weapons.len(), 1);
        let weapon = &weapons[0];
        assert_eq!(weapon.name, "Everburn Blade");
        assert_eq!(weapon.damages.len(), 2);
        assert_eq!(weapon.damages[1].damage_type.as_deref(), Some("Fire"));
        assert_eq!(weapon.locations.len(), 1);
        assert!(weapon.notes.is_empty());
    }

    #[tokio::test]
    async fn equipment_reads_category_columns_when_present() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = test_pool(&dir, &[
            "CREATE TABLE Items (item_id TEXT, name TEXT, description TEXT, quote TEXT, \
             type TEXT, rarity TEXT, weight_kg REAL, weight_lb REAL, price_gp REAL, \
             image_path TEXT, armour_class_base INTEGER, armour_class_modifier TEXT)",
            "CREATE TABLE Locations (item_id TEXT, description TEXT)",
            "CREATE TABLE Specials (item_id TEXT, type TEXT, name TEXT, effect TEXT)",
            "INSERT INTO Items (item_id, name, rarity, armour_class_base) \
             VALUES ('arm_scale', 'Scale Mail', 'Common', 14)",
        ])
        .await;

        let items = load_equipment(&pool, EquipmentCategory::Armour)
            .await
            .expect("load");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, EquipmentCategory::Armour);
        assert_eq!(items[0].armour_class_base, Some(14));
        // Columns the armour database does not carry read as None
        assert_eq!(items[0].shield_class_base, None);
    }

    #[tokio::test]
    async fn classes_sort_progression_and_spells() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pool = test_pool(&dir, &[
            "CREATE TABLE Classes (name TEXT, description TEXT, hit_points_at_level1 TEXT, \
             hit_points_on_level_up TEXT, key_abilities TEXT, saving_throw_proficiencies TEXT, \
             equipment_proficiencies TEXT, skill_proficiencies TEXT, spellcasting_ability TEXT, \
             starting_equipment TEXT)",
            "CREATE TABLE Subclasses (class_name TEXT, name TEXT, description TEXT)",
            "CREATE TABLE Subclasses_Features (subclass_name TEXT, level INTEGER, \
             feature_name TEXT, feature_description TEXT)",
            "CREATE TABLE Class_Progression (class_name TEXT, level INTEGER, \
             proficiency_bonus TEXT, features TEXT, rage_charges INTEGER, rage_damage INTEGER, \
             cantrips_known INTEGER, spells_known INTEGER, spell_slots_1st INTEGER, \
             spell_slots_2nd INTEGER, spell_slots_3rd INTEGER, spell_slots_4th INTEGER, \
             spell_slots_5th INTEGER, spell_slots_6th INTEGER, sorcery_points INTEGER, \
             sneak_attack_damage TEXT, bardic_inspiration_charges INTEGER, \
             channel_divinity_charges INTEGER, lay_on_hands_charges INTEGER, ki_points INTEGER, \
             unarmoured_movement_bonus TEXT, martial_arts_damage TEXT, \
             spell_slots_per_level TEXT, invocations_known INTEGER)",
            "CREATE TABLE Class_Spells_Learned (class_name TEXT, level INTEGER, spell_name TEXT)",
            "INSERT INTO Classes (name, spellcasting_ability) VALUES ('Wizard', 'Intelligence')",
            "INSERT INTO Class_Progression (class_name, level, cantrips_known) VALUES \
             ('Wizard', 2, 3), ('Wizard', 1, 3)",
            "INSERT INTO Class_Spells_Learned VALUES \
             ('Wizard', 1, 'Magic Missile'), ('Wizard', 1, 'Shield'), ('Wizard', 2, 'Misty Step')",
        ])
        .await;

        let classes = load_classes(pool).await.expect("load");
        assert_eq!(classes.len(), 1);
        let wizard = &classes[0];
        let levels: Vec<i64> = wizard.progression.iter().map(|p| p.level).collect();
        assert_eq!(levels, vec![1, 2]);
        assert_eq!(wizard.spells_learned.len(), 2);
        assert_eq!(wizard.spells_learned[0].level, 1);
        assert_eq!(wizard.spells_learned[0].spells, vec!["Magic Missile", "Shield"]);
    }

    #[tokio::test]
    async fn missing_directory_degrades_to_empty_catalogues() {
        let dir = tempfile::tempdir().expect("tempdir");
        let data = ReferenceData::load(dir.path()).await;
        assert!(data.weapons.is_empty());
        assert!(data.spells.is_empty());
        assert!(data.equipment.is_empty());
        // Analyzer catalogues are built in, not database-backed
        assert_eq!(data.skills.len(), 18);
        assert!(!data.roles.is_empty());
    }
}
