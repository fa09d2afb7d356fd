extern crate self as bg3companion_domain;

pub mod catalog;
pub mod common;
pub mod entities;
pub mod error;
pub mod party;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    infer_school, normalize_skill_choices, Ability, AbilityCheck, AbilitySave, AbilitySkill,
    AbilityUse, Background, BackgroundCharacter, BackgroundNote, BackgroundSkill, Build,
    BuildLevel, CharacterClass, ClassProgressionEntry, ClassSpellList, Enemy, EnemyPatch,
    EquipmentCategory, EquipmentItem, EquipmentLocation, EquipmentSlot, EquipmentSpecial, Feat,
    FeatNote, FeatOption, LootItem, LootItemPatch, NewBuild, NewBuildLevel, NewEnemy, NewLootItem,
    PartyMember, Race, RaceFeature, Spell, SpellLevel, SpellProperty, Subclass, SubclassFeature,
    Subrace, SubraceFeature, Weapon, WeaponAbility, WeaponAction, WeaponDamage, WeaponLocation,
    WeaponNote, LEVEL_CAP, WEAPON_SLOTS,
};

pub use catalog::{default_roles, default_skills};
pub use error::DomainError;

// Re-export the party analyzer surface
pub use party::{
    analyze_party, spell_damage_types, weapon_damage_types, Catalogues, CompositionAlerts,
    DamageTypeBreakdown, DistributionEntry, ExportFilters, MetricsExport, PartyMetrics,
    UNASSIGNED_CLASS, UNDEFINED_ROLE,
};
