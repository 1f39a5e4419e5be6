//! Recipe Normalization
//!
//! Turns an authored [`RecipeDefinition`] into a [`RecipeRecord`]: names
//! resolved to [`ItemKind`]s, quantities checked, time quantized.

use tracing::debug;

use super::definition::RecipeDefinition;
use super::time::{QuantizedTime, TimeQuantizer};
use crate::data::ItemNamespace;
use crate::error::CompileError;
use crate::item::ItemKind;

/// An item kind with an amount, as the runtime `Item::new(kind, amount)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemStack {
    pub kind: ItemKind,
    pub amount: u32,
}

impl ItemStack {
    pub fn new(kind: ItemKind, amount: u32) -> Self {
        Self { kind, amount }
    }
}

/// A validated recipe ready for emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRecord {
    /// Requirements in authored order
    pub ingredients: Vec<ItemStack>,
    pub result: ItemStack,
    pub time: QuantizedTime,
    /// `time` evaluated at the quantizer's tick rate
    pub ticks: u32,
}

impl RecipeRecord {
    /// Validate and canonicalize a single definition.
    ///
    /// The first problem found aborts; nothing is collected.
    pub fn normalize(
        def: &RecipeDefinition,
        namespace: &ItemNamespace,
        quantizer: &TimeQuantizer,
    ) -> Result<Self, CompileError> {
        let result_kind = resolve(namespace, &def.name, &def.name)?;
        let result = ItemStack::new(result_kind, quantity(&def.name, &def.name, def.amount)?);

        let ingredients = def
            .requirements
            .iter()
            .map(|(item, count)| {
                let kind = resolve(namespace, &def.name, item)?;
                Ok(ItemStack::new(kind, quantity(&def.name, item, *count)?))
            })
            .collect::<Result<Vec<_>, CompileError>>()?;

        let (time, ticks) = quantizer.quantize(&def.name, def.time)?;

        debug!(
            "Normalized recipe {}: {} ingredients -> {} x{} in {} ticks",
            def.name,
            ingredients.len(),
            result.kind,
            result.amount,
            ticks
        );

        Ok(Self {
            ingredients,
            result,
            time,
            ticks,
        })
    }
}

fn resolve(namespace: &ItemNamespace, recipe: &str, name: &str) -> Result<ItemKind, CompileError> {
    namespace
        .resolve(name)
        .ok_or_else(|| CompileError::UnknownItemKind {
            recipe: recipe.to_string(),
            name: name.to_string(),
        })
}

fn quantity(recipe: &str, item: &str, count: i64) -> Result<u32, CompileError> {
    u32::try_from(count)
        .ok()
        .filter(|&amount| amount > 0)
        .ok_or_else(|| CompileError::InvalidQuantity {
            recipe: recipe.to_string(),
            item: item.to_string(),
            quantity: count,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_TICKS_PER_SECOND, DEFAULT_TIME_TOLERANCE};
    use crate::item::KindTag;

    fn namespace() -> ItemNamespace {
        let mut ns = ItemNamespace::new();
        for name in ["IronPlate", "IronGearWheel", "IronRod", "MechanicalComponent", "Coal"] {
            ns.insert(KindTag::Plain, name);
        }
        ns.insert(KindTag::Structure, "Furnace");
        ns.insert(KindTag::Voxel, "Stone");
        ns
    }

    fn quantizer() -> TimeQuantizer {
        TimeQuantizer::new(DEFAULT_TICKS_PER_SECOND, DEFAULT_TIME_TOLERANCE)
    }

    #[test]
    fn test_iron_gear_wheel() {
        let def = RecipeDefinition::new("IronGearWheel", &[("IronPlate", 2)], 1, 0.5);
        let record = RecipeRecord::normalize(&def, &namespace(), &quantizer()).unwrap();

        assert_eq!(
            record.ingredients,
            vec![ItemStack::new(ItemKind::Plain("IronPlate".into()), 2)]
        );
        assert_eq!(record.result, ItemStack::new(ItemKind::Plain("IronGearWheel".into()), 1));
        assert_eq!(record.time, QuantizedTime::Divided(2));
        assert_eq!(record.ticks, 30);
    }

    #[test]
    fn test_preserves_requirement_order() {
        let def = RecipeDefinition::new(
            "Structure(StructureKind::Furnace)",
            &[("Voxel(Voxel::Stone)", 16), ("Coal", 4), ("IronPlate", 1)],
            1,
            2.0,
        );
        let record = RecipeRecord::normalize(&def, &namespace(), &quantizer()).unwrap();

        assert_eq!(record.ingredients.len(), def.requirements.len());
        let names: Vec<String> = record.ingredients.iter().map(|i| i.kind.to_string()).collect();
        assert_eq!(names, vec!["Voxel(Voxel::Stone)", "Coal", "IronPlate"]);
        assert_eq!(record.result.kind, ItemKind::Structure("Furnace".into()));
        assert_eq!(record.time, QuantizedTime::Multiplied(2));
        assert_eq!(record.ticks, 120);
    }

    #[test]
    fn test_empty_requirements() {
        let def = RecipeDefinition::new("Coal", &[], 1, 1.0);
        let record = RecipeRecord::normalize(&def, &namespace(), &quantizer()).unwrap();
        assert!(record.ingredients.is_empty());
        assert_eq!(record.time, QuantizedTime::Base);
    }

    #[test]
    fn test_unknown_result() {
        let def = RecipeDefinition::new("Radar", &[("IronPlate", 1)], 1, 0.1);
        let err = RecipeRecord::normalize(&def, &namespace(), &quantizer()).unwrap_err();
        assert_eq!(
            err,
            CompileError::UnknownItemKind {
                recipe: "Radar".into(),
                name: "Radar".into()
            }
        );
    }

    #[test]
    fn test_unknown_ingredient() {
        let belt = "Structure(StructureKind::Belt)";
        let def = RecipeDefinition::new("IronRod", &[(belt, 1)], 2, 0.5);
        let err = RecipeRecord::normalize(&def, &namespace(), &quantizer()).unwrap_err();
        assert!(matches!(
            err,
            CompileError::UnknownItemKind { ref name, .. } if name == belt
        ));
    }

    #[test]
    fn test_invalid_quantities() {
        let ns = namespace();
        let q = quantizer();

        let zero_output = RecipeDefinition::new("IronRod", &[("IronPlate", 1)], 0, 0.5);
        assert!(matches!(
            RecipeRecord::normalize(&zero_output, &ns, &q),
            Err(CompileError::InvalidQuantity { quantity: 0, .. })
        ));

        let negative_input = RecipeDefinition::new("IronRod", &[("IronPlate", -3)], 2, 0.5);
        assert!(matches!(
            RecipeRecord::normalize(&negative_input, &ns, &q),
            Err(CompileError::InvalidQuantity { quantity: -3, .. })
        ));

        let too_large =
            RecipeDefinition::new("IronRod", &[("IronPlate", i64::from(u32::MAX) + 1)], 2, 0.5);
        assert!(matches!(
            RecipeRecord::normalize(&too_large, &ns, &q),
            Err(CompileError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_time_errors_propagate() {
        let def = RecipeDefinition::new("IronRod", &[("IronPlate", 1)], 2, 0.0);
        assert!(matches!(
            RecipeRecord::normalize(&def, &namespace(), &quantizer()),
            Err(CompileError::InvalidTime { .. })
        ));
    }
}
