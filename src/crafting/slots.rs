//! Crafting Station Slot Layouts
//!
//! For each general recipe, the inventory slots an assembler must expose:
//! one filtered input slot per ingredient, then a single output slot.

use std::collections::HashMap;

use super::record::RecipeRecord;
use crate::constants::SLOT_HEADROOM;
use crate::error::CompileError;
use crate::item::ItemKind;

/// What an input slot accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    ItemKind(ItemKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotKind {
    Input { filter: Filter },
    Output,
}

/// Capacity and role of one slot, mirroring the runtime `SlotMeta`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMeta {
    pub max_amount: u32,
    pub kind: SlotKind,
}

impl SlotMeta {
    pub fn new(max_amount: u32, kind: SlotKind) -> Self {
        Self { max_amount, kind }
    }
}

/// Ordered slots for one recipe: inputs in ingredient order, then the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLayout {
    pub slots: Vec<SlotMeta>,
}

impl SlotLayout {
    /// Build the layout for `record`; every capacity is twice its quantity
    pub fn for_record(record: &RecipeRecord) -> Result<Self, CompileError> {
        let capacity = |item: &ItemKind, amount: u32| {
            amount
                .checked_mul(SLOT_HEADROOM)
                .ok_or_else(|| CompileError::InvalidQuantity {
                    recipe: record.result.kind.to_string(),
                    item: item.to_string(),
                    quantity: i64::from(amount),
                })
        };

        let mut slots = Vec::with_capacity(record.ingredients.len() + 1);
        for ingredient in &record.ingredients {
            slots.push(SlotMeta::new(
                capacity(&ingredient.kind, ingredient.amount)?,
                SlotKind::Input {
                    filter: Filter::ItemKind(ingredient.kind.clone()),
                },
            ));
        }
        slots.push(SlotMeta::new(
            capacity(&record.result.kind, record.result.amount)?,
            SlotKind::Output,
        ));

        Ok(Self { slots })
    }

    pub fn inputs(&self) -> impl Iterator<Item = &SlotMeta> {
        self.slots
            .iter()
            .filter(|s| matches!(s.kind, SlotKind::Input { .. }))
    }

    pub fn output(&self) -> Option<&SlotMeta> {
        self.slots.iter().find(|s| s.kind == SlotKind::Output)
    }
}

/// Slot layouts for a whole recipe set.
///
/// Addressed by ordinal position in the authored set, which is what the
/// runtime stores, and by result kind, which survives reordering.
#[derive(Debug, Clone, Default)]
pub struct SlotLayoutTable {
    layouts: Vec<SlotLayout>,
    by_result: HashMap<ItemKind, usize>,
}

impl SlotLayoutTable {
    pub fn from_records(records: &[RecipeRecord]) -> Result<Self, CompileError> {
        let mut table = Self::default();
        for (index, record) in records.iter().enumerate() {
            table.layouts.push(SlotLayout::for_record(record)?);
            table.by_result.insert(record.result.kind.clone(), index);
        }
        Ok(table)
    }

    /// Get the layout at `index`; any index past the set is a caller bug
    pub fn get(&self, index: usize) -> Result<&SlotLayout, CompileError> {
        self.layouts
            .get(index)
            .ok_or(CompileError::SlotIndexOutOfRange {
                index,
                len: self.layouts.len(),
            })
    }

    /// Get the ordinal index and layout for the recipe producing `result`
    pub fn by_result(&self, result: &ItemKind) -> Option<(usize, &SlotLayout)> {
        let index = *self.by_result.get(result)?;
        Some((index, &self.layouts[index]))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotLayout> {
        self.layouts.iter()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crafting::record::ItemStack;
    use crate::crafting::time::QuantizedTime;

    fn plain(name: &str) -> ItemKind {
        ItemKind::Plain(name.to_string())
    }

    fn record(result: &str, amount: u32, ingredients: &[(&str, u32)]) -> RecipeRecord {
        RecipeRecord {
            ingredients: ingredients
                .iter()
                .map(|(name, count)| ItemStack::new(plain(name), *count))
                .collect(),
            result: ItemStack::new(plain(result), amount),
            time: QuantizedTime::Base,
            ticks: 60,
        }
    }

    #[test]
    fn test_iron_gear_wheel_layout() {
        let rec = record("IronGearWheel", 1, &[("IronPlate", 2)]);
        let layout = SlotLayout::for_record(&rec).unwrap();

        assert_eq!(
            layout.slots,
            vec![
                SlotMeta::new(
                    4,
                    SlotKind::Input {
                        filter: Filter::ItemKind(plain("IronPlate")),
                    },
                ),
                SlotMeta::new(2, SlotKind::Output),
            ]
        );
    }

    #[test]
    fn test_capacity_is_double_the_quantity() {
        let rec = record("CircuitBoard", 3, &[("ElectronicsKit", 2), ("IronPlate", 4)]);
        let layout = SlotLayout::for_record(&rec).unwrap();

        for (slot, ingredient) in layout.inputs().zip(&rec.ingredients) {
            assert_eq!(slot.max_amount, 2 * ingredient.amount);
            assert_eq!(
                slot.kind,
                SlotKind::Input {
                    filter: Filter::ItemKind(ingredient.kind.clone()),
                }
            );
        }
        assert_eq!(layout.inputs().count(), 2);
        assert_eq!(layout.output().map(|s| s.max_amount), Some(6));
        assert_eq!(layout.slots.last().map(|s| &s.kind), Some(&SlotKind::Output));
    }

    #[test]
    fn test_no_ingredients_still_has_output() {
        let layout = SlotLayout::for_record(&record("Coal", 1, &[])).unwrap();
        assert_eq!(layout.slots, vec![SlotMeta::new(2, SlotKind::Output)]);
    }

    #[test]
    fn test_capacity_overflow() {
        let rec = record("IronRod", u32::MAX, &[]);
        assert!(matches!(
            SlotLayout::for_record(&rec),
            Err(CompileError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_table_lookup() {
        let records = vec![
            record("IronGearWheel", 1, &[("IronPlate", 2)]),
            record("IronRod", 2, &[("IronPlate", 1)]),
        ];
        let table = SlotLayoutTable::from_records(&records).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).unwrap().output().map(|s| s.max_amount), Some(4));
        assert_eq!(
            table.get(2),
            Err(CompileError::SlotIndexOutOfRange { index: 2, len: 2 })
        );

        let (index, layout) = table.by_result(&plain("IronRod")).unwrap();
        assert_eq!(index, 1);
        assert_eq!(layout, table.get(1).unwrap());
        assert!(table.by_result(&plain("Radar")).is_none());
    }
}
