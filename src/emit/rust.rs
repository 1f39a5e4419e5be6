//! Rust Source Emitter
//!
//! Renders compiled recipe sets as a Rust module: one `&[Recipe]` constant
//! per set and, for sets that carry slot layouts, a total lookup from
//! ordinal index to `&'static [SlotMeta]`.

use crate::config::{ImportConfig, SetConfig};
use crate::crafting::{CompiledSet, Filter, ItemStack, RecipeRecord, SlotKind, SlotLayout};
use crate::item::KindTag;

const HEADER: &str = "\
//
//
//
// AUTO GENERATED CODE
// Regenerate with `recipe-codegen` after editing `data/recipes.toml`
//
//
//
";

pub struct RustEmitter<'a> {
    imports: &'a ImportConfig,
}

impl<'a> RustEmitter<'a> {
    pub fn new(imports: &'a ImportConfig) -> Self {
        Self { imports }
    }

    /// Render every set into one source file
    pub fn emit(&self, sets: &[CompiledSet]) -> String {
        let mut out = String::from(HEADER);
        self.emit_imports(&mut out, sets);

        for set in sets {
            let policy = set.policy();
            if policy.emit_table {
                out.push('\n');
                self.emit_table(&mut out, &set.config, &set.records);
            }
            if let Some(layouts) = &set.slot_layouts {
                out.push('\n');
                self.emit_slot_layouts(&mut out, &set.config, layouts.iter());
                out.push('\n');
                self.emit_index(&mut out, &set.config, &set.records);
            }
        }

        out
    }

    fn emit_imports(&self, out: &mut String, sets: &[CompiledSet]) {
        let uses_tag = |tag: KindTag| {
            sets.iter().flat_map(|s| &s.records).any(|r| {
                r.result.kind.tag() == tag || r.ingredients.iter().any(|i| i.kind.tag() == tag)
            })
        };

        let mut paths = vec![self.imports.items.as_str(), self.imports.recipe.as_str()];
        if sets.iter().any(|s| s.slot_layouts.is_some()) {
            paths.push(self.imports.slots.as_str());
        }
        if uses_tag(KindTag::Structure) {
            paths.push(self.imports.structure_kind.as_str());
        }
        if uses_tag(KindTag::Voxel) {
            paths.push(self.imports.voxel.as_str());
        }
        if sets.iter().any(|s| s.policy().emit_table && !s.records.is_empty()) {
            paths.push(self.imports.ticks.as_str());
        }

        for path in paths {
            out.push_str(&format!("use {};\n", path));
        }
    }

    fn emit_table(&self, out: &mut String, set: &SetConfig, records: &[RecipeRecord]) {
        out.push_str(&format!("pub const {}: &[Recipe] = &[\n", set.const_name));
        for record in records {
            let requirements: Vec<String> = record.ingredients.iter().map(item_expr).collect();
            out.push_str("    Recipe {\n");
            out.push_str(&format!("        requirements: &[{}],\n", requirements.join(", ")));
            out.push_str(&format!("        result: {},\n", item_expr(&record.result)));
            out.push_str(&format!(
                "        time: {},\n",
                record.time.expr(self.imports.ticks_constant())
            ));
            out.push_str("    },\n");
        }
        out.push_str("];\n");
    }

    fn emit_slot_layouts<'b>(
        &self,
        out: &mut String,
        set: &SetConfig,
        layouts: impl Iterator<Item = &'b SlotLayout>,
    ) {
        out.push_str(&format!(
            "pub fn {}(index: usize) -> &'static [SlotMeta] {{\n",
            set.layout_fn
        ));
        out.push_str("    match index {\n");
        for (index, layout) in layouts.enumerate() {
            out.push_str(&format!("        {} => {{\n", index));
            out.push_str("            const SLOTS: &[SlotMeta] = &[\n");
            for slot in &layout.slots {
                out.push_str(&format!(
                    "                SlotMeta::new({}, {}),\n",
                    slot.max_amount,
                    slot_kind_expr(&slot.kind)
                ));
            }
            out.push_str("            ];\n");
            out.push_str("            SLOTS\n");
            out.push_str("        }\n");
        }
        out.push_str("        _ => unreachable!(),\n");
        out.push_str("    }\n");
        out.push_str("}\n");
    }

    fn emit_index(&self, out: &mut String, set: &SetConfig, records: &[RecipeRecord]) {
        out.push_str("#[allow(unreachable_patterns)]\n");
        out.push_str(&format!(
            "pub fn {}(result: ItemKind) -> Option<usize> {{\n",
            set.index_fn
        ));
        out.push_str("    match result {\n");
        for (index, record) in records.iter().enumerate() {
            out.push_str(&format!(
                "        {} => Some({}),\n",
                record.result.kind.rust_path(),
                index
            ));
        }
        out.push_str("        _ => None,\n");
        out.push_str("    }\n");
        out.push_str("}\n");
    }
}

fn item_expr(stack: &ItemStack) -> String {
    format!("Item::new({}, {})", stack.kind.rust_path(), stack.amount)
}

fn slot_kind_expr(kind: &SlotKind) -> String {
    match kind {
        SlotKind::Input {
            filter: Filter::ItemKind(item),
        } => format!(
            "SlotKind::Input {{ filter: Filter::ItemKind({}) }}",
            item.rust_path()
        ),
        SlotKind::Output => "SlotKind::Output".to_string(),
    }
}
