use std::fmt;

// ============================================================================
// Item Kinds
// ============================================================================

/// A resolved item identifier.
///
/// Structures and voxel materials are compound identifiers in the game
/// (`ItemKind::Structure(StructureKind::Belt)`), so they get their own tag
/// instead of being matched as strings. The compiler only builds records
/// from kinds returned by
/// [`ItemNamespace::resolve`](crate::data::ItemNamespace::resolve), so any
/// `ItemKind` in a compiled record is known to the game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    Plain(String),
    Structure(String),
    Voxel(String),
}

/// Which part of the namespace an identifier lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindTag {
    Plain,
    Structure,
    Voxel,
}

const STRUCTURE_PREFIX: &str = "Structure(StructureKind::";
const VOXEL_PREFIX: &str = "Voxel(Voxel::";

impl ItemKind {
    pub(crate) fn new(tag: KindTag, name: &str) -> Self {
        match tag {
            KindTag::Plain => ItemKind::Plain(name.to_string()),
            KindTag::Structure => ItemKind::Structure(name.to_string()),
            KindTag::Voxel => ItemKind::Voxel(name.to_string()),
        }
    }

    pub fn tag(&self) -> KindTag {
        match self {
            ItemKind::Plain(_) => KindTag::Plain,
            ItemKind::Structure(_) => KindTag::Structure,
            ItemKind::Voxel(_) => KindTag::Voxel,
        }
    }

    /// Bare variant name, e.g. `Belt` for a belt structure
    pub fn name(&self) -> &str {
        match self {
            ItemKind::Plain(name) | ItemKind::Structure(name) | ItemKind::Voxel(name) => name,
        }
    }

    /// Rust expression for this kind in generated source
    pub fn rust_path(&self) -> String {
        format!("ItemKind::{}", self)
    }
}

/// Authored form, identical to the variant as written inside `ItemKind::`
impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Plain(name) => write!(f, "{}", name),
            ItemKind::Structure(name) => write!(f, "{}{})", STRUCTURE_PREFIX, name),
            ItemKind::Voxel(name) => write!(f, "{}{})", VOXEL_PREFIX, name),
        }
    }
}

/// Split an authored identifier into its tag and bare variant name.
///
/// Returns `None` when the text is not a well-formed identifier at all; a
/// well-formed but unknown name is the namespace's call to reject.
pub fn parse_identifier(text: &str) -> Option<(KindTag, &str)> {
    let text = text.trim();

    let (tag, name) = if let Some(rest) = text.strip_prefix(STRUCTURE_PREFIX) {
        (KindTag::Structure, rest.strip_suffix(')')?)
    } else if let Some(rest) = text.strip_prefix(VOXEL_PREFIX) {
        (KindTag::Voxel, rest.strip_suffix(')')?)
    } else {
        (KindTag::Plain, text)
    };

    is_variant_name(name).then_some((tag, name))
}

fn is_variant_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_identifier("IronPlate"), Some((KindTag::Plain, "IronPlate")));
        assert_eq!(parse_identifier("  Coal "), Some((KindTag::Plain, "Coal")));
    }

    #[test]
    fn test_parse_compound() {
        assert_eq!(
            parse_identifier("Structure(StructureKind::Belt)"),
            Some((KindTag::Structure, "Belt"))
        );
        assert_eq!(
            parse_identifier("Voxel(Voxel::Stone)"),
            Some((KindTag::Voxel, "Stone"))
        );
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(parse_identifier(""), None);
        assert_eq!(parse_identifier("Structure(StructureKind::Belt"), None);
        assert_eq!(parse_identifier("Voxel(Voxel::)"), None);
        assert_eq!(parse_identifier("Iron Plate"), None);
        assert_eq!(parse_identifier("9Lives"), None);
    }

    #[test]
    fn test_display_round_trips_authored_form() {
        for text in ["IronPlate", "Structure(StructureKind::Chest)", "Voxel(Voxel::Stone)"] {
            let (tag, name) = parse_identifier(text).unwrap();
            assert_eq!(ItemKind::new(tag, name).to_string(), text);
        }
    }

    #[test]
    fn test_rust_path() {
        let kind = ItemKind::new(KindTag::Structure, "Silo");
        assert_eq!(kind.rust_path(), "ItemKind::Structure(StructureKind::Silo)");
        assert_eq!(kind.name(), "Silo");
        assert_eq!(kind.tag(), KindTag::Structure);
    }
}
