// Header label configuration for roster column inference.
//
// Labels are matched as substrings of the trimmed, lowercased header text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterField {
    Identifier,
    Name,
    Tags,
}

pub const IDENTIFIER_ALIASES: &[&str] = &["id", "ident"];

pub const NAME_ALIASES: &[&str] = &["name", "nombre"];

pub const TAGS_ALIASES: &[&str] = &["abilities", "habilidades"];

impl RosterField {
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            RosterField::Identifier => IDENTIFIER_ALIASES,
            RosterField::Name => NAME_ALIASES,
            RosterField::Tags => TAGS_ALIASES,
        }
    }

    /// Column used when no header matches. Best-effort only.
    pub fn fallback_column(self) -> Option<usize> {
        match self {
            RosterField::Identifier => Some(0),
            RosterField::Name => Some(1),
            RosterField::Tags => None,
        }
    }
}

pub fn normalize_header(s: &str) -> String {
    s.trim().to_lowercase()
}

pub fn header_matches(normalized_header: &str, field: RosterField) -> bool {
    field
        .aliases()
        .iter()
        .any(|alias| normalized_header.contains(alias))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        assert!(header_matches(&normalize_header(" Pokemon ID "), RosterField::Identifier));
        assert!(header_matches(&normalize_header("Nombre"), RosterField::Name));
        assert!(header_matches(&normalize_header("HABILIDADES"), RosterField::Tags));
        assert!(!header_matches(&normalize_header("Foo"), RosterField::Tags));
    }

    #[test]
    fn test_tags_have_no_fallback() {
        assert_eq!(RosterField::Identifier.fallback_column(), Some(0));
        assert_eq!(RosterField::Name.fallback_column(), Some(1));
        assert_eq!(RosterField::Tags.fallback_column(), None);
    }
}
