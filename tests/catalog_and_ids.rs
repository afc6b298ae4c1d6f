//! Integration tests for the collaborator surfaces: vocabulary catalog,
//! id-list parsing and the settings file.

use std::fs;

use tempfile::TempDir;

use char_codec::config::{load_settings, OutputFormat, CONFIG_FILENAME};
use char_codec::{
    format_token_ids, parse_token_ids, parse_token_ids_strict, Catalog, CharCategory, CodecError,
    Symbol, VocabKind, VocabQuery, CODEC,
};

// ============================================================================
// Catalog
// ============================================================================

mod catalog {
    use super::*;

    #[test]
    fn test_stats_add_up() {
        let stats = Catalog::new(&CODEC).stats();
        let sum: usize = VocabKind::ALL.iter().map(|k| stats.count(*k)).sum();
        assert_eq!(sum, stats.total);
        assert_eq!(stats.total, 74);
    }

    #[test]
    fn test_kind_filters_partition_table() {
        let catalog = Catalog::new(&CODEC);
        let mut seen = 0;
        for kind in VocabKind::ALL {
            let entries = catalog.filter(&VocabQuery::new().with_kind(kind));
            assert!(entries.iter().all(|e| e.kind == kind));
            seen += entries.len();
        }
        assert_eq!(seen, catalog.len());
    }

    #[test]
    fn test_digits_listing() {
        let digits = Catalog::new(&CODEC).filter(&VocabQuery::new().with_kind(VocabKind::Number));
        let ids: Vec<_> = digits.iter().map(|e| e.id).collect();
        assert_eq!(ids, (12..22).collect::<Vec<u32>>());
    }

    #[test]
    fn test_no_match() {
        let found = Catalog::new(&CODEC).filter(&VocabQuery::new().with_search("@@"));
        assert!(found.is_empty());
    }

    #[test]
    fn test_entry_serializes_kind_lowercase() {
        let catalog = Catalog::new(&CODEC);
        let json = serde_json::to_value(&catalog.entries()[0]).unwrap();
        assert_eq!(json["id"], 0);
        assert_eq!(json["kind"], "special");
        assert_eq!(json["symbol"], "begin");
    }

    #[test]
    fn test_entry_serializes_char_symbol() {
        let catalog = Catalog::new(&CODEC);
        let json = serde_json::to_value(&catalog.entries()[22]).unwrap();
        assert_eq!(json["symbol"], serde_json::json!({ "char": "a" }));
        assert_eq!(json["kind"], "lowercase");
    }
}

// ============================================================================
// Breakdown
// ============================================================================

mod breakdown {
    use super::*;

    #[test]
    fn test_breakdown_matches_encode() {
        let text = "123 Test! ~";
        let ids: Vec<_> = CODEC.breakdown(text).iter().map(|t| t.id).collect();
        assert_eq!(ids, CODEC.encode(text, false));
    }

    #[test]
    fn test_breakdown_categories() {
        let categories: Vec<_> = CODEC
            .breakdown("a1 ,")
            .into_iter()
            .map(|t| t.category)
            .collect();
        assert_eq!(
            categories,
            vec![
                CharCategory::Letter,
                CharCategory::Number,
                CharCategory::Space,
                CharCategory::Punctuation
            ]
        );
    }

    #[test]
    fn test_char_category_without_table() {
        assert_eq!(CODEC.char_category('~'), CharCategory::Other);
        assert_eq!(CODEC.id_of('~'), None);
    }

    #[test]
    fn test_token_info_json() {
        let tokens = CODEC.breakdown("H");
        let json = serde_json::to_string(&tokens).unwrap();
        assert_eq!(json, r#"[{"char":"H","id":55,"category":"letter"}]"#);
    }
}

// ============================================================================
// Id lists
// ============================================================================

mod id_lists {
    use super::*;

    #[test]
    fn test_parse_then_decode() {
        let parsed = parse_token_ids("0, 55, 26, 33, 33, 36, 1");
        assert_eq!(CODEC.decode(&parsed.ids), "Hello");
    }

    #[test]
    fn test_lenient_parse_keeps_going() {
        let parsed = parse_token_ids("55, oops, 56, , -4, 2");
        assert_eq!(parsed.ids, vec![55, 56, -4, 2]);
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(CODEC.decode(&parsed.ids), "HI ");
    }

    #[test]
    fn test_strict_parse_reports_position() {
        let err = parse_token_ids_strict("0, 1, two").unwrap_err();
        assert!(matches!(err, CodecError::InvalidTokenId { position: 2, .. }));
        assert_eq!(err.to_string(), "Invalid token id at position 2: \"two\"");
    }

    #[test]
    fn test_format_matches_encode_display() {
        let ids = CODEC.encode("Hi", true);
        assert_eq!(format_token_ids(&ids), "0, 55, 30, 1");
        assert_eq!(parse_token_ids(&format_token_ids(&ids)).ids, vec![0, 55, 30, 1]);
    }

    #[test]
    fn test_marker_label_is_not_an_id() {
        let parsed = parse_token_ids("<BOS>, 22");
        assert_eq!(parsed.ids, vec![22]);
        assert_eq!(Symbol::Begin.label(), "<BOS>");
    }
}

// ============================================================================
// Settings file
// ============================================================================

mod settings {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let settings = load_settings(&temp_dir.path().join(CONFIG_FILENAME)).unwrap();
        assert!(settings.wrap_special);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "wrap_special: false\nformat: json\nstrict_ids: true\n")
            .expect("Failed to write settings");

        let settings = load_settings(&path).unwrap();
        assert!(!settings.wrap_special);
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.strict_ids);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "wrap_special: [not, a, bool]\n").expect("Failed to write settings");

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, CodecError::Config(_)));
    }
}
