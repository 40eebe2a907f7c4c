//! # BRFC Flows
//!
//! Published spec lists loaded into a registry, ids checked against the
//! capability document values and the CLI command layer.

#[cfg(test)]
mod tests {
    use paymail_node::commands::brfc;
    use pm_01_brfc::{load_specs, BrfcError, BrfcIdScheme, BrfcRegistry, BrfcSpec};

    use crate::fixtures::KNOWN_BRFCS_JSON;

    #[test]
    fn test_published_ids_validate() {
        let registry = BrfcRegistry::from_json(KNOWN_BRFCS_JSON).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.get("74524c4d6274").unwrap().title(),
            "bsvalias Payment Addressing (PayTo Protocol Prefix)"
        );
        assert_eq!(
            registry.find_by_alias("brfc-spec").unwrap().id().unwrap().as_str(),
            "57dd1f54fc67"
        );
    }

    #[test]
    fn test_published_ids_fail_under_compact_scheme() {
        let err = BrfcRegistry::from_json_with(KNOWN_BRFCS_JSON, BrfcIdScheme::Compact).unwrap_err();
        assert!(matches!(err, BrfcError::IdMismatch { .. }));
    }

    #[test]
    fn test_ids_generated_for_unpublished_entries() {
        let json = r#"[{"title": "New BRFC", "author": "MrZ", "version": "1"}]"#;

        let specs = load_specs(json, BrfcIdScheme::Bsvalias).unwrap();
        assert_eq!(specs[0].id().unwrap().as_str(), "e898079d7d1a");

        let specs = load_specs(json, BrfcIdScheme::Compact).unwrap();
        assert_eq!(specs[0].id().unwrap().as_str(), "kpRnIjU=");
    }

    #[test]
    fn test_edit_then_regenerate() {
        let mut spec = BrfcSpec::new("New BRFC", "MrZ", "1");
        let original = spec.generate().unwrap().clone();

        spec.set_version("2");
        assert!(spec.id().is_none());

        let bumped = spec.generate().unwrap().clone();
        assert_ne!(original, bumped);

        let (valid, _) = spec.validate().unwrap();
        assert!(valid);
    }

    #[test]
    fn test_cli_layer_matches_library() {
        let registry = BrfcRegistry::from_json(KNOWN_BRFCS_JSON).unwrap();

        for (id, spec) in registry.iter() {
            let generated = brfc::generate(
                spec.title(),
                spec.author(),
                spec.version(),
                BrfcIdScheme::Bsvalias,
            )
            .unwrap();
            assert_eq!(generated, id.as_str());
        }

        let lines = brfc::check(KNOWN_BRFCS_JSON, BrfcIdScheme::Bsvalias).unwrap();
        assert_eq!(lines.len(), registry.len());
    }
}
