use xbind_common::CaseSensitivity;

#[test]
fn sensitive_mode_compares_exactly() {
    let mode = CaseSensitivity::Sensitive;
    assert!(mode.names_equal("Length", "Length"));
    assert!(!mode.names_equal("Length", "length"));
}

#[test]
fn insensitive_mode_ignores_case() {
    let mode = CaseSensitivity::Insensitive;
    assert!(mode.names_equal("Length", "LENGTH"));
    assert!(mode.names_equal("Straße", "STRAßE"));
    assert!(!mode.names_equal("Length", "Lengths"));
}

#[test]
fn prefixed_comparison_matches_accessor_names() {
    assert!(CaseSensitivity::Sensitive.names_equal_prefixed("get_Count", "get_", "Count"));
    assert!(!CaseSensitivity::Sensitive.names_equal_prefixed("get_Count", "get_", "count"));
    assert!(CaseSensitivity::Insensitive.names_equal_prefixed("GET_Count", "get_", "count"));
    assert!(!CaseSensitivity::Insensitive.names_equal_prefixed("get", "get_", ""));
    assert!(!CaseSensitivity::Insensitive.names_equal_prefixed("set_Count", "get_", "Count"));
}

#[test]
fn normalize_only_lowercases_in_insensitive_mode() {
    assert_eq!(CaseSensitivity::Sensitive.normalize("Int"), "Int");
    assert_eq!(CaseSensitivity::Insensitive.normalize("Int"), "int");
}

#[test]
fn from_flag_maps_host_setting() {
    assert_eq!(CaseSensitivity::from_flag(true), CaseSensitivity::Sensitive);
    assert_eq!(CaseSensitivity::from_flag(false), CaseSensitivity::Insensitive);
    assert!(CaseSensitivity::default().is_sensitive());
}

#[test]
fn array_rank_suffix_renders_commas_per_dimension() {
    use xbind_common::array_rank_suffix;
    assert_eq!(array_rank_suffix(0), "");
    assert_eq!(array_rank_suffix(1), "[]");
    assert_eq!(array_rank_suffix(2), "[,]");
    assert_eq!(array_rank_suffix(4), "[,,,]");
}
