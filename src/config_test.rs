use std::collections::HashMap;

use super::*;

fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = from_pairs(&[]).unwrap();
    assert_eq!(config, Config::default());
    assert!((config.side - 500.0).abs() < f64::EPSILON);
    assert_eq!(config.max_depth, 64);
    assert_eq!(config.asset_dir, PathBuf::from("runes"));
}

#[test]
fn reads_every_variable() {
    let config = from_pairs(&[(SIDE_VAR, " 250.5 "), (MAX_DEPTH_VAR, "8"), (ASSET_DIR_VAR, "/srv/glyphs")]).unwrap();
    assert!((config.side - 250.5).abs() < f64::EPSILON);
    assert_eq!(config.max_depth, 8);
    assert_eq!(config.asset_dir, PathBuf::from("/srv/glyphs"));
    assert_eq!(config.parser().max_depth(), 8);
}

#[test]
fn blank_asset_dir_falls_back() {
    let config = from_pairs(&[(ASSET_DIR_VAR, "   ")]).unwrap();
    assert_eq!(config.asset_dir, PathBuf::from("runes"));
}

#[test]
fn side_must_be_a_positive_number() {
    assert_eq!(
        from_pairs(&[(SIDE_VAR, "wide")]).unwrap_err(),
        ConfigError::Parse { key: SIDE_VAR, value: "wide".into() }
    );
    for bad in ["0", "-3", "inf", "NaN"] {
        assert_eq!(
            from_pairs(&[(SIDE_VAR, bad)]).unwrap_err(),
            ConfigError::NotPositive { key: SIDE_VAR, value: bad.into() },
            "{bad}"
        );
    }
}

#[test]
fn max_depth_must_be_a_positive_integer() {
    assert_eq!(
        from_pairs(&[(MAX_DEPTH_VAR, "0")]).unwrap_err(),
        ConfigError::NotPositive { key: MAX_DEPTH_VAR, value: "0".into() }
    );
    assert_eq!(
        from_pairs(&[(MAX_DEPTH_VAR, "-1")]).unwrap_err(),
        ConfigError::Parse { key: MAX_DEPTH_VAR, value: "-1".into() }
    );
    assert_eq!(
        from_pairs(&[(MAX_DEPTH_VAR, "2.5")]).unwrap_err(),
        ConfigError::Parse { key: MAX_DEPTH_VAR, value: "2.5".into() }
    );
}
