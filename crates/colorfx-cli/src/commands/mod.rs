//! CLI command implementations

pub mod apply;
pub mod matrix;

use crate::ChainSource;
use anyhow::{bail, Context, Result};
use colorfx_core::ColorComponents;
use colorfx_ops::FilterChain;
use std::fs;
use tracing::debug;

/// Builds the filter chain from CSS text or a JSON chain file.
pub fn load_chain(source: &ChainSource) -> Result<FilterChain> {
    if let Some(path) = &source.chain {
        debug!(path = %path.display(), "Loading filter chain");
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        return serde_json::from_str(&text)
            .with_context(|| format!("Invalid filter chain JSON: {}", path.display()));
    }

    let filters = source.filters.as_deref().unwrap_or_default();
    filters
        .parse()
        .with_context(|| format!("Invalid filter list: {filters:?}"))
}

/// Parses comma-separated R,G,B or R,G,B,A values. Alpha defaults to 1.
pub fn parse_color(s: &str) -> Result<ColorComponents<f32>> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Invalid color: {s:?}"))?;
    match parts.as_slice() {
        &[r, g, b] => Ok(ColorComponents::new([r, g, b, 1.0])),
        &[r, g, b, a] => Ok(ColorComponents::new([r, g, b, a])),
        _ => bail!("Expected 3 or 4 values (R,G,B[,A]), got {}", parts.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorfx_ops::FilterOperation;
    use tempfile::tempdir;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("1, 0.5, 0").unwrap().to_array(), [1.0, 0.5, 0.0, 1.0]);
        assert_eq!(parse_color("1,0.5,0,0.25").unwrap().to_array(), [1.0, 0.5, 0.0, 0.25]);
        assert!(parse_color("1,0").is_err());
        assert!(parse_color("red").is_err());
    }

    #[test]
    fn test_load_chain_from_text() {
        let source = ChainSource { filters: Some("sepia(1) saturate(0)".into()), chain: None };
        assert_eq!(load_chain(&source).unwrap().len(), 2);

        let bad = ChainSource { filters: Some("blur(1px)".into()), chain: None };
        assert!(load_chain(&bad).is_err());
    }

    #[test]
    fn test_load_chain_missing_file() {
        let source = ChainSource {
            filters: None,
            chain: Some("/nonexistent/colorfx/chain.json".into()),
        };
        let err = load_chain(&source).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_chain_from_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("look.json");
        fs::write(
            &path,
            r#"{"operations":[{"type":"sepia","amount":0.6},{"type":"hue-rotate","degrees":90.0}]}"#,
        )
        .unwrap();

        let source = ChainSource { filters: None, chain: Some(path) };
        let chain = load_chain(&source).unwrap();
        assert_eq!(
            chain.operations(),
            &[
                FilterOperation::Sepia { amount: 0.6 },
                FilterOperation::HueRotate { degrees: 90.0 },
            ]
        );
    }

    #[test]
    fn test_load_chain_rejects_negative_amount_in_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"operations":[{"type":"saturate","amount":-2.0}]}"#).unwrap();

        let source = ChainSource { filters: None, chain: Some(path) };
        let err = load_chain(&source).unwrap_err();
        assert!(format!("{err:#}").contains("non-negative"));
    }
}
