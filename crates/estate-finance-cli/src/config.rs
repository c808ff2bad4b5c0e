use estate_finance_core::mortgage::MortgageBounds;

use crate::input;

/// Resolve the slider bounds: a `--config` document if given, otherwise the
/// built-in defaults. Fields missing from the document keep their defaults.
pub fn load_bounds(path: Option<&str>) -> Result<MortgageBounds, Box<dyn std::error::Error>> {
    let bounds = match path {
        Some(path) => {
            tracing::debug!(path, "loading mortgage bounds");
            input::file::read_document::<MortgageBounds>(path)?
        }
        None => MortgageBounds::default(),
    };

    bounds.validate()?;
    tracing::debug!(
        min_tenure = bounds.min_tenure_years,
        max_tenure = bounds.max_tenure_years,
        min_rate = %bounds.min_rate_percent,
        max_rate = %bounds.max_rate_percent,
        "mortgage bounds in effect"
    );
    Ok(bounds)
}
