//! Country reference entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the immutable country reference table.
///
/// Serializes to the wire shape used by both country endpoints:
/// `{name, alpha2, alpha3, region}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Country {
    /// Full country name (unique across the table)
    #[schema(example = "Netherlands")]
    pub name: String,
    /// ISO 3166-1 alpha-2 code
    #[schema(example = "NL")]
    pub alpha2: String,
    /// ISO 3166-1 alpha-3 code
    #[schema(example = "NLD")]
    pub alpha3: String,
    /// Geographic region (free text, matched exactly on filtering)
    #[schema(example = "Europe")]
    pub region: String,
}
