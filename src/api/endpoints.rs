// URL builders for the legacy spectator (observer-mode) API.
// The region prefix is a platform code like EUW, NA or EUNE.

pub const SERVICE_HOST: &str = "api.pvp.net";
pub const FEATURED_PATH: &str = "observer-mode/rest/featured";

/// Builds the featured-games request URL from its raw parts.
///
/// Region and query type are interpolated verbatim; no validation or
/// percent-encoding is applied.
pub fn forge_request(api_key: &str, region: &str, query_type: &str) -> String {
    // Every query type is served by the featured template; the static-data
    // endpoint exists upstream but is not exposed here.
    let _ = query_type;

    format!(
        "https://{}.{}/{}?api_key={}",
        region, SERVICE_HOST, FEATURED_PATH, api_key
    )
}
