//! Network URL constants for the Bonfida SDK.

/// Default base URL for public market-data endpoints.
pub const PUBLIC_API_URL: &str = "https://serum-api.bonfida.com";

/// Default base URL for the private API surface.
///
/// The private surface currently shares the public host; it is kept as a
/// separate constant because the two scopes are configured independently.
pub const PRIVATE_API_URL: &str = "https://serum-api.bonfida.com";
