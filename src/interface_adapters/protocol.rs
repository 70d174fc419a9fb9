// Wire payloads owned by the remote state server.

use serde::Deserialize;

/// Authoritative game state returned by `GET {base_url}/state`.
///
/// The server owns the shape; only the weapon level is consumed here, and a
/// missing field means tier zero. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteGameState {
    #[serde(rename = "weaponLevel", default)]
    pub weapon_level: u8,
}
