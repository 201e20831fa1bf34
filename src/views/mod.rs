//! Pure presentation computations.
//!
//! Everything here maps already-computed flow state to display structures;
//! no networking, no mutation. The rendering layer (whatever it is) only
//! has to print what it is given.

pub mod authorization_status;
pub mod credential_card;
pub mod step_indicator;

pub use authorization_status::*;
pub use credential_card::*;
pub use step_indicator::*;

/// `0xabcde12345...54321` style shortening for addresses.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 13 {
        return address.to_owned();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{head}...{tail}")
}
