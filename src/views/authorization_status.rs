use super::format_address;

/// What the authorization indicator shows: a pending spinner, or a green
/// check with the (shortened) wallet address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationStatusView {
    Pending,
    Authorized { address: Option<String> },
}

pub fn authorization_status(
    is_authorized: bool,
    wallet_address: Option<&str>,
) -> AuthorizationStatusView {
    if !is_authorized {
        return AuthorizationStatusView::Pending;
    }
    AuthorizationStatusView::Authorized {
        address: wallet_address.map(format_address),
    }
}
