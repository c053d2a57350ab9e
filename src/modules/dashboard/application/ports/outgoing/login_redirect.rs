//
// ──────────────────────────────────────────────────────────
// Port: forced navigation to the login page
// ──────────────────────────────────────────────────────────
//
// When the backend rejects a token, the session is wiped and the user
// must land on the login page; no authenticated call may silently
// continue. Navigation is the embedder's capability (a router in a UI,
// nothing in a CLI), so it is a port. The service guarantees the order:
// session cleared, then redirect fired, then the error surfaced.
//

pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self);
}

/// For embedders with nowhere to navigate to.
#[derive(Default)]
pub struct NoRedirect;

impl LoginRedirect for NoRedirect {
    fn redirect_to_login(&self) {}
}
