/// Where the code is running, which decides whether persistent storage may
/// be touched at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    Browser,
    /// Server-side rendering or any other non-interactive context.
    Server,
}

impl Environment {
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        if web_sys::window().is_some() {
            return Self::Browser;
        }
        Self::Server
    }

    pub fn has_storage(self) -> bool {
        matches!(self, Self::Browser)
    }
}
