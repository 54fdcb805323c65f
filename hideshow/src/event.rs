/// A click delivered to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent<N> {
    /// Element the click landed on. Handlers on ancestors see it via bubbling.
    pub target: N,
    default_prevented: bool,
}

impl<N> ClickEvent<N> {
    pub fn new(target: N) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    /// Suppress the host's default action (e.g. following a link).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
