/// Identifies one fetch issued from a fetch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Per-fetch-site request counter.
///
/// Every fetch takes a ticket with [`begin`](Self::begin); when the response
/// arrives it is applied only if its ticket is still the latest one, so a
/// slow response from a superseded request (rapid tenant or role switch)
/// cannot overwrite newer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Ticket {
        self.current = self.current.wrapping_add(1);
        Ticket(self.current)
    }

    /// Supersede every in-flight request without starting a new one.
    pub fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }

    /// `Some(value)` when `ticket` is still current, `None` for a stale
    /// response.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            log::debug!(
                "discarding stale response (ticket {}, current {})",
                ticket.0,
                self.current
            );
            None
        }
    }
}
