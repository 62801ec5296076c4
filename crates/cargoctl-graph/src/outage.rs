//! Offline-edge tracker (C10).
//!
//! Records temporary edge outages reported by the environment as free-form
//! warning strings, and exposes a pruned view of the route graph for
//! rerouting. Outages are undirected — a reported `(u, v)` blocks travel in
//! both directions until it expires.

use std::collections::HashMap;

use cargoctl_core::{AirportId, Tick};

/// Tracks `(min(u,v), max(u,v)) -> expiry tick` for temporarily unavailable
/// edges, purging expired entries before each ingest (mirrors the
/// purge-then-insert discipline used for wake-queue style expiry tracking
/// elsewhere in this codebase).
#[derive(Default)]
pub struct OfflineEdges {
    expiry: HashMap<(AirportId, AirportId), Tick>,
}

impl OfflineEdges {
    pub fn new() -> Self {
        Self {
            expiry: HashMap::new(),
        }
    }

    fn key(u: AirportId, v: AirportId) -> (AirportId, AirportId) {
        if u <= v { (u, v) } else { (v, u) }
    }

    /// Purge every entry whose expiry has already passed as of `now`.
    pub fn purge_expired(&mut self, now: Tick) {
        self.expiry.retain(|_, &mut expiry| expiry > now);
    }

    /// Record that the edge between `u` and `v` is unavailable until
    /// `now + duration_ticks`. Does not overwrite a longer existing outage.
    pub fn report(&mut self, u: AirportId, v: AirportId, now: Tick, duration_ticks: u64) {
        let key = Self::key(u, v);
        let expiry = now.offset(duration_ticks);
        self.expiry
            .entry(key)
            .and_modify(|e| *e = (*e).max(expiry))
            .or_insert(expiry);
    }

    /// Ingest a tick's warning messages, purging stale entries first. Only
    /// messages beginning with `"ROUTE FROM:"` are consumed; malformed
    /// messages are ignored.
    pub fn ingest(&mut self, now: Tick, warnings: &[String]) {
        self.purge_expired(now);
        for warning in warnings {
            if let Some(parsed) = parse_route_warning(warning) {
                self.report(parsed.from, parsed.to, now, parsed.duration_ticks);
            }
        }
    }

    pub fn is_offline(&self, u: AirportId, v: AirportId) -> bool {
        self.expiry.contains_key(&Self::key(u, v))
    }

    pub fn len(&self) -> usize {
        self.expiry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expiry.is_empty()
    }
}

struct ParsedWarning {
    from: AirportId,
    to: AirportId,
    duration_ticks: u64,
}

/// Parse a `"ROUTE FROM: <u> TO: <v> DOWN FOR <n> STEPS"`-shaped warning.
/// Endpoints sit at token indices 2 and 4; the duration is the second to
/// last token.
fn parse_route_warning(message: &str) -> Option<ParsedWarning> {
    if !message.starts_with("ROUTE FROM:") {
        return None;
    }
    let tokens: Vec<&str> = message.split_whitespace().collect();
    if tokens.len() < 6 {
        return None;
    }
    let from: u32 = tokens.get(2)?.parse().ok()?;
    let to: u32 = tokens.get(4)?.parse().ok()?;
    let duration: u64 = tokens[tokens.len() - 2].parse().ok()?;
    Some(ParsedWarning {
        from: AirportId(from),
        to: AirportId(to),
        duration_ticks: duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_warning() {
        let msg = "ROUTE FROM: 2 TO: 3 DOWN FOR 10 STEPS";
        let parsed = parse_route_warning(msg).unwrap();
        assert_eq!(parsed.from, AirportId(2));
        assert_eq!(parsed.to, AirportId(3));
        assert_eq!(parsed.duration_ticks, 10);
    }

    #[test]
    fn ignores_unrelated_messages() {
        assert!(parse_route_warning("PLANE DELAYED").is_none());
        assert!(parse_route_warning("").is_none());
    }

    #[test]
    fn s4_outage_reroute_window() {
        // S4: outage reported at tick 5 for 10 steps must still be active at
        // tick 5 and expired by tick 16.
        let mut offline = OfflineEdges::new();
        offline.ingest(
            Tick(5),
            &["ROUTE FROM: 2 TO: 3 DOWN FOR 10 STEPS".to_string()],
        );
        assert!(offline.is_offline(AirportId(2), AirportId(3)));
        offline.purge_expired(Tick(16));
        assert!(!offline.is_offline(AirportId(2), AirportId(3)));
    }

    #[test]
    fn outage_is_undirected() {
        let mut offline = OfflineEdges::new();
        offline.report(AirportId(1), AirportId(2), Tick(0), 5);
        assert!(offline.is_offline(AirportId(2), AirportId(1)));
    }
}
