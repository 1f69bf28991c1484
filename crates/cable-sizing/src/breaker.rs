//! Breaker coordination (Ib <= In <= Iz)

/// Smallest ladder rating between the load current and the derated conductor
/// ampacity, both inclusive.
pub fn select_breaker(ladder: &[u32], load_current: f64, safe_ampacity: f64) -> Option<u32> {
    ladder
        .iter()
        .copied()
        .find(|&rating| f64::from(rating) >= load_current)
        .filter(|&rating| f64::from(rating) <= safe_ampacity)
}
