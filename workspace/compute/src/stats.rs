use model::Hotspot;

/// Summary figures for the currently filtered hotspots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HotspotStats {
    /// Sum of counts
    pub total: u64,
    /// Number of hotspots
    pub active_count: usize,
    /// `total / active_count` rounded to nearest, 0 when empty
    pub average: u64,
    /// Largest count, 0 when empty
    pub max: u64,
}

impl HotspotStats {
    pub fn from_hotspots<'a, I>(hotspots: I) -> Self
    where
        I: IntoIterator<Item = &'a Hotspot>,
    {
        let (total, active_count, max) = hotspots
            .into_iter()
            .fold((0u64, 0usize, 0u64), |(total, n, max), h| {
                (total.saturating_add(h.count), n + 1, max.max(h.count))
            });

        let average = if active_count == 0 {
            0
        } else {
            (total as f64 / active_count as f64).round() as u64
        };

        Self {
            total,
            active_count,
            average,
            max,
        }
    }
}
