//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch today's times for the city, tagged with the issuing sequence
    FetchTimes { seq: u64, city_id: u32 },
}
