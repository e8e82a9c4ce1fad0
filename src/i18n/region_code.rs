pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    /// Belgium, the only region with a mobile zone override.
    pub fn be() -> &'static str {
        return "BE";
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }
}
